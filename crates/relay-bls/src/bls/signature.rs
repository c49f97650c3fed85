use crate::{encoding, BLSError, BlsResult, CurveBackend, DefaultBackend, SIGNATURE_LENGTH};
use log::debug;
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// A BLS signature on G2.
pub struct Signature<B: CurveBackend = DefaultBackend>(B::G2);

impl<B: CurveBackend> Signature<B> {
    pub(crate) fn from_point(sig: B::G2) -> Self {
        Signature(sig)
    }

    pub fn as_point(&self) -> &B::G2 {
        &self.0
    }

    /// Decodes a 96-byte compressed point, checking that it is in the prime-order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Self> {
        let bytes = encoding::to_fixed::<SIGNATURE_LENGTH>("signature", bytes)?;
        let sig = B::g2_decompress(&bytes).and_then(|sig| {
            B::g2_validate(&sig)?;
            Ok(sig)
        });
        sig.map(Signature).map_err(|e| {
            debug!("rejected signature {}: {}", hex::encode(bytes), e);
            e
        })
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        B::g2_compress(&self.0)
    }
}

impl<B: CurveBackend> Clone for Signature<B> {
    fn clone(&self) -> Self {
        Signature(self.0.clone())
    }
}

impl<B: CurveBackend> PartialEq for Signature<B> {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl<B: CurveBackend> Eq for Signature<B> {}

impl<B: CurveBackend> Hash for Signature<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl<B: CurveBackend> TryFrom<&[u8]> for Signature<B> {
    type Error = BLSError;

    fn try_from(bytes: &[u8]) -> BlsResult<Self> {
        Signature::from_bytes(bytes)
    }
}

impl<B: CurveBackend> fmt::Display for Signature<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoding::encode_hex(&self.to_bytes()))
    }
}

impl<B: CurveBackend> fmt::Debug for Signature<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.to_bytes()[..8]))
    }
}

impl<B: CurveBackend> FromStr for Signature<B> {
    type Err = BLSError;

    fn from_str(s: &str) -> BlsResult<Self> {
        Signature::from_bytes(&encoding::decode_hex(s)?)
    }
}
