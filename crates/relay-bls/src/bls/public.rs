use crate::{
    encoding, BLSError, BlsResult, CurveBackend, DefaultBackend, Signature, CIPHERSUITE_DST,
    PUBLIC_KEY_LENGTH,
};
use log::debug;
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// A BLS public key on G1
pub struct PublicKey<B: CurveBackend = DefaultBackend>(B::G1);

impl<B: CurveBackend> PublicKey<B> {
    pub(crate) fn from_point(pk: B::G1) -> Self {
        PublicKey(pk)
    }

    pub fn as_point(&self) -> &B::G1 {
        &self.0
    }

    /// Decodes a 48-byte compressed point, checking that it is a non-identity element of
    /// the prime-order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Self> {
        let bytes = encoding::to_fixed::<PUBLIC_KEY_LENGTH>("public key", bytes)?;
        let pk = B::g1_decompress(&bytes).and_then(|pk| {
            B::g1_validate(&pk)?;
            Ok(pk)
        });
        match pk {
            Ok(pk) => Ok(PublicKey(pk)),
            Err(e) => {
                debug!("rejected public key {}: {}", hex::encode(bytes), e);
                Err(e)
            }
        }
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        B::g1_compress(&self.0)
    }

    /// Checks `signature` over `message`. A well-formed signature that does not match
    /// returns `Ok(false)`.
    pub fn verify(&self, message: &[u8], signature: &Signature<B>) -> BlsResult<bool> {
        let valid = B::verify(&self.0, message, CIPHERSUITE_DST, signature.as_point())?;
        if !valid {
            debug!("signature did not verify against {}", self);
        }
        Ok(valid)
    }
}

impl<B: CurveBackend> Clone for PublicKey<B> {
    fn clone(&self) -> Self {
        PublicKey(self.0.clone())
    }
}

impl<B: CurveBackend> PartialEq for PublicKey<B> {
    fn eq(&self, other: &Self) -> bool {
        // Byte-level equality works the same way for every backend's point representation
        self.to_bytes() == other.to_bytes()
    }
}

impl<B: CurveBackend> Eq for PublicKey<B> {}

impl<B: CurveBackend> Hash for PublicKey<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl<B: CurveBackend> TryFrom<&[u8]> for PublicKey<B> {
    type Error = BLSError;

    fn try_from(bytes: &[u8]) -> BlsResult<Self> {
        PublicKey::from_bytes(bytes)
    }
}

impl<B: CurveBackend> fmt::Display for PublicKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoding::encode_hex(&self.to_bytes()))
    }
}

impl<B: CurveBackend> fmt::Debug for PublicKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.to_bytes()[..8]))
    }
}

impl<B: CurveBackend> FromStr for PublicKey<B> {
    type Err = BLSError;

    fn from_str(s: &str) -> BlsResult<Self> {
        PublicKey::from_bytes(&encoding::decode_hex(s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        test_helpers::{g1_not_on_curve, g1_outside_subgroup, keygen, PUBLIC_KEY_VECTORS},
        Arkworks, Blst, SecretKey,
    };
    use std::collections::HashSet;

    #[test]
    fn test_public_key_serialization() {
        test_public_key_serialization_inner::<Arkworks>();
        test_public_key_serialization_inner::<Blst>();
    }

    fn test_public_key_serialization_inner<B: CurveBackend>() {
        for seed in 0..20 {
            let (_, pk) = keygen::<B>(seed);
            let bytes = pk.to_bytes();
            // compression flag set, infinity flag clear
            assert_eq!(bytes[0] & 0xc0, 0x80);

            let de = PublicKey::<B>::from_bytes(&bytes).unwrap();
            assert_eq!(de, pk);
            let parsed: PublicKey<B> = pk.to_string().parse().unwrap();
            assert_eq!(parsed, pk);
        }
    }

    #[test]
    fn test_invalid_public_keys() {
        test_invalid_public_keys_inner::<Arkworks>();
        test_invalid_public_keys_inner::<Blst>();
    }

    fn test_invalid_public_keys_inner<B: CurveBackend>() {
        for len in [0usize, 32, 47, 49, 96] {
            assert_eq!(
                PublicKey::<B>::from_bytes(&vec![0x80; len]).unwrap_err(),
                BLSError::InvalidLength {
                    kind: "public key",
                    expected: 48,
                    actual: len
                }
            );
        }

        assert_eq!(
            PublicKey::<B>::from_bytes(&g1_not_on_curve()).unwrap_err(),
            BLSError::DecodeFailure("public key")
        );
        assert_eq!(
            PublicKey::<B>::from_bytes(&[0xff; 48]).unwrap_err(),
            BLSError::DecodeFailure("public key")
        );
        assert_eq!(
            PublicKey::<B>::from_bytes(&g1_outside_subgroup()).unwrap_err(),
            BLSError::InvalidPoint("public key")
        );

        let mut infinity = [0u8; 48];
        infinity[0] = 0xc0;
        assert_eq!(
            PublicKey::<B>::from_bytes(&infinity).unwrap_err(),
            BLSError::InvalidPoint("public key")
        );

        assert!(matches!(
            "0xnothex".parse::<PublicKey<B>>(),
            Err(BLSError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hash_follows_bytes() {
        let mut set = HashSet::new();
        for (sk_hex, _) in PUBLIC_KEY_VECTORS {
            let sk: SecretKey =
                SecretKey::from_bytes(&encoding::decode_hex(sk_hex).unwrap()).unwrap();
            set.insert(sk.to_public().unwrap());
            set.insert(sk.to_public().unwrap());
        }
        assert_eq!(set.len(), PUBLIC_KEY_VECTORS.len());
    }

    #[test]
    fn test_display() {
        let (sk_hex, pk_hex) = PUBLIC_KEY_VECTORS[0];
        let sk: SecretKey =
            SecretKey::from_bytes(&encoding::decode_hex(sk_hex).unwrap()).unwrap();
        let pk = sk.to_public().unwrap();
        assert_eq!(pk.to_string(), pk_hex);
        assert_eq!(format!("{:?}", pk), format!("PublicKey({})", &pk_hex[2..18]));
    }
}
