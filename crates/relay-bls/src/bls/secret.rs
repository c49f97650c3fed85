use crate::{
    encoding, BLSError, BlsResult, CurveBackend, DefaultBackend, CIPHERSUITE_DST,
    SECRET_KEY_LENGTH,
};
use log::trace;
use rand::{CryptoRng, RngCore};
use std::fmt;

use super::{PublicKey, Signature};

/// A BLS secret key: a scalar encoded as 32 big-endian bytes.
pub struct SecretKey<B: CurveBackend = DefaultBackend> {
    sk: B::Scalar,
}

impl<B: CurveBackend> SecretKey<B> {
    /// Samples a random non-zero secret key. Blocks only if the entropy source does.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let sk = B::random_scalar(rng);
            if !B::scalar_is_zero(&sk) {
                return SecretKey { sk };
            }
        }
    }

    /// Wraps a backend scalar without checking it. Zero keys are rejected when used.
    pub fn from_scalar(sk: B::Scalar) -> Self {
        SecretKey { sk }
    }

    pub fn as_scalar(&self) -> &B::Scalar {
        &self.sk
    }

    /// Decodes 32 big-endian bytes. The scalar must be non-zero and below the group order.
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Self> {
        let bytes = encoding::to_fixed::<SECRET_KEY_LENGTH>("secret key", bytes)?;
        if encoding::is_zero(&bytes) {
            return Err(BLSError::SecretKeyIsZero);
        }
        Ok(SecretKey {
            sk: B::scalar_from_bytes(&bytes)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        B::scalar_to_bytes(&self.sk)
    }

    fn ensure_non_zero(&self) -> BlsResult<()> {
        if B::scalar_is_zero(&self.sk) {
            return Err(BLSError::SecretKeyIsZero);
        }
        Ok(())
    }

    /// Derives the public key `sk * g1`.
    pub fn to_public(&self) -> BlsResult<PublicKey<B>> {
        self.ensure_non_zero()?;
        Ok(PublicKey::from_point(B::g1_generator_mul(&self.sk)))
    }

    /// Signs `message` as `sk * H(message)`, hashing with the ciphersuite tag.
    pub fn sign(&self, message: &[u8]) -> BlsResult<Signature<B>> {
        self.ensure_non_zero()?;
        trace!("signing {} byte message with {}", message.len(), B::NAME);
        Ok(Signature::from_point(B::sign(
            &self.sk,
            message,
            CIPHERSUITE_DST,
        )?))
    }
}

impl<B: CurveBackend> Clone for SecretKey<B> {
    fn clone(&self) -> Self {
        SecretKey {
            sk: self.sk.clone(),
        }
    }
}

impl<B: CurveBackend> TryFrom<&[u8]> for SecretKey<B> {
    type Error = BLSError;

    fn try_from(bytes: &[u8]) -> BlsResult<Self> {
        SecretKey::from_bytes(bytes)
    }
}

impl<B: CurveBackend> fmt::Debug for SecretKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("backend", &B::NAME)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_helpers::PUBLIC_KEY_VECTORS, Arkworks, Blst};
    use ark_bls12_381::Fr;
    use ark_ff::Zero;
    use rand::thread_rng;

    #[test]
    fn test_secret_to_pubkey() {
        test_secret_to_pubkey_inner::<Arkworks>();
        test_secret_to_pubkey_inner::<Blst>();
    }

    fn test_secret_to_pubkey_inner<B: CurveBackend>() {
        for (sk_hex, pk_hex) in PUBLIC_KEY_VECTORS {
            let sk_bytes = encoding::decode_hex(sk_hex).unwrap();
            let sk = SecretKey::<B>::from_bytes(&sk_bytes).unwrap();
            assert_eq!(sk.to_bytes().to_vec(), sk_bytes);

            let pk = sk.to_public().unwrap();
            assert_eq!(pk.to_string(), *pk_hex);
            // derivation is deterministic
            assert_eq!(sk.to_public().unwrap(), pk);
        }
    }

    #[test]
    fn test_zero_key_rejected() {
        assert_eq!(
            SecretKey::<Arkworks>::from_bytes(&[0u8; 32]).unwrap_err(),
            BLSError::SecretKeyIsZero
        );
        assert_eq!(
            SecretKey::<Blst>::from_bytes(&[0u8; 32]).unwrap_err(),
            BLSError::SecretKeyIsZero
        );

        let zero = SecretKey::<Arkworks>::from_scalar(Fr::zero());
        assert_eq!(zero.to_public().unwrap_err(), BLSError::SecretKeyIsZero);
        assert_eq!(zero.sign(b"hello").unwrap_err(), BLSError::SecretKeyIsZero);
    }

    #[test]
    fn test_length_rejected() {
        for len in [0usize, 1, 31, 33, 48, 96] {
            let bytes = vec![1u8; len];
            assert_eq!(
                SecretKey::<Arkworks>::from_bytes(&bytes).unwrap_err(),
                BLSError::InvalidLength {
                    kind: "secret key",
                    expected: 32,
                    actual: len
                }
            );
            assert!(matches!(
                SecretKey::<Blst>::try_from(&bytes[..]),
                Err(BLSError::InvalidLength { .. })
            ));
        }
    }

    #[test]
    fn test_non_canonical_scalar_rejected() {
        assert_eq!(
            SecretKey::<Arkworks>::from_bytes(&[0xff; 32]).unwrap_err(),
            BLSError::DecodeFailure("secret key")
        );
        assert_eq!(
            SecretKey::<Blst>::from_bytes(&[0xff; 32]).unwrap_err(),
            BLSError::DecodeFailure("secret key")
        );
    }

    #[test]
    fn test_generate_round_trip() {
        let rng = &mut thread_rng();
        for _ in 0..10 {
            let sk = SecretKey::<Arkworks>::generate(rng);
            let de = SecretKey::<Arkworks>::from_bytes(&sk.to_bytes()).unwrap();
            assert_eq!(de.as_scalar(), sk.as_scalar());

            let sk = SecretKey::<Blst>::generate(rng);
            let de = SecretKey::<Blst>::from_bytes(&sk.to_bytes()).unwrap();
            assert_eq!(de.to_bytes(), sk.to_bytes());
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let sk = SecretKey::<Arkworks>::from_bytes(
            &encoding::decode_hex(PUBLIC_KEY_VECTORS[0].0).unwrap(),
        )
        .unwrap();
        let debug = format!("{:?}", sk);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("263dbd79"));
    }
}
