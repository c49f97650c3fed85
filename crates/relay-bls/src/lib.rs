//! # BLS Cryptography
//!
//! This crate implements BLS signatures over BLS12-381 as used by the builder/relay
//! protocol: public keys live in G1 (48 bytes compressed), signatures in G2 (96 bytes
//! compressed), and messages are hashed to G2 with the proof-of-possession ciphersuite.
//!
//! The curve arithmetic is provided by a [`CurveBackend`]. Two backends ship with the
//! crate, [`Arkworks`] (the default) and [`Blst`]. They produce byte-identical keys and
//! signatures and apply the same validation policy when decoding.

/// BLS signing
pub(crate) mod bls;
pub use bls::{
    generate_keypair, verify_signature_bytes, PublicKey, PublicKeyCache, SecretKey, Signature,
};

/// Curve library backends
pub mod backend;
pub use backend::{Arkworks, Blst, CurveBackend, DefaultBackend};

/// Fixed-length encoding helpers shared by keys, signatures and protocol roots
pub mod encoding;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use thiserror::Error;

/// Convenience result alias
pub type BlsResult<T> = std::result::Result<T, BLSError>;

/// Hash-to-curve domain separation tag of the proof-of-possession ciphersuite.
pub const CIPHERSUITE_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Length of a big-endian encoded secret key
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of a compressed G1 public key
pub const PUBLIC_KEY_LENGTH: usize = 48;

/// Length of a compressed G2 signature
pub const SIGNATURE_LENGTH: usize = 96;

#[derive(Debug, Error, Clone, PartialEq)]
/// Error type
pub enum BLSError {
    /// The input does not have the fixed length of the target type
    #[error("invalid {kind} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The bytes are not a canonical encoding of the target type
    #[error("could not decode {0}")]
    DecodeFailure(&'static str),
    /// The decoded point is not a valid element of the prime-order subgroup
    #[error("{0} is not a valid subgroup element")]
    InvalidPoint(&'static str),
    /// Zero scalars produce degenerate keys and signatures
    #[error("invalid secret key is zero")]
    SecretKeyIsZero,
    #[error("could not hash to curve")]
    HashToCurveError,
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
