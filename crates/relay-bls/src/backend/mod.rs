//! Pairing-curve backends.
//!
//! A backend provides the BLS12-381 primitives the key and signature types are built on.
//! Every backend must agree on the byte encodings (big-endian scalars, zcash-style
//! compressed points) and on the decoding policy:
//!
//! * bytes that do not decompress to a point on the curve fail with
//!   [`BLSError::DecodeFailure`](crate::BLSError::DecodeFailure),
//! * points outside the prime-order subgroup, and identity public keys, fail with
//!   [`BLSError::InvalidPoint`](crate::BLSError::InvalidPoint).
//!
//! Validation always happens when decoding, so `verify` can assume well-formed inputs.

mod arkworks;
pub use arkworks::Arkworks;

mod blst;
pub use self::blst::Blst;

use crate::{BlsResult, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
use rand::{CryptoRng, RngCore};

/// The backend used when a key type does not name one.
pub type DefaultBackend = Arkworks;

/// Trait over the curve primitives required for BLS signatures with public keys in G1
/// and signatures in G2.
pub trait CurveBackend: Sized + 'static {
    /// Element of the scalar field
    type Scalar: Clone + Send + Sync;
    /// Element of G1
    type G1: Clone + Send + Sync;
    /// Element of G2
    type G2: Clone + Send + Sync;

    /// Human readable name used in logs
    const NAME: &'static str;

    /// Parses a big-endian scalar, rejecting encodings of values `>= r`. Callers screen out
    /// the all-zero encoding first.
    fn scalar_from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> BlsResult<Self::Scalar>;

    /// Big-endian encoding of the scalar
    fn scalar_to_bytes(scalar: &Self::Scalar) -> [u8; SECRET_KEY_LENGTH];

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool;

    /// Samples a uniformly random scalar. The result may be zero.
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Scalar;

    /// Multiplies the G1 generator by `scalar`
    fn g1_generator_mul(scalar: &Self::Scalar) -> Self::G1;

    fn g1_compress(point: &Self::G1) -> [u8; PUBLIC_KEY_LENGTH];

    /// Decompresses a point, checking only that it lies on the curve
    fn g1_decompress(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> BlsResult<Self::G1>;

    /// Checks subgroup membership and rejects the identity
    fn g1_validate(point: &Self::G1) -> BlsResult<()>;

    fn g2_compress(point: &Self::G2) -> [u8; SIGNATURE_LENGTH];

    /// Decompresses a point, checking only that it lies on the curve
    fn g2_decompress(bytes: &[u8; SIGNATURE_LENGTH]) -> BlsResult<Self::G2>;

    /// Checks subgroup membership
    fn g2_validate(point: &Self::G2) -> BlsResult<()>;

    /// Hashes `message` to G2 under `dst` and multiplies the result by `scalar`
    fn sign(scalar: &Self::Scalar, message: &[u8], dst: &[u8]) -> BlsResult<Self::G2>;

    /// Checks `e(public_key, H(message)) * e(-g1, signature) == 1`
    fn verify(
        public_key: &Self::G1,
        message: &[u8],
        dst: &[u8],
        signature: &Self::G2,
    ) -> BlsResult<bool>;
}
