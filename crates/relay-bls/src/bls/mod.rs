//! Keys and signatures for the `BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_` ciphersuite
mod secret;
pub use secret::SecretKey;

mod public;
pub use public::PublicKey;

mod signature;
pub use signature::Signature;

mod cache;
pub use cache::PublicKeyCache;

use crate::{BlsResult, CurveBackend, DefaultBackend};
use rand::{CryptoRng, RngCore};

/// Samples a fresh keypair.
pub fn generate_keypair<B: CurveBackend, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> BlsResult<(SecretKey<B>, PublicKey<B>)> {
    let sk = SecretKey::generate(rng);
    let pk = sk.to_public()?;
    Ok((sk, pk))
}

/// Decodes both points and checks the signature over `message`.
///
/// Malformed encodings are errors, a well-formed signature that does not match is `Ok(false)`.
pub fn verify_signature_bytes(
    message: &[u8],
    signature_bytes: &[u8],
    public_key_bytes: &[u8],
) -> BlsResult<bool> {
    let sig = Signature::<DefaultBackend>::from_bytes(signature_bytes)?;
    let pk = PublicKey::<DefaultBackend>::from_bytes(public_key_bytes)?;
    pk.verify(message, &sig)
}
