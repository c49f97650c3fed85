use super::CurveBackend;
use crate::{encoding, BLSError, BlsResult, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};

use ::blst::min_pk::{
    PublicKey as BlstPublicKey, SecretKey as BlstSecretKey, Signature as BlstSignature,
};
use ::blst::BLST_ERROR;
use log::debug;
use rand::{CryptoRng, RngCore};

/// Backend over the `blst` library, `min_pk` variant (public keys in G1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blst;

/// Maps blst decoding errors onto the shared decoding policy. An x-coordinate with no
/// matching y cannot be decompressed, so `BLST_POINT_NOT_ON_CURVE` is a decode failure.
fn decode_error(kind: &'static str, err: BLST_ERROR) -> BLSError {
    match err {
        BLST_ERROR::BLST_POINT_NOT_IN_GROUP | BLST_ERROR::BLST_PK_IS_INFINITY => {
            BLSError::InvalidPoint(kind)
        }
        _ => BLSError::DecodeFailure(kind),
    }
}

impl CurveBackend for Blst {
    type Scalar = BlstSecretKey;
    type G1 = BlstPublicKey;
    type G2 = BlstSignature;

    const NAME: &'static str = "blst";

    fn scalar_from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> BlsResult<BlstSecretKey> {
        BlstSecretKey::from_bytes(bytes).map_err(|_| BLSError::DecodeFailure("secret key"))
    }

    fn scalar_to_bytes(scalar: &BlstSecretKey) -> [u8; SECRET_KEY_LENGTH] {
        scalar.to_bytes()
    }

    fn scalar_is_zero(scalar: &BlstSecretKey) -> bool {
        // blst refuses to construct a zero key, kept for the shared contract
        encoding::is_zero(&scalar.to_bytes())
    }

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> BlstSecretKey {
        // rejection sampling over [1, r)
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(sk) = BlstSecretKey::from_bytes(&bytes) {
                return sk;
            }
        }
    }

    fn g1_generator_mul(scalar: &BlstSecretKey) -> BlstPublicKey {
        scalar.sk_to_pk()
    }

    fn g1_compress(point: &BlstPublicKey) -> [u8; PUBLIC_KEY_LENGTH] {
        point.compress()
    }

    fn g1_decompress(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> BlsResult<BlstPublicKey> {
        BlstPublicKey::uncompress(bytes).map_err(|e| decode_error("public key", e))
    }

    fn g1_validate(point: &BlstPublicKey) -> BlsResult<()> {
        point.validate().map_err(|e| decode_error("public key", e))
    }

    fn g2_compress(point: &BlstSignature) -> [u8; SIGNATURE_LENGTH] {
        point.compress()
    }

    fn g2_decompress(bytes: &[u8; SIGNATURE_LENGTH]) -> BlsResult<BlstSignature> {
        BlstSignature::uncompress(bytes).map_err(|e| decode_error("signature", e))
    }

    fn g2_validate(point: &BlstSignature) -> BlsResult<()> {
        point.validate(false).map_err(|e| decode_error("signature", e))
    }

    fn sign(scalar: &BlstSecretKey, message: &[u8], dst: &[u8]) -> BlsResult<BlstSignature> {
        Ok(scalar.sign(message, dst, &[]))
    }

    fn verify(
        public_key: &BlstPublicKey,
        message: &[u8],
        dst: &[u8],
        signature: &BlstSignature,
    ) -> BlsResult<bool> {
        // both points were validated when decoded
        let result = signature.verify(false, message, dst, &[], public_key, false);
        if result != BLST_ERROR::BLST_SUCCESS {
            debug!("blst verification returned {:?}", result);
        }
        Ok(result == BLST_ERROR::BLST_SUCCESS)
    }
}
