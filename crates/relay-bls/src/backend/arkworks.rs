use super::CurveBackend;
use crate::{
    encoding, BLSError, BlsResult, CIPHERSUITE_DST, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH,
    SIGNATURE_LENGTH,
};

use ark_bls12_381::{
    g2::Config as G2Config, Bls12_381, Fq12, Fr, G1Affine, G1Projective, G2Affine, G2Projective,
};
use ark_ec::{
    hashing::{curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher, HashToCurve},
    pairing::Pairing,
    AffineRepr, CurveGroup, PrimeGroup,
};
use ark_ff::{field_hashers::DefaultFieldHasher, BigInteger, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::UniformRand;
use log::trace;
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use std::ops::Neg;

/// RFC 9380 `BLS12381G2_XMD:SHA-256_SSWU_RO_` hasher.
type G2Hasher =
    MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256, 128>, WBMap<G2Config>>;

/// Hasher for the ciphersuite tag, built once per process.
static CIPHERSUITE_HASHER: Lazy<Option<G2Hasher>> =
    Lazy::new(|| G2Hasher::new(CIPHERSUITE_DST).ok());

/// Backend over the arkworks BLS12-381 implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arkworks;

impl Arkworks {
    /// Hashes `message` to a G2 point under `dst`.
    pub fn hash_to_g2(message: &[u8], dst: &[u8]) -> BlsResult<G2Affine> {
        let point = if dst == CIPHERSUITE_DST {
            CIPHERSUITE_HASHER
                .as_ref()
                .ok_or(BLSError::HashToCurveError)?
                .hash(message)
        } else {
            G2Hasher::new(dst).and_then(|hasher| hasher.hash(message))
        };
        trace!("hashed {} byte message to G2", message.len());
        point.map_err(|_| BLSError::HashToCurveError)
    }
}

/// arkworks ignores the remaining bytes when the infinity flag is set, the canonical
/// encoding is `0xc0` followed by zeros.
fn check_infinity_encoding(kind: &'static str, bytes: &[u8]) -> BlsResult<()> {
    if bytes[0] & 0x40 != 0 && (bytes[0] != 0xc0 || !encoding::is_zero(&bytes[1..])) {
        return Err(BLSError::DecodeFailure(kind));
    }
    Ok(())
}

fn compress<const N: usize, P: CanonicalSerialize>(point: &P) -> [u8; N] {
    let mut bytes = [0u8; N];
    point
        .serialize_compressed(&mut bytes[..])
        .expect("compressed BLS12-381 points have a fixed size");
    bytes
}

impl CurveBackend for Arkworks {
    type Scalar = Fr;
    type G1 = G1Affine;
    type G2 = G2Affine;

    const NAME: &'static str = "arkworks";

    fn scalar_from_bytes(bytes: &[u8; SECRET_KEY_LENGTH]) -> BlsResult<Fr> {
        // arkworks encodes field elements little-endian and rejects values >= r
        let mut le = *bytes;
        le.reverse();
        Fr::deserialize_compressed(&le[..]).map_err(|_| BLSError::DecodeFailure("secret key"))
    }

    fn scalar_to_bytes(scalar: &Fr) -> [u8; SECRET_KEY_LENGTH] {
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        bytes.copy_from_slice(&scalar.into_bigint().to_bytes_be());
        bytes
    }

    fn scalar_is_zero(scalar: &Fr) -> bool {
        scalar.is_zero()
    }

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Fr {
        Fr::rand(rng)
    }

    fn g1_generator_mul(scalar: &Fr) -> G1Affine {
        (G1Projective::generator() * scalar).into_affine()
    }

    fn g1_compress(point: &G1Affine) -> [u8; PUBLIC_KEY_LENGTH] {
        compress(point)
    }

    fn g1_decompress(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> BlsResult<G1Affine> {
        check_infinity_encoding("public key", bytes)?;
        G1Affine::deserialize_with_mode(&bytes[..], Compress::Yes, Validate::No)
            .map_err(|_| BLSError::DecodeFailure("public key"))
    }

    fn g1_validate(point: &G1Affine) -> BlsResult<()> {
        if point.is_zero()
            || !point.is_on_curve()
            || !point.is_in_correct_subgroup_assuming_on_curve()
        {
            return Err(BLSError::InvalidPoint("public key"));
        }
        Ok(())
    }

    fn g2_compress(point: &G2Affine) -> [u8; SIGNATURE_LENGTH] {
        compress(point)
    }

    fn g2_decompress(bytes: &[u8; SIGNATURE_LENGTH]) -> BlsResult<G2Affine> {
        check_infinity_encoding("signature", bytes)?;
        G2Affine::deserialize_with_mode(&bytes[..], Compress::Yes, Validate::No)
            .map_err(|_| BLSError::DecodeFailure("signature"))
    }

    fn g2_validate(point: &G2Affine) -> BlsResult<()> {
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(BLSError::InvalidPoint("signature"));
        }
        Ok(())
    }

    fn sign(scalar: &Fr, message: &[u8], dst: &[u8]) -> BlsResult<G2Affine> {
        let hash = Self::hash_to_g2(message, dst)?;
        Ok((hash * scalar).into_affine())
    }

    fn verify(
        public_key: &G1Affine,
        message: &[u8],
        dst: &[u8],
        signature: &G2Affine,
    ) -> BlsResult<bool> {
        let hash = Self::hash_to_g2(message, dst)?;
        let pairing = Bls12_381::multi_pairing(
            [*public_key, G1Affine::generator().neg()],
            [hash, *signature],
        );
        Ok(pairing.0 == Fq12::one())
    }
}
