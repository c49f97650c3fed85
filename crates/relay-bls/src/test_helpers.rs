use crate::{CurveBackend, PublicKey, SecretKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

use ark_bls12_381::{Fq, Fq2, G1Affine, G2Affine};
use ark_ff::One;
use ark_serialize::CanonicalSerialize;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Secret key to compressed public key pairs, big-endian hex.
pub const PUBLIC_KEY_VECTORS: &[(&str, &str)] = &[
    (
        "0x263dbd792f5b1be47ed85f8938c0f29586af0d3ac7b977f21c278fe1462040e3",
        "0xa491d1b0ecd9bb917989f0e74f0dea0422eac4a873e5e2644f368dffb9a6e20fd6e10c1b77654d067c0618f6e5a7f79a",
    ),
    (
        "0x47b8192d77bf871b62e87859d653922725724a5c031afeabc60bcef5ff665138",
        "0xb301803f8b5ac4a1133581fc676dfedc60d891dd5fa99028805e5ea5b08d3491af75d0707adab3b70c6a6a580217bf81",
    ),
    (
        "0x328388aff0d4a5b7dc9205abd374e7e98f3cd9f3418edb4eafda5fb16473d216",
        "0xb53d21a4cfd562c469cc81514d4ce5a6b577d8403d32a394dc265dd190b47fa9f829fdd7963afdf972e5e77854051f6f",
    ),
];

// Same RNG for all tests, seeded so failures reproduce
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// generate a keypair
pub fn keygen<B: CurveBackend>(seed: u64) -> (SecretKey<B>, PublicKey<B>) {
    let sk = SecretKey::<B>::generate(&mut rng(seed));
    let pk = sk.to_public().expect("generated keys are never zero");
    (sk, pk)
}

/// generate N keypairs
pub fn keygen_mul<B: CurveBackend>(num: usize) -> Vec<(SecretKey<B>, PublicKey<B>)> {
    (0..num as u64).map(keygen::<B>).collect()
}

/// Compressed encoding of an on-curve G1 point outside the prime-order subgroup.
pub fn g1_outside_subgroup() -> [u8; PUBLIC_KEY_LENGTH] {
    let point = (1u64..)
        .filter_map(|x| G1Affine::get_point_from_x_unchecked(Fq::from(x), true))
        .find(|p| !p.is_in_correct_subgroup_assuming_on_curve())
        .expect("almost every G1 point is outside the subgroup");
    let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
    point.serialize_compressed(&mut bytes[..]).unwrap();
    bytes
}

/// Compressed encoding of an on-curve G2 point outside the prime-order subgroup.
pub fn g2_outside_subgroup() -> [u8; SIGNATURE_LENGTH] {
    let point = (1u64..)
        .filter_map(|x| {
            G2Affine::get_point_from_x_unchecked(Fq2::new(Fq::from(x), Fq::one()), true)
        })
        .find(|p| !p.is_in_correct_subgroup_assuming_on_curve())
        .expect("almost every G2 point is outside the subgroup");
    let mut bytes = [0u8; SIGNATURE_LENGTH];
    point.serialize_compressed(&mut bytes[..]).unwrap();
    bytes
}

/// Compressed encoding whose x-coordinate has no matching y on the curve.
pub fn g1_not_on_curve() -> [u8; PUBLIC_KEY_LENGTH] {
    let x = (1u64..)
        .map(Fq::from)
        .find(|x| G1Affine::get_point_from_x_unchecked(*x, true).is_none())
        .expect("half of all x-coordinates are not on the curve");
    let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
    x.serialize_compressed(&mut bytes[..]).unwrap();
    // field elements serialize little-endian, the point encoding is big-endian
    bytes.reverse();
    bytes[0] |= 0x80;
    bytes
}
