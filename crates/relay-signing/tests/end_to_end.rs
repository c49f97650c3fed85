//! Sign and verify builder-api messages through the public API.
use proptest::prelude::*;
use relay_bls::{test_helpers::keygen, Arkworks, Blst, CurveBackend, PublicKey, SecretKey};
use relay_signing::{
    compute_domain, compute_signing_root, sign_message, verify_signature, verify_signature_by_root,
    verify_signature_with, DomainType, ForkContext, ForkVersion, HashTreeRoot, List, Network,
    SigningError, TreeHashError, ValidatorRegistration, DOMAIN_BUILDER,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn registration<B: CurveBackend>(pk: &PublicKey<B>) -> ValidatorRegistration {
    ValidatorRegistration {
        fee_recipient: [0x42; 20],
        gas_limit: 15_000_000,
        timestamp: 1652369368,
        pubkey: pk.to_bytes(),
    }
}

#[test]
fn application_builder_round_trip() {
    init_logger();
    let domain = compute_domain(
        DomainType::from_slice(&[0x00, 0x00, 0x00, 0x01]).unwrap(),
        ForkVersion::default(),
        [0u8; 32],
    );
    assert_eq!(domain, *DOMAIN_BUILDER);

    let (sk, pk) = keygen::<Arkworks>(0);
    let (_, other_pk) = keygen::<Arkworks>(1);
    let msg = registration(&pk);

    let sig = sign_message(&msg, domain, &sk).unwrap().to_bytes();
    assert!(verify_signature(&msg, domain, &pk.to_bytes(), &sig).unwrap());
    assert!(!verify_signature(&msg, domain, &other_pk.to_bytes(), &sig).unwrap());

    let root = msg.hash_tree_root().unwrap();
    assert!(verify_signature_by_root(root, domain, &pk.to_bytes(), &sig).unwrap());
    assert!(!verify_signature_by_root([0u8; 32], domain, &pk.to_bytes(), &sig).unwrap());
}

#[test]
fn signatures_are_identical_across_backends() {
    init_logger();
    let domain = ForkContext::for_network(Network::Sepolia).proposer_domain();
    for seed in 0..5 {
        let (ark_sk, ark_pk) = keygen::<Arkworks>(seed);
        let blst_sk = SecretKey::<Blst>::from_bytes(&ark_sk.to_bytes()).unwrap();
        let msg = registration(&ark_pk);

        let ark_sig = sign_message(&msg, domain, &ark_sk).unwrap();
        let blst_sig = sign_message(&msg, domain, &blst_sk).unwrap();
        assert_eq!(ark_sig.to_bytes(), blst_sig.to_bytes());

        let root = compute_signing_root(&msg, domain).unwrap();
        assert_eq!(ark_sig.to_bytes(), ark_sk.sign(&root).unwrap().to_bytes());

        assert!(verify_signature_with::<Blst, _>(
            &msg,
            domain,
            &msg.pubkey,
            &ark_sig.to_bytes()
        )
        .unwrap());
    }
}

#[test]
fn oversized_objects_cannot_be_signed() {
    let (sk, pk) = keygen::<Arkworks>(9);
    let oversized = List::<u64, 2>::new_unchecked(vec![1, 2, 3]);
    let expected = SigningError::InvalidStructure(TreeHashError::ListTooLong { len: 3, max: 2 });

    assert_eq!(
        sign_message(&oversized, *DOMAIN_BUILDER, &sk).unwrap_err(),
        expected
    );
    let sig = sk.sign(b"anything").unwrap().to_bytes();
    assert_eq!(
        verify_signature(&oversized, *DOMAIN_BUILDER, &pk.to_bytes(), &sig).unwrap_err(),
        expected
    );
}

#[test]
fn zero_key_is_rejected() {
    assert_eq!(
        SecretKey::<Arkworks>::from_bytes(&[0u8; 32]).unwrap_err(),
        relay_bls::BLSError::SecretKeyIsZero
    );
}

/// Either a decoding error or a failed verification, never a success.
fn rejected(result: Result<bool, SigningError>) -> bool {
    matches!(result, Ok(false) | Err(SigningError::Bls(_)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_flipped_signature_byte_is_rejected(index in 0usize..96, mask in 1u8..=255) {
        let (sk, pk) = keygen::<Arkworks>(11);
        let msg = registration(&pk);
        let mut sig = sign_message(&msg, *DOMAIN_BUILDER, &sk).unwrap().to_bytes();
        sig[index] ^= mask;
        prop_assert!(rejected(verify_signature(&msg, *DOMAIN_BUILDER, &msg.pubkey, &sig)));
    }

    #[test]
    fn prop_flipped_public_key_byte_is_rejected(index in 0usize..48, mask in 1u8..=255) {
        let (sk, pk) = keygen::<Blst>(12);
        let msg = registration(&pk);
        let sig = sign_message(&msg, *DOMAIN_BUILDER, &sk).unwrap().to_bytes();
        let mut pubkey = msg.pubkey;
        pubkey[index] ^= mask;
        prop_assert!(rejected(verify_signature_with::<Blst, _>(
            &msg,
            *DOMAIN_BUILDER,
            &pubkey,
            &sig
        )));
    }

    #[test]
    fn prop_modified_message_is_rejected(index in 0usize..20, mask in 1u8..=255, gas in any::<u64>()) {
        let (sk, pk) = keygen::<Arkworks>(13);
        let msg = registration(&pk);
        let sig = sign_message(&msg, *DOMAIN_BUILDER, &sk).unwrap().to_bytes();

        let mut tampered = msg.clone();
        tampered.fee_recipient[index] ^= mask;
        prop_assert!(!verify_signature(&tampered, *DOMAIN_BUILDER, &msg.pubkey, &sig).unwrap());

        prop_assume!(gas != msg.gas_limit);
        let mut tampered = msg.clone();
        tampered.gas_limit = gas;
        prop_assert!(!verify_signature(&tampered, *DOMAIN_BUILDER, &msg.pubkey, &sig).unwrap());
    }
}
