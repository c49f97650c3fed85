//! # Relay signing
//!
//! Domain-separated signing and verification of builder/relay protocol messages.
//!
//! A message is reduced to its SSZ hash tree root, bound to a 32-byte [`Domain`] and the
//! resulting signing root is signed with BLS over BLS12-381 (see [`relay_bls`]).
//!
//! ```
//! use relay_signing::{sign_message, verify_signature, ValidatorRegistration, DOMAIN_BUILDER};
//! use relay_bls::SecretKey;
//!
//! let sk: SecretKey = SecretKey::generate(&mut rand::thread_rng());
//! let registration = ValidatorRegistration {
//!     fee_recipient: [0x42; 20],
//!     gas_limit: 30_000_000,
//!     timestamp: 1_700_000_000,
//!     pubkey: sk.to_public().unwrap().to_bytes(),
//! };
//! let sig = sign_message(&registration, *DOMAIN_BUILDER, &sk).unwrap();
//! assert!(verify_signature(
//!     &registration,
//!     *DOMAIN_BUILDER,
//!     &registration.pubkey,
//!     &sig.to_bytes()
//! )
//! .unwrap());
//! ```

/// Network fork parameters
pub mod config;
pub use config::{ForkContext, Network};

/// Domain types and domain computation
pub mod domain;
pub use domain::{
    compute_application_domain, compute_domain, Domain, DomainType, ForkData, ForkVersion,
    DOMAIN_BUILDER,
};

mod error;
pub use error::{SigningError, SigningResult, TreeHashError};

/// Signing roots, signing and verification
pub mod signing;
pub use signing::{
    compute_signing_root, sign_message, verify_signature, verify_signature_by_root,
    verify_signature_by_root_with, verify_signature_with, SigningData,
};

pub mod tree_hash;
pub use tree_hash::{HashTreeRoot, List, Root};

/// Signed protocol containers
pub mod types;
pub use types::{BuilderBid, ExecutionPayloadHeader, ValidatorRegistration, U256};
