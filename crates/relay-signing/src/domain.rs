//! Domain separation for relay signatures.
use crate::{
    error::{SigningError, SigningResult, TreeHashError},
    tree_hash::{merkleize_container, HashTreeRoot, Root},
};

use once_cell::sync::Lazy;
use relay_bls::encoding;
use std::{fmt, str::FromStr};

/// Domain of builder-api messages signed outside of any particular fork, e.g. validator
/// registrations and builder bids.
pub static DOMAIN_BUILDER: Lazy<Domain> =
    Lazy::new(|| compute_application_domain(DomainType::APPLICATION_BUILDER));

macro_rules! hex_newtype {
    ($name:ident, $len:expr, $kind:expr) => {
        impl $name {
            pub const fn new(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }

            pub fn from_slice(bytes: &[u8]) -> SigningResult<Self> {
                Ok($name(encoding::to_fixed($kind, bytes)?))
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&encoding::encode_hex(&self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = SigningError;

            fn from_str(s: &str) -> SigningResult<Self> {
                Ok($name(encoding::decode_hex_fixed($kind, s)?))
            }
        }
    };
}

/// 4-byte tag separating signature purposes
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DomainType([u8; 4]);
hex_newtype!(DomainType, 4, "domain type");

impl DomainType {
    pub const BEACON_PROPOSER: DomainType = DomainType([0x00, 0x00, 0x00, 0x00]);
    pub const APPLICATION_BUILDER: DomainType = DomainType([0x00, 0x00, 0x00, 0x01]);
    pub const BLOB_SIDECAR: DomainType = DomainType([0x0b, 0x00, 0x00, 0x00]);
}

/// 4-byte fork identifier
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForkVersion([u8; 4]);
hex_newtype!(ForkVersion, 4, "fork version");

impl HashTreeRoot for ForkVersion {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        self.0.hash_tree_root()
    }
}

/// 32-byte signature domain: the domain type followed by 28 bytes of the fork data root
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Domain([u8; 32]);
hex_newtype!(Domain, 32, "domain");

impl Domain {
    pub fn domain_type(&self) -> DomainType {
        let mut domain_type = [0u8; 4];
        domain_type.copy_from_slice(&self.0[..4]);
        DomainType(domain_type)
    }
}

impl HashTreeRoot for Domain {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        Ok(self.0)
    }
}

/// Container binding a fork version to a chain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForkData {
    pub current_version: ForkVersion,
    pub genesis_validators_root: Root,
}

impl HashTreeRoot for ForkData {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        merkleize_container(&[
            self.current_version.hash_tree_root()?,
            self.genesis_validators_root.hash_tree_root()?,
        ])
    }
}

/// Computes the domain `domain_type ++ hash_tree_root(fork_data)[..28]`.
pub fn compute_domain(
    domain_type: DomainType,
    fork_version: ForkVersion,
    genesis_validators_root: Root,
) -> Domain {
    let fork_data = ForkData {
        current_version: fork_version,
        genesis_validators_root,
    };
    // two fixed-size fields cannot exceed any limit
    let fork_data_root = fork_data.hash_tree_root().unwrap_or_default();

    let mut domain = [0u8; 32];
    domain[..4].copy_from_slice(domain_type.as_bytes());
    domain[4..].copy_from_slice(&fork_data_root[..28]);
    Domain(domain)
}

/// Domain of messages that are not tied to a fork: zero fork version, zero genesis root.
pub fn compute_application_domain(domain_type: DomainType) -> Domain {
    compute_domain(domain_type, ForkVersion::default(), Root::default())
}
