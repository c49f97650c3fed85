//! Per-network fork parameters.
//!
//! A [`ForkContext`] is built once at startup, either for a known [`Network`] or from
//! hex strings, and passed to whatever needs a signing domain.
use crate::{
    domain::{compute_domain, Domain, DomainType, ForkVersion},
    error::{SigningError, SigningResult},
    tree_hash::Root,
};

use relay_bls::encoding;
use std::{fmt, str::FromStr};

const MAINNET_GENESIS_VALIDATORS_ROOT: Root = [
    0x4b, 0x36, 0x3d, 0xb9, 0x4e, 0x28, 0x61, 0x20,
    0xd7, 0x6e, 0xb9, 0x05, 0x34, 0x0f, 0xdd, 0x4e,
    0x54, 0xbf, 0xe9, 0xf0, 0x6b, 0xf3, 0x3f, 0xf6,
    0xcf, 0x5a, 0xd2, 0x7f, 0x51, 0x1b, 0xfe, 0x95,
];

const GOERLI_GENESIS_VALIDATORS_ROOT: Root = [
    0x04, 0x3d, 0xb0, 0xd9, 0xa8, 0x38, 0x13, 0x55,
    0x1e, 0xe2, 0xf3, 0x34, 0x50, 0xd2, 0x37, 0x97,
    0x75, 0x7d, 0x43, 0x09, 0x11, 0xa9, 0x32, 0x05,
    0x30, 0xad, 0x8a, 0x0e, 0xab, 0xc4, 0x3e, 0xfb,
];

const SEPOLIA_GENESIS_VALIDATORS_ROOT: Root = [
    0xd8, 0xea, 0x17, 0x1f, 0x3c, 0x94, 0xae, 0xa2,
    0x1e, 0xbc, 0x42, 0xa1, 0xed, 0x61, 0x05, 0x2a,
    0xcf, 0x3f, 0x92, 0x09, 0xc0, 0x0e, 0x4e, 0xfb,
    0xaa, 0xdd, 0xac, 0x09, 0xed, 0x9b, 0x80, 0x78,
];

const ROPSTEN_GENESIS_VALIDATORS_ROOT: Root = [
    0x44, 0xf1, 0xe5, 0x62, 0x83, 0xca, 0x88, 0xb3,
    0x5c, 0x78, 0x9f, 0x7f, 0x44, 0x9e, 0x52, 0x33,
    0x9b, 0xc1, 0xfe, 0xfe, 0x3a, 0x45, 0x91, 0x3a,
    0x43, 0xa6, 0xd1, 0x6e, 0xdc, 0xd3, 0x3c, 0xf1,
];

const KILN_GENESIS_VALIDATORS_ROOT: Root = [
    0x99, 0xb0, 0x9f, 0xcd, 0x43, 0xe5, 0x90, 0x52,
    0x36, 0xc3, 0x70, 0xf1, 0x84, 0x05, 0x6b, 0xec,
    0x6e, 0x66, 0x38, 0xcf, 0xc3, 0x1a, 0x32, 0x3b,
    0x30, 0x4f, 0xc4, 0xaa, 0x78, 0x9c, 0xb4, 0xad,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
    Ropsten,
    Kiln,
}

impl Network {
    pub const ALL: [Network; 5] = [
        Network::Mainnet,
        Network::Goerli,
        Network::Sepolia,
        Network::Ropsten,
        Network::Kiln,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Goerli => "goerli",
            Network::Sepolia => "sepolia",
            Network::Ropsten => "ropsten",
            Network::Kiln => "kiln",
        }
    }

    pub fn genesis_fork_version(&self) -> ForkVersion {
        ForkVersion::new(match self {
            Network::Mainnet => [0x00, 0x00, 0x00, 0x00],
            Network::Goerli => [0x00, 0x00, 0x10, 0x20],
            Network::Sepolia => [0x90, 0x00, 0x00, 0x69],
            Network::Ropsten => [0x80, 0x00, 0x00, 0x69],
            Network::Kiln => [0x70, 0x00, 0x00, 0x69],
        })
    }

    pub fn bellatrix_fork_version(&self) -> ForkVersion {
        ForkVersion::new(match self {
            Network::Mainnet => [0x02, 0x00, 0x00, 0x00],
            Network::Goerli => [0x02, 0x00, 0x10, 0x20],
            Network::Sepolia => [0x90, 0x00, 0x00, 0x71],
            Network::Ropsten => [0x80, 0x00, 0x00, 0x71],
            Network::Kiln => [0x70, 0x00, 0x00, 0x71],
        })
    }

    pub fn genesis_validators_root(&self) -> Root {
        match self {
            Network::Mainnet => MAINNET_GENESIS_VALIDATORS_ROOT,
            Network::Goerli => GOERLI_GENESIS_VALIDATORS_ROOT,
            Network::Sepolia => SEPOLIA_GENESIS_VALIDATORS_ROOT,
            Network::Ropsten => ROPSTEN_GENESIS_VALIDATORS_ROOT,
            Network::Kiln => KILN_GENESIS_VALIDATORS_ROOT,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = SigningError;

    fn from_str(s: &str) -> SigningResult<Self> {
        Network::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SigningError::UnknownNetwork(s.to_string()))
    }
}

/// The fork parameters needed to derive signing domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForkContext {
    pub genesis_fork_version: ForkVersion,
    pub fork_version: ForkVersion,
    pub genesis_validators_root: Root,
}

impl ForkContext {
    /// Bellatrix parameters of a known network
    pub fn for_network(network: Network) -> Self {
        ForkContext {
            genesis_fork_version: network.genesis_fork_version(),
            fork_version: network.bellatrix_fork_version(),
            genesis_validators_root: network.genesis_validators_root(),
        }
    }

    /// Parses hex-encoded parameters. Fork versions shorter than 4 bytes are zero-padded on
    /// the right; longer ones and roots that are not 32 bytes are rejected.
    pub fn from_hex(
        genesis_fork_version: &str,
        fork_version: &str,
        genesis_validators_root: &str,
    ) -> SigningResult<Self> {
        Ok(ForkContext {
            genesis_fork_version: parse_fork_version(
                "genesis fork version",
                genesis_fork_version,
            )?,
            fork_version: parse_fork_version("fork version", fork_version)?,
            genesis_validators_root: parse_root(genesis_validators_root)?,
        })
    }

    /// Domain of builder-api messages: genesis fork version and a zero genesis root.
    pub fn builder_domain(&self) -> Domain {
        compute_domain(
            DomainType::APPLICATION_BUILDER,
            self.genesis_fork_version,
            Root::default(),
        )
    }

    /// Domain of blocks signed by the beacon proposer on the current fork.
    pub fn proposer_domain(&self) -> Domain {
        compute_domain(
            DomainType::BEACON_PROPOSER,
            self.fork_version,
            self.genesis_validators_root,
        )
    }
}

fn invalid(field: &'static str, reason: impl ToString) -> SigningError {
    SigningError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

fn parse_fork_version(field: &'static str, s: &str) -> SigningResult<ForkVersion> {
    let bytes = encoding::decode_hex(s).map_err(|e| invalid(field, e))?;
    if bytes.len() > 4 {
        return Err(invalid(
            field,
            format!("expected at most 4 bytes, got {}", bytes.len()),
        ));
    }
    let mut version = [0u8; 4];
    version[..bytes.len()].copy_from_slice(&bytes);
    Ok(ForkVersion::new(version))
}

fn parse_root(s: &str) -> SigningResult<Root> {
    encoding::decode_hex_fixed("genesis validators root", s)
        .map_err(|e| invalid("genesis validators root", e))
}
