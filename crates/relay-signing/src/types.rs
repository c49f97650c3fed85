//! Builder-api containers signed by validators and builders.
use crate::{
    error::TreeHashError,
    tree_hash::{merkleize_container, HashTreeRoot, List, Root},
};
use relay_bls::PUBLIC_KEY_LENGTH;

/// 20-byte execution layer address
pub type Address = [u8; 20];

/// Compressed BLS public key as carried in protocol messages
pub type BlsPublicKeyBytes = [u8; PUBLIC_KEY_LENGTH];

/// Logs bloom filter
pub type Bloom = [u8; 256];

/// Extra data of an execution block, at most 32 bytes
pub type ExtraData = List<u8, 32>;

/// Unsigned 256-bit integer stored little-endian, as SSZ serializes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub [u8; 32]);

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        U256(bytes)
    }
}

impl HashTreeRoot for U256 {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        Ok(self.0)
    }
}

/// A validator's registration with a relay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorRegistration {
    pub fee_recipient: Address,
    pub gas_limit: u64,
    pub timestamp: u64,
    pub pubkey: BlsPublicKeyBytes,
}

impl HashTreeRoot for ValidatorRegistration {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        merkleize_container(&[
            self.fee_recipient.hash_tree_root()?,
            self.gas_limit.hash_tree_root()?,
            self.timestamp.hash_tree_root()?,
            self.pubkey.hash_tree_root()?,
        ])
    }
}

/// Bellatrix execution payload header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionPayloadHeader {
    pub parent_hash: Root,
    pub fee_recipient: Address,
    pub state_root: Root,
    pub receipts_root: Root,
    pub logs_bloom: Bloom,
    pub prev_randao: Root,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: ExtraData,
    pub base_fee_per_gas: U256,
    pub block_hash: Root,
    pub transactions_root: Root,
}

impl HashTreeRoot for ExecutionPayloadHeader {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        merkleize_container(&[
            self.parent_hash.hash_tree_root()?,
            self.fee_recipient.hash_tree_root()?,
            self.state_root.hash_tree_root()?,
            self.receipts_root.hash_tree_root()?,
            self.logs_bloom.hash_tree_root()?,
            self.prev_randao.hash_tree_root()?,
            self.block_number.hash_tree_root()?,
            self.gas_limit.hash_tree_root()?,
            self.gas_used.hash_tree_root()?,
            self.timestamp.hash_tree_root()?,
            self.extra_data.hash_tree_root()?,
            self.base_fee_per_gas.hash_tree_root()?,
            self.block_hash.hash_tree_root()?,
            self.transactions_root.hash_tree_root()?,
        ])
    }
}

/// A builder's offer for a slot, signed under the builder domain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderBid {
    pub header: ExecutionPayloadHeader,
    pub value: U256,
    pub pubkey: BlsPublicKeyBytes,
}

impl HashTreeRoot for BuilderBid {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        merkleize_container(&[
            self.header.hash_tree_root()?,
            self.value.hash_tree_root()?,
            self.pubkey.hash_tree_root()?,
        ])
    }
}
