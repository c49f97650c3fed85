//! Minimal SSZ merkleization.
//!
//! Only the pieces needed by the relay containers are provided: basic unsigned
//! integers and booleans, fixed-size byte vectors, bounded lists and fixed-size
//! containers built from those.
use crate::error::TreeHashError;

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

/// 32-byte SSZ root
pub type Root = [u8; 32];

pub const BYTES_PER_CHUNK: usize = 32;

/// Deepest tree a list limit can describe on 64-bit targets
const MAX_TREE_DEPTH: usize = 64;

/// `ZERO_HASHES[i]` is the root of a tree of depth `i` whose leaves are all zero
static ZERO_HASHES: Lazy<Vec<Root>> = Lazy::new(|| {
    let mut hashes = vec![[0u8; BYTES_PER_CHUNK]; MAX_TREE_DEPTH + 1];
    for depth in 0..MAX_TREE_DEPTH {
        hashes[depth + 1] = hash_pair(&hashes[depth], &hashes[depth]);
    }
    hashes
});

/// An object with an SSZ hash tree root.
pub trait HashTreeRoot {
    /// Width in bytes of a basic type when packed into chunks. Composite types are
    /// never packed and keep the default.
    const PACKED_SIZE: Option<usize> = None;

    /// Little-endian serialization of a basic type. Composite types return nothing.
    fn packed_encoding(&self) -> Vec<u8> {
        Vec::new()
    }

    fn hash_tree_root(&self) -> Result<Root, TreeHashError>;
}

pub fn hash_pair(left: &[u8], right: &[u8]) -> Root {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Splits `bytes` into 32-byte chunks, zero-padding the last one.
pub fn pack_bytes(bytes: &[u8]) -> Vec<Root> {
    bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|chunk| {
            let mut padded = [0u8; BYTES_PER_CHUNK];
            padded[..chunk.len()].copy_from_slice(chunk);
            padded
        })
        .collect()
}

/// Merkleizes `chunks` into a tree with room for `limit` leaves, padding with zero
/// subtrees up to the next power of two.
pub fn merkleize(chunks: &[Root], limit: usize) -> Result<Root, TreeHashError> {
    if chunks.len() > limit {
        return Err(TreeHashError::ListTooLong {
            len: chunks.len(),
            max: limit,
        });
    }
    let depth = limit.max(1).next_power_of_two().trailing_zeros() as usize;
    if chunks.is_empty() {
        return Ok(ZERO_HASHES[depth]);
    }

    let mut layer = chunks.to_vec();
    for zero in ZERO_HASHES.iter().take(depth) {
        if layer.len() % 2 == 1 {
            layer.push(*zero);
        }
        layer = layer
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }
    Ok(layer[0])
}

/// Mixes the length of a list into its merkleized contents.
pub fn mix_in_length(root: &Root, length: usize) -> Root {
    let mut length_chunk = [0u8; BYTES_PER_CHUNK];
    length_chunk[..8].copy_from_slice(&(length as u64).to_le_bytes());
    hash_pair(root, &length_chunk)
}

/// Root of a container whose fields have the given roots.
pub fn merkleize_container(field_roots: &[Root]) -> Result<Root, TreeHashError> {
    merkleize(field_roots, field_roots.len())
}

macro_rules! impl_basic {
    ($($t:ty),*) => {$(
        impl HashTreeRoot for $t {
            const PACKED_SIZE: Option<usize> = Some(std::mem::size_of::<$t>());

            fn packed_encoding(&self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }

            fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
                let mut chunk = [0u8; BYTES_PER_CHUNK];
                let bytes = self.to_le_bytes();
                chunk[..bytes.len()].copy_from_slice(&bytes);
                Ok(chunk)
            }
        }
    )*};
}

impl_basic!(u8, u16, u32, u64);

impl HashTreeRoot for bool {
    const PACKED_SIZE: Option<usize> = Some(1);

    fn packed_encoding(&self) -> Vec<u8> {
        vec![*self as u8]
    }

    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        (*self as u8).hash_tree_root()
    }
}

/// Fixed-size byte vector
impl<const N: usize> HashTreeRoot for [u8; N] {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        let chunks = pack_bytes(self);
        merkleize(&chunks, chunks.len())
    }
}

/// A list holding at most `MAX` elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct List<T, const MAX: usize>(Vec<T>);

impl<T, const MAX: usize> List<T, MAX> {
    pub fn new(items: Vec<T>) -> Result<Self, TreeHashError> {
        if items.len() > MAX {
            return Err(TreeHashError::ListTooLong {
                len: items.len(),
                max: MAX,
            });
        }
        Ok(List(items))
    }

    /// Wraps `items` without checking the bound. Oversized lists fail when hashed.
    pub fn new_unchecked(items: Vec<T>) -> Self {
        List(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: HashTreeRoot, const MAX: usize> HashTreeRoot for List<T, MAX> {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        if self.0.len() > MAX {
            return Err(TreeHashError::ListTooLong {
                len: self.0.len(),
                max: MAX,
            });
        }
        let root = match T::PACKED_SIZE {
            Some(size) => {
                let bytes = self
                    .0
                    .iter()
                    .flat_map(|item| item.packed_encoding())
                    .collect::<Vec<_>>();
                let limit = (MAX * size + BYTES_PER_CHUNK - 1) / BYTES_PER_CHUNK;
                merkleize(&pack_bytes(&bytes), limit)?
            }
            None => {
                let roots = self
                    .0
                    .iter()
                    .map(HashTreeRoot::hash_tree_root)
                    .collect::<Result<Vec<_>, _>>()?;
                merkleize(&roots, MAX)?
            }
        };
        Ok(mix_in_length(&root, self.0.len()))
    }
}
