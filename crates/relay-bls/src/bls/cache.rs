use super::PublicKey;
use crate::{encoding, BlsResult, CurveBackend, DefaultBackend, PUBLIC_KEY_LENGTH};

use log::trace;
use lru::LruCache;
use std::num::NonZeroUsize;

const DEFAULT_CAPACITY: usize = 512;

/// Allows deserializing public keys while holding a cache to improve performance.
/// Relays see the same validator keys over and over, so decompression and subgroup checks
/// are only paid once per key. Invalid encodings are never cached.
pub struct PublicKeyCache<B: CurveBackend = DefaultBackend> {
    /// An in-memory mapping of serialized pubkey byte arrays to their validated
    /// group element representation
    de: LruCache<[u8; PUBLIC_KEY_LENGTH], PublicKey<B>>,
}

impl Default for PublicKeyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicKeyCache {
    /// Initializes an empty cache over the default backend
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<B: CurveBackend> PublicKeyCache<B> {
    /// Initializes an empty cache holding at most `capacity` keys (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            de: LruCache::new(capacity),
        }
    }

    /// Clears the deserialization cache
    pub fn clear_cache(&mut self) {
        self.de.clear();
    }

    pub fn len(&self) -> usize {
        self.de.len()
    }

    pub fn is_empty(&self) -> bool {
        self.de.is_empty()
    }

    /// Returns the PublicKey corresponding to the serialized data from the cache, or
    /// deserializes the element, saves it to the cache for later use and returns it
    pub fn deserialize(&mut self, data: &[u8]) -> BlsResult<PublicKey<B>> {
        let key = encoding::to_fixed::<PUBLIC_KEY_LENGTH>("public key", data)?;
        match self.de.get(&key) {
            // cache hit
            Some(cached_result) => Ok(cached_result.clone()),
            // cache miss
            None => {
                trace!("public key cache miss");
                let generated_result = PublicKey::from_bytes(&key)?;
                self.de.put(key, generated_result.clone());
                Ok(generated_result)
            }
        }
    }
}
