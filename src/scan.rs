//! Linear-Scan Cache Backend
//!
//! This module provides the simplest of the three backends: entries live
//! in a flat buffer sized to the cache capacity and every lookup is a
//! full scan for key equality. It exists as the reference-simple variant
//! of the shared contract, not as a performance backend — its behavior is
//! the baseline the indexed backends are compared against.
//!
//! # Algorithm
//!
//! The buffer is ordered from most to least popular. Promotion is a
//! single adjacent swap with the immediately-more-popular neighbor, a
//! deliberately weaker O(1) approximation of the full bubble used by the
//! map and tree backends: a hot entry migrates one slot per hit instead
//! of overtaking every colder neighbor at once. Eviction overwrites the
//! physically last populated slot, which is the live popularity tail by
//! construction.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(n)
//!   - Put: O(n)
//! - **Space Complexity**: O(capacity), one flat allocation
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap
//! the cache with a synchronization primitive such as `Mutex`.

extern crate alloc;

use crate::config::ScanCacheConfig;
use crate::entry::Entry;
use crate::metrics::{CacheMetrics, ScanCacheMetrics};
use crate::traits::Cache;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::num::NonZeroUsize;

/// A popularity-ordered cache backed by a linear scan over a flat buffer.
///
/// # Examples
///
/// ```
/// use popcache::{Cache, ScanCache};
///
/// let mut cache = ScanCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get("a");
///
/// // "b" is the least popular entry and gets overwritten.
/// let evicted = cache.put("c", 3);
/// assert_eq!(evicted, Some((String::from("b"), 2)));
/// assert_eq!(cache.get("b"), None);
/// ```
pub struct ScanCache<V> {
    config: ScanCacheConfig,
    entries: Vec<Entry<V>>,
    metrics: ScanCacheMetrics,
}

impl<V> ScanCache<V> {
    /// Creates a scan cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is silently clamped to 1.
    pub fn new(capacity: usize) -> Self {
        ScanCache::init(ScanCacheConfig {
            capacity: NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
        })
    }

    /// Creates a scan cache from a configuration.
    pub fn init(config: ScanCacheConfig) -> Self {
        ScanCache {
            config,
            entries: Vec::with_capacity(config.capacity.get()),
            metrics: ScanCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Returns the current number of entries in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the value for `key`, promoting it by at
    /// most one position.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.entries.iter().position(|e| e.key == key) {
            Some(pos) => {
                self.entries[pos].record_hit();
                let pos = self.try_swap(pos);
                self.metrics.core.record_hit();
                Some(&self.entries[pos].value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Inserts or updates the entry for `key`.
    ///
    /// At capacity, the buffer's last slot — the popularity tail — is
    /// overwritten in place and its previous occupant returned.
    pub fn put(&mut self, key: &str, value: V) -> Option<(String, V)> {
        if let Some(pos) = self.entries.iter().position(|e| e.key == key) {
            let entry = &mut self.entries[pos];
            entry.record_hit();
            entry.value = value;
            self.try_swap(pos);
            return None;
        }

        if self.entries.len() == self.config.capacity.get() {
            let last = self.entries.len() - 1;
            let evicted = mem::replace(&mut self.entries[last], Entry::new(key, value));
            self.metrics.core.record_eviction();
            self.metrics.core.record_insertion();
            return Some((evicted.key, evicted.value));
        }

        self.entries.push(Entry::new(key, value));
        self.metrics.core.record_insertion();
        None
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the cached keys ordered from most to least popular.
    pub fn popularity_keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// Swaps the entry at `pos` with its more-popular neighbor when it
    /// has strictly more hits. Returns the entry's final position.
    fn try_swap(&mut self, pos: usize) -> usize {
        if pos > 0 && self.entries[pos].hits > self.entries[pos - 1].hits {
            self.entries.swap(pos - 1, pos);
            self.metrics.record_swap();
            pos - 1
        } else {
            pos
        }
    }
}

impl<V> Cache<V> for ScanCache<V> {
    fn get(&mut self, key: &str) -> Option<&V> {
        ScanCache::get(self, key)
    }

    fn put(&mut self, key: &str, value: V) -> Option<(String, V)> {
        ScanCache::put(self, key, value)
    }

    fn len(&self) -> usize {
        ScanCache::len(self)
    }

    fn cap(&self) -> NonZeroUsize {
        ScanCache::cap(self)
    }

    fn clear(&mut self) {
        ScanCache::clear(self)
    }

    fn popularity_keys(&self) -> Vec<&str> {
        ScanCache::popularity_keys(self)
    }
}

impl<V> CacheMetrics for ScanCache<V> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<V> fmt::Debug for ScanCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.entries.len())
            .finish()
    }
}
