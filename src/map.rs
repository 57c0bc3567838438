//! Hash-Indexed Cache Backend
//!
//! This module provides the O(1)-average backend of the shared contract:
//! a hash map from keys to node handles, with the popularity ordering
//! threaded through the nodes themselves. Lookup, insert and eviction are
//! all constant time on average; only promotion costs O(k) in the number
//! of positions an entry overtakes.
//!
//! # Algorithm
//!
//! Every node embeds its popularity links, so a hit needs exactly one
//! hash lookup: the node bubbles toward the most-popular end of the
//! ordering in place, without touching the index. Eviction unlinks the
//! popularity tail, vacates its arena slot and removes its key from the
//! index.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1) average + O(k) promotion
//!   - Put: O(1) average + O(k) promotion
//! - **Space Complexity**: O(capacity); the index is pre-sized so a cache
//!   at capacity never rehashes
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap
//! the cache with a synchronization primitive such as `Mutex`.

extern crate alloc;

#[cfg(not(feature = "hashbrown"))]
extern crate std;

use crate::arena::{Arena, NodeId};
use crate::config::MapCacheConfig;
use crate::entry::Entry;
use crate::metrics::{CacheMetrics, MapCacheMetrics};
use crate::popularity::{PopNode, PopularityList};
use crate::traits::Cache;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A cache node: the entry plus its embedded popularity links.
struct MapNode<V> {
    entry: Entry<V>,
    more_popular: Option<NodeId>,
    less_popular: Option<NodeId>,
}

impl<V> MapNode<V> {
    fn new(entry: Entry<V>) -> Self {
        MapNode {
            entry,
            more_popular: None,
            less_popular: None,
        }
    }
}

impl<V> PopNode for MapNode<V> {
    fn hits(&self) -> u64 {
        self.entry.hits
    }
    fn more_popular(&self) -> Option<NodeId> {
        self.more_popular
    }
    fn less_popular(&self) -> Option<NodeId> {
        self.less_popular
    }
    fn set_more_popular(&mut self, link: Option<NodeId>) {
        self.more_popular = link;
    }
    fn set_less_popular(&mut self, link: Option<NodeId>) {
        self.less_popular = link;
    }
}

/// A popularity-ordered cache backed by a hash index.
///
/// # Examples
///
/// ```
/// use popcache::{Cache, MapCache};
///
/// let mut cache = MapCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get("a");
///
/// // "b" is the popularity tail and gets evicted.
/// let evicted = cache.put("c", 3);
/// assert_eq!(evicted, Some((String::from("b"), 2)));
/// assert_eq!(cache.get("b"), None);
/// ```
pub struct MapCache<V, S = DefaultHashBuilder> {
    config: MapCacheConfig,
    nodes: Arena<MapNode<V>>,
    index: HashMap<String, NodeId, S>,
    popularity: PopularityList,
    metrics: MapCacheMetrics,
}

impl<V> MapCache<V> {
    /// Creates a map cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is silently clamped to 1.
    pub fn new(capacity: usize) -> Self {
        MapCache::init(MapCacheConfig {
            capacity: NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
        })
    }

    /// Creates a map cache from a configuration, using the default hasher.
    pub fn init(config: MapCacheConfig) -> Self {
        MapCache::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<V, S: BuildHasher> MapCache<V, S> {
    /// Creates a map cache from a configuration and a hash builder.
    pub fn with_hasher(config: MapCacheConfig, hash_builder: S) -> Self {
        let index_capacity = config.capacity.get().next_power_of_two();
        MapCache {
            config,
            nodes: Arena::with_capacity(config.capacity.get()),
            index: HashMap::with_capacity_and_hasher(index_capacity, hash_builder),
            popularity: PopularityList::new(),
            metrics: MapCacheMetrics::new(),
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
        self.index.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns a reference to the value for `key`, promoting the entry
    /// past every neighbor it now outranks.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.index.get(key).copied() {
            Some(id) => {
                self.nodes[id].entry.record_hit();
                let steps = self.popularity.promote(&mut self.nodes, id);
                self.metrics.record_promotion(steps);
                self.metrics.core.record_hit();
                Some(&self.nodes[id].entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Inserts or updates the entry for `key`.
    ///
    /// At capacity, the popularity tail is evicted first and returned.
    pub fn put(&mut self, key: &str, value: V) -> Option<(String, V)> {
        if let Some(id) = self.index.get(key).copied() {
            let node = &mut self.nodes[id];
            node.entry.record_hit();
            node.entry.value = value;
            let steps = self.popularity.promote(&mut self.nodes, id);
            self.metrics.record_promotion(steps);
            return None;
        }

        let evicted = if self.index.len() == self.config.capacity.get() {
            self.evict()
        } else {
            None
        };

        let id = self.nodes.insert(MapNode::new(Entry::new(key, value)));
        self.popularity.link_at_tail(&mut self.nodes, id);
        self.index.insert(String::from(key), id);
        self.metrics.core.record_insertion();
        evicted
    }

    /// Drops all entries, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.popularity.clear();
    }

    /// Returns the cached keys ordered from most to least popular.
    pub fn popularity_keys(&self) -> Vec<&str> {
        self.popularity
            .ids_by_popularity(&self.nodes)
            .into_iter()
            .map(|id| self.nodes[id].entry.key.as_str())
            .collect()
    }

    /// Removes the popularity tail from the list, the arena and the index.
    fn evict(&mut self) -> Option<(String, V)> {
        let id = self.popularity.unlink_tail(&mut self.nodes)?;
        let node = self
            .nodes
            .remove(id)
            .expect("popularity tail points at a vacant arena slot");
        self.index.remove(&node.entry.key);
        self.metrics.core.record_eviction();
        Some((node.entry.key, node.entry.value))
    }
}

impl<V, S: BuildHasher> Cache<V> for MapCache<V, S> {
    fn get(&mut self, key: &str) -> Option<&V> {
        MapCache::get(self, key)
    }

    fn put(&mut self, key: &str, value: V) -> Option<(String, V)> {
        MapCache::put(self, key, value)
    }

    fn len(&self) -> usize {
        MapCache::len(self)
    }

    fn cap(&self) -> NonZeroUsize {
        MapCache::cap(self)
    }

    fn clear(&mut self) {
        MapCache::clear(self)
    }

    fn popularity_keys(&self) -> Vec<&str> {
        MapCache::popularity_keys(self)
    }
}

impl<V, S: BuildHasher> CacheMetrics for MapCache<V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<V, S> fmt::Debug for MapCache<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.index.len())
            .finish()
    }
}
