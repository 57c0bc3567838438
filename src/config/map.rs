//! Configuration for the hash-indexed cache backend.
//!
//! # Examples
//!
//! ```
//! use popcache::config::MapCacheConfig;
//! use popcache::MapCache;
//! use core::num::NonZeroUsize;
//!
//! let config = MapCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: MapCache<String> = MapCache::init(config);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for a [`MapCache`](crate::MapCache).
///
/// The hash index is pre-sized to the capacity rounded up to the next
/// power of two, so a cache at capacity never rehashes.
///
/// # Examples
///
/// ```
/// use popcache::config::MapCacheConfig;
/// use popcache::MapCache;
/// use core::num::NonZeroUsize;
///
/// let config = MapCacheConfig {
///     capacity: NonZeroUsize::new(100).unwrap(),
/// };
/// let cache: MapCache<i32> = MapCache::init(config);
/// ```
#[derive(Clone, Copy)]
pub struct MapCacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: NonZeroUsize,
}

impl fmt::Debug for MapCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
