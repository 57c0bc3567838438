//! Configuration for the binary-search-tree cache backend.
//!
//! # Examples
//!
//! ```
//! use popcache::config::TreeCacheConfig;
//! use popcache::TreeCache;
//! use core::num::NonZeroUsize;
//!
//! let config = TreeCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: TreeCache<String> = TreeCache::init(config);
//! ```

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for a [`TreeCache`](crate::TreeCache).
///
/// The node arena is pre-sized to the capacity; lookups cost O(log n) on
/// average but the tree's opportunistic rebalancing gives no worst-case
/// bound under adversarial key orderings.
///
/// # Examples
///
/// ```
/// use popcache::config::TreeCacheConfig;
/// use popcache::TreeCache;
/// use core::num::NonZeroUsize;
///
/// let config = TreeCacheConfig {
///     capacity: NonZeroUsize::new(100).unwrap(),
/// };
/// let cache: TreeCache<i32> = TreeCache::init(config);
/// ```
#[derive(Clone, Copy)]
pub struct TreeCacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: NonZeroUsize,
}

impl fmt::Debug for TreeCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
