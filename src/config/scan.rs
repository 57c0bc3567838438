//! Configuration for the linear-scan cache backend.

use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for a [`ScanCache`](crate::ScanCache).
///
/// The scan backend keeps its entries in a flat buffer of exactly
/// `capacity` slots, so the capacity is also the upper bound on the cost
/// of a single lookup.
///
/// # Examples
///
/// ```
/// use popcache::config::ScanCacheConfig;
/// use popcache::ScanCache;
/// use core::num::NonZeroUsize;
///
/// let config = ScanCacheConfig {
///     capacity: NonZeroUsize::new(16).unwrap(),
/// };
/// let cache: ScanCache<i32> = ScanCache::init(config);
/// ```
#[derive(Clone, Copy)]
pub struct ScanCacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: NonZeroUsize,
}

impl fmt::Debug for ScanCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
