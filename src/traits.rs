//! The Uniform Cache Contract
//!
//! All three backends implement the same capability trait: lookup,
//! insert-or-update, and size inspection, with identical popularity
//! semantics. A backend is chosen once at construction time; afterwards
//! callers can stay generic over [`Cache`] and swap index strategies
//! without touching call sites.
//!
//! Absence of a key is a normal outcome (`None`), never an error. The
//! contract has no recoverable error values at all: the only failure
//! class in this crate is an internal link-structure violation, which
//! panics immediately instead of continuing on corrupted state.
//!
//! # Examples
//!
//! ```
//! use popcache::{Cache, MapCache, TreeCache};
//!
//! fn warm<C: Cache<u32>>(cache: &mut C) {
//!     cache.put("a", 1);
//!     cache.put("b", 2);
//!     cache.get("a");
//! }
//!
//! let mut map = MapCache::new(8);
//! let mut tree = TreeCache::new(8);
//! warm(&mut map);
//! warm(&mut tree);
//! assert_eq!(map.popularity_keys(), tree.popularity_keys());
//! ```

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

/// The uniform contract implemented by every cache backend.
///
/// Keys are strings; values are an opaque payload type `V` the cache
/// never inspects. None of the implementations are safe for concurrent
/// mutation — callers that need sharing wrap the whole cache behind a
/// single lock.
pub trait Cache<V> {
    /// Returns a reference to the value for `key` if it is cached.
    ///
    /// A hit increments the entry's hit count and promotes it along the
    /// popularity ordering. A miss has no effect on the cache.
    fn get(&mut self, key: &str) -> Option<&V>;

    /// Inserts or updates the entry for `key`.
    ///
    /// If the key is already cached its hit count is incremented, its
    /// value replaced, and the entry promoted; the size is unchanged and
    /// `None` is returned. If the key is new it is inserted with one hit
    /// at the least-popular end; when the cache is full the least-popular
    /// entry is evicted first and returned as `Some((key, value))`, so
    /// the size is unchanged across the eviction+insert pair.
    fn put(&mut self, key: &str, value: V) -> Option<(String, V)>;

    /// Returns the current number of cached entries. Never exceeds
    /// [`cap`](Cache::cap).
    fn len(&self) -> usize;

    /// Returns the maximum number of entries the cache can hold.
    fn cap(&self) -> NonZeroUsize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all entries, keeping the configured capacity.
    fn clear(&mut self);

    /// Returns the cached keys ordered from most to least popular.
    ///
    /// The last key is the current eviction candidate. This is a
    /// diagnostic view: walking it costs O(n) and performs no promotion.
    fn popularity_keys(&self) -> Vec<&str>;
}
