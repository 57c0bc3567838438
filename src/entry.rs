//! Cache Entry Record
//!
//! This module provides the [`Entry`] record shared by all three cache
//! backends. An entry is a plain `{key, value, hits}` triple with no
//! behavior beyond hit counting: where it sits in a backend's index
//! structure and in the popularity ordering is owned by the backend,
//! not by the entry itself.
//!
//! # Hit Counting
//!
//! `hits` starts at 1 when the entry is created and increases by exactly
//! one on every access — both reads (`get`) and overwrites of an existing
//! key (`put`). The counter is the sort key for the popularity ordering:
//! the entry with the fewest hits at the least-popular end of the ordering
//! is the eviction candidate.
//!
//! # Examples
//!
//! ```
//! use popcache::entry::Entry;
//!
//! let mut entry = Entry::new("image.png", 1024);
//! assert_eq!(entry.hits, 1);
//!
//! entry.record_hit();
//! assert_eq!(entry.hits, 2);
//! ```

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// A single cached key/value pair with its access count.
///
/// Identity is the key: two entries with the same key never coexist in
/// one cache. The value is an opaque payload the cache never interprets.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The cache key. Keys are totally ordered strings; the tree backend
    /// relies on their ordering, the other backends only on equality.
    pub key: String,

    /// The cached payload.
    pub value: V,

    /// Access count. Starts at 1 on creation, incremented on every hit.
    pub hits: u64,
}

impl<V> Entry<V> {
    /// Creates a fresh entry with a hit count of 1.
    pub fn new(key: &str, value: V) -> Self {
        Entry {
            key: String::from(key),
            value,
            hits: 1,
        }
    }

    /// Increments the hit counter and returns the new count.
    #[inline]
    pub fn record_hit(&mut self) -> u64 {
        self.hits += 1;
        self.hits
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("hits", &self.hits)
            .finish()
    }
}
