//! Cache Metrics System
//!
//! Provides a metrics collection and reporting system shared by the three
//! cache backends. Each backend tracks a few backend-specific counters on
//! top of a common core while implementing a common `CacheMetrics` trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for metric reporting because:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmark comparisons
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference is negligible with ~10 metric keys.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

// Re-export backend-specific metrics
pub mod map;
pub mod scan;
pub mod tree;

pub use map::MapCacheMetrics;
pub use scan::ScanCacheMetrics;
pub use tree::TreeCacheMetrics;

/// Common metrics tracked by all cache backends
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of requests (gets) made to the cache
    pub requests: u64,

    /// Number of requests that resulted in cache hits
    pub cache_hits: u64,

    /// Number of entries inserted into the cache (fresh keys only;
    /// overwrites of an existing key do not count)
    pub insertions: u64,

    /// Number of entries evicted from the cache due to capacity constraints
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit - the requested key was found.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a cache miss - the requested key was not found.
    ///
    /// Cache misses are reported as (requests - cache_hits).
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records the insertion of a fresh entry.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an eviction due to a capacity constraint.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Cache hit rate as a value between 0.0 and 1.0, or 0.0 if no
    /// requests have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Cache miss rate as a value between 0.0 and 1.0, or 0.0 if no
    /// requests have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts core metrics to a BTreeMap for reporting.
    ///
    /// Uses BTreeMap to ensure deterministic, consistent ordering of
    /// metrics, which matters for reproducible test and comparison output.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Trait implemented by every cache backend for metrics reporting.
///
/// Provides a uniform interface for retrieving metrics from any backend,
/// with BTreeMap output for deterministic key ordering.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Backend name for identification (e.g. "scan", "map", "tree").
    fn algorithm_name(&self) -> &'static str;
}
