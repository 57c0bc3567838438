//! Tree Backend Metrics
//!
//! Metrics specific to the binary-search-tree cache backend. On top of
//! the shared promotion accounting, the tree tracks how often its
//! opportunistic rebalancing actually rotated a node: a high rotation
//! count relative to insertions usually means the workload feeds keys in
//! nearly sorted order.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Tree-backend metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Default, Clone)]
pub struct TreeCacheMetrics {
    /// Core metrics common to all cache backends
    pub core: CoreCacheMetrics,

    /// Total positions moved by full-bubble promotions
    pub promotion_steps: u64,

    /// Number of single rotations applied by rebalancing
    pub rotations: u64,
}

impl TreeCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a promotion that bubbled an entry `steps` positions forward.
    pub fn record_promotion(&mut self, steps: usize) {
        self.promotion_steps += steps as u64;
    }

    /// Records a single rotation applied during rebalancing.
    pub fn record_rotation(&mut self) {
        self.rotations += 1;
    }

    /// Converts tree metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("promotion_steps".to_string(), self.promotion_steps as f64);
        metrics.insert("rotations".to_string(), self.rotations as f64);
        metrics
    }
}

impl CacheMetrics for TreeCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "tree"
    }
}
