//! Map Backend Metrics
//!
//! Metrics specific to the hash-indexed cache backend.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Map-backend metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Default, Clone)]
pub struct MapCacheMetrics {
    /// Core metrics common to all cache backends
    pub core: CoreCacheMetrics,

    /// Total positions moved by full-bubble promotions
    pub promotion_steps: u64,
}

impl MapCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a promotion that bubbled an entry `steps` positions forward.
    pub fn record_promotion(&mut self, steps: usize) {
        self.promotion_steps += steps as u64;
    }

    /// Average positions moved per request, or 0.0 before any request.
    pub fn promotion_rate(&self) -> f64 {
        if self.core.requests > 0 {
            self.promotion_steps as f64 / self.core.requests as f64
        } else {
            0.0
        }
    }

    /// Converts map metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("promotion_steps".to_string(), self.promotion_steps as f64);
        metrics.insert("promotion_rate".to_string(), self.promotion_rate());
        metrics
    }
}

impl CacheMetrics for MapCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "map"
    }
}
