//! Scan Backend Metrics
//!
//! Metrics specific to the linear-scan cache backend.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Scan-backend metrics (extends [`CoreCacheMetrics`]).
///
/// The scan backend promotes with a single adjacent swap per hit, so its
/// only backend-specific signal is how often that swap actually fired.
#[derive(Debug, Default, Clone)]
pub struct ScanCacheMetrics {
    /// Core metrics common to all cache backends
    pub core: CoreCacheMetrics,

    /// Number of adjacent-swap promotions that moved an entry forward
    pub swaps: u64,
}

impl ScanCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an adjacent swap that moved an entry one position forward.
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Converts scan metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("swaps".to_string(), self.swaps as f64);
        metrics
    }
}

impl CacheMetrics for ScanCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "scan"
    }
}
