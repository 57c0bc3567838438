//! Cache Configuration Module
//!
//! This module provides configuration structures for the three cache
//! backends. Each backend has its own dedicated configuration struct with
//! public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: The capacity is a `NonZeroUsize`; a zero capacity is
//!   unrepresentable in a config
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! Callers that hold a plain `usize` (possibly zero) should use the
//! backends' `new(capacity)` constructors instead, which silently clamp
//! the capacity to a minimum of 1.
//!
//! # Backend Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `ScanCacheConfig` | [`ScanCache`](crate::ScanCache) | Linear scan backend |
//! | `MapCacheConfig` | [`MapCache`](crate::MapCache) | Hash-indexed backend |
//! | `TreeCacheConfig` | [`TreeCache`](crate::TreeCache) | Binary search tree backend |
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
//!
//! let cache: MapCache<i32> = MapCache::init(config);
//! ```

pub mod map;
pub mod scan;
pub mod tree;

// Re-exports for convenience
pub use map::MapCacheConfig;
pub use scan::ScanCacheConfig;
pub use tree::TreeCacheConfig;
