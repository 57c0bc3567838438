#![no_std]
extern crate alloc;
extern crate popcache;

use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;
use popcache::config::{MapCacheConfig, ScanCacheConfig, TreeCacheConfig};
use popcache::{Cache, MapCache, ScanCache, TreeCache};

// Helper functions to create caches with the init pattern
fn make_scan<V>(cap: usize) -> ScanCache<V> {
    ScanCache::init(ScanCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    })
}

fn make_map<V>(cap: usize) -> MapCache<V> {
    MapCache::init(MapCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    })
}

fn make_tree<V>(cap: usize) -> TreeCache<V> {
    TreeCache::init(TreeCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    })
}

fn exercise<C: Cache<u32>>(cache: &mut C) {
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get("a"), Some(&1));

    let evicted = cache.put("c", 3);
    assert_eq!(evicted, Some((String::from("b"), 2)));
    assert_eq!(cache.len(), 2);

    let keys: Vec<&str> = cache.popularity_keys();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys.last(), Some(&"c"));
}

#[test]
fn test_scan_cache_works_without_std() {
    exercise(&mut make_scan(2));
}

#[test]
fn test_map_cache_works_without_std() {
    exercise(&mut make_map(2));
}

#[test]
fn test_tree_cache_works_without_std() {
    let mut cache = make_tree(2);
    exercise(&mut cache);
    assert_eq!(cache.keys_in_order(), ["a", "c"]);
}
