// Simple benchmarks using criterion instead of unstable test feature
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use popcache::config::{MapCacheConfig, ScanCacheConfig, TreeCacheConfig};
use popcache::{MapCache, ScanCache, TreeCache};
use std::num::NonZeroUsize;

// Benchmark configuration
const CACHE_SIZE: usize = 1_000;
const SCAN_CACHE_SIZE: usize = 64;
const NUM_OPERATIONS: usize = 10_000;

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

// Simple linear congruential generator for reproducible benchmarks
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fffffff;
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (0x7fffffff as f64)
    }
}

/// Generates a Zipf-like key stream: a small hot set absorbs most of the
/// accesses, the long tail the rest. Keys are pre-rendered strings.
fn generate_zipf_keys(universe: usize, count: usize, seed: u64) -> Vec<String> {
    let mut rng = SimpleRng::new(seed);
    let mut keys = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.next_f64();
        let idx = if r < 0.8 {
            // 80% of accesses hit 20% of the keys
            (rng.next_u64() as usize) % (universe / 5).max(1)
        } else {
            (rng.next_u64() as usize) % universe
        };
        keys.push(format!("key_{idx}"));
    }
    keys
}

fn bench_get_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    let keys = generate_zipf_keys(CACHE_SIZE, NUM_OPERATIONS, 42);
    let scan_keys = generate_zipf_keys(SCAN_CACHE_SIZE, NUM_OPERATIONS, 42);

    group.bench_function("scan", |b| {
        let mut cache = make_scan(SCAN_CACHE_SIZE);
        for i in 0..SCAN_CACHE_SIZE {
            cache.put(&format!("key_{i}"), i);
        }
        let mut cursor = 0;
        b.iter(|| {
            let key = &scan_keys[cursor % scan_keys.len()];
            cursor += 1;
            black_box(cache.get(key))
        });
    });

    group.bench_function("map", |b| {
        let mut cache = make_map(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(&format!("key_{i}"), i);
        }
        let mut cursor = 0;
        b.iter(|| {
            let key = &keys[cursor % keys.len()];
            cursor += 1;
            black_box(cache.get(key))
        });
    });

    group.bench_function("tree", |b| {
        let mut cache = make_tree(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(&format!("key_{i}"), i);
        }
        let mut cursor = 0;
        b.iter(|| {
            let key = &keys[cursor % keys.len()];
            cursor += 1;
            black_box(cache.get(key))
        });
    });

    group.finish();
}

fn bench_put_with_evictions(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_evicting");
    // Twice the cache capacity, so half the inserts evict.
    let keys = generate_zipf_keys(CACHE_SIZE * 2, NUM_OPERATIONS, 7);
    let scan_keys = generate_zipf_keys(SCAN_CACHE_SIZE * 2, NUM_OPERATIONS, 7);

    group.bench_function("scan", |b| {
        let mut cache = make_scan(SCAN_CACHE_SIZE);
        let mut cursor = 0;
        b.iter(|| {
            let key = &scan_keys[cursor % scan_keys.len()];
            cursor += 1;
            black_box(cache.put(key, cursor))
        });
    });

    group.bench_function("map", |b| {
        let mut cache = make_map(CACHE_SIZE);
        let mut cursor = 0;
        b.iter(|| {
            let key = &keys[cursor % keys.len()];
            cursor += 1;
            black_box(cache.put(key, cursor))
        });
    });

    group.bench_function("tree", |b| {
        let mut cache = make_tree(CACHE_SIZE);
        let mut cursor = 0;
        b.iter(|| {
            let key = &keys[cursor % keys.len()];
            cursor += 1;
            black_box(cache.put(key, cursor))
        });
    });

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_70_30");
    let keys = generate_zipf_keys(CACHE_SIZE * 2, NUM_OPERATIONS, 2024);

    group.bench_function("map", |b| {
        let mut cache = make_map(CACHE_SIZE);
        let mut rng = SimpleRng::new(1);
        let mut cursor = 0;
        b.iter(|| {
            let key = &keys[cursor % keys.len()];
            cursor += 1;
            if rng.next_f64() < 0.7 {
                black_box(cache.get(key).is_some())
            } else {
                black_box(cache.put(key, cursor).is_some())
            }
        });
    });

    group.bench_function("tree", |b| {
        let mut cache = make_tree(CACHE_SIZE);
        let mut rng = SimpleRng::new(1);
        let mut cursor = 0;
        b.iter(|| {
            let key = &keys[cursor % keys.len()];
            cursor += 1;
            if rng.next_f64() < 0.7 {
                black_box(cache.get(key).is_some())
            } else {
                black_box(cache.put(key, cursor).is_some())
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hits,
    bench_put_with_evictions,
    bench_mixed_workload
);
criterion_main!(benches);
