use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, BTreeSet};

use bstree::{BSTreeMap, BSTreeSet};

const N: usize = 10_000;
// The ordered case degenerates the BST into a chain, so keep it small.
const ORDERED_N: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_insert_random");

    group.bench_function(BenchmarkId::new("BSTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BSTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert_ordered");

    group.bench_function(BenchmarkId::new("BSTreeMap", ORDERED_N), |b| {
        b.iter(|| {
            let mut map = BSTreeMap::new();
            for i in 0..ORDERED_N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", ORDERED_N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..ORDERED_N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BSTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("map_get_random");

    group.bench_function(BenchmarkId::new("BSTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if bst_map.get(k).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if bt_map.get(k).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

fn bench_map_extract_in_order(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BSTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("map_extract_in_order");

    group.bench_function(BenchmarkId::new("BSTreeMap", N), |b| {
        b.iter(|| bst_map.keys_in_order());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.keys().collect::<Vec<_>>());
    });

    group.finish();
}

// ─── Set Benchmarks ─────────────────────────────────────────────────────────

fn bench_set_add_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("set_add_random");

    group.bench_function(BenchmarkId::new("BSTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BSTreeSet::new();
            for &k in &keys {
                set.add(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn bench_set_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_set: BSTreeSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("set_contains_random");

    group.bench_function(BenchmarkId::new("BSTreeSet", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if bst_set.contains(k) {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if bt_set.contains(k) {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_map_insert_random,
    bench_map_insert_ordered,
    bench_map_get_random,
    bench_map_extract_in_order,
    bench_set_add_random,
    bench_set_contains_random,
);
criterion_main!(benches);
