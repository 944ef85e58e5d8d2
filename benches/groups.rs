//! Benchmarks for adjacency-group discovery.
//!
//! Run with:
//! ```bash
//! cargo bench --bench groups
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kmap_rs::clause::render_all_clauses;
use kmap_rs::finder::find_adjacency_groups;
use kmap_rs::gray::gray_code;
use kmap_rs::kmap::KarnaughMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate a deterministic random map with the given fill density.
fn random_map(seed: u64, n: u32, density: f64) -> KarnaughMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let minterms: Vec<u32> = (0..(1u32 << n)).filter(|_| rng.random_bool(density)).collect();
    KarnaughMap::from_minterms(n, minterms).unwrap()
}

// ============================================================================
// Benchmark: Group discovery on random maps
// ============================================================================

fn bench_random_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("groups/random");

    for n in 2..=6 {
        for density in [0.25, 0.5, 0.75] {
            let map = random_map(42, n, density);
            group.bench_with_input(
                BenchmarkId::new(format!("n={}", n), format!("{:.0}%", density * 100.0)),
                &map,
                |b, map| b.iter(|| find_adjacency_groups(map)),
            );
        }
    }

    group.finish();
}

// ============================================================================
// Benchmark: Group discovery on full maps (deepest recursion)
// ============================================================================

fn bench_full_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("groups/full");

    for n in 2..=6 {
        let map = KarnaughMap::from_minterms(n, 0..(1u32 << n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, map| {
            b.iter(|| find_adjacency_groups(map))
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Gray codes and clauses
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("gray_code/16", |b| b.iter(|| gray_code(16)));

    let map = KarnaughMap::from_minterms(6, 0..64).unwrap();
    group.bench_function("clauses/n=6", |b| b.iter(|| render_all_clauses(&map)));

    group.finish();
}

criterion_group!(benches, bench_random_maps, bench_full_maps, bench_rendering);

criterion_main!(benches);
