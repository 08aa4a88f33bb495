//! Criterion micro-benchmarks for the dominance index.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glide_bench::spread_masks;
use glide_search::DominanceIndex;

/// Benchmark: Insert 1K masks of 24 bits into an empty index.
fn bench_dominance_insert_1k(c: &mut Criterion) {
    let masks = spread_masks(24, 1_000, 1);

    c.bench_function("dominance_insert_1k", |b| {
        b.iter(|| {
            let mut index = DominanceIndex::new(24);
            for &mask in &masks {
                index.insert(mask);
            }
            black_box(index.node_count());
        });
    });
}

/// Benchmark: 1K subset queries against an index holding 1K masks.
fn bench_dominance_query_1k(c: &mut Criterion) {
    let mut index = DominanceIndex::new(24);
    for mask in spread_masks(24, 1_000, 1) {
        index.insert(mask);
    }
    let queries = spread_masks(24, 1_000, 2);

    c.bench_function("dominance_query_1k", |b| {
        b.iter(|| {
            let hits = queries.iter().filter(|&&q| index.has_subset_of(q)).count();
            black_box(hits);
        });
    });
}

/// Benchmark: The same queries at the full 32-bit width.
fn bench_dominance_query_1k_width32(c: &mut Criterion) {
    let mut index = DominanceIndex::new(32);
    for mask in spread_masks(32, 1_000, 1) {
        index.insert(mask);
    }
    let queries = spread_masks(32, 1_000, 2);

    c.bench_function("dominance_query_1k_width32", |b| {
        b.iter(|| {
            let hits = queries.iter().filter(|&&q| index.has_subset_of(q)).count();
            black_box(hits);
        });
    });
}

criterion_group!(
    benches,
    bench_dominance_insert_1k,
    bench_dominance_query_1k,
    bench_dominance_query_1k_width32
);
criterion_main!(benches);
