//! Traversal permutation and iteration benchmarks.
//!
//! Compares the cost of computing each strategy's index permutation across
//! collection sizes, and the cost of a full fallible traversal against plain
//! slice iteration as the baseline.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use multiorder::prelude::*;
use std::hint::black_box;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

const ORDERS: [TraversalOrder; 6] = [
    TraversalOrder::Regular,
    TraversalOrder::Reverse,
    TraversalOrder::Ascending,
    TraversalOrder::Descending,
    TraversalOrder::SideCross,
    TraversalOrder::MiddleOut,
];

/// Pseudo-random but deterministic element data, worst-case-ish for sorting.
fn generate_elements(size: usize) -> Vec<i64> {
    (0..size as i64).map(|value| value.wrapping_mul(2_654_435_761) % 1_000_003).collect()
}

fn benchmark_permutation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal_permutation");

    for size in SIZES {
        let elements = generate_elements(size);
        for order in ORDERS {
            group.bench_with_input(
                BenchmarkId::new(order.name(), size),
                &elements,
                |bencher, elements| {
                    bencher.iter(|| black_box(order.permutation(black_box(elements))));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_view_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal_view_iteration");

    for size in SIZES {
        let collection: MultiOrderVec<i64> = generate_elements(size).into_iter().collect();
        group.bench_with_input(
            BenchmarkId::new("side_cross_iter", size),
            &collection,
            |bencher, collection| {
                bencher.iter_batched(
                    || collection.side_cross(),
                    |view| {
                        let mut total = 0i64;
                        for element in &view {
                            total = total.wrapping_add(*element.unwrap());
                        }
                        black_box(total)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("slice_iter_baseline", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| {
                    let mut total = 0i64;
                    for element in collection.iter() {
                        total = total.wrapping_add(*element);
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_view_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal_view_construction");

    for size in SIZES {
        let collection: MultiOrderVec<i64> = generate_elements(size).into_iter().collect();
        group.bench_with_input(
            BenchmarkId::new("ascending_view", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.ascending()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("regular_view", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.regular()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_permutation,
    benchmark_view_iteration,
    benchmark_view_construction
);
criterion_main!(benches);
