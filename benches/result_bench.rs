//! Benchmark for the tri-state `Result`.
//!
//! Measures chained transformations and failure recovery against the
//! equivalent `Option` / `core::result::Result` pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambdadepot::result::{Error, Result};
use std::hint::black_box;

#[derive(Debug, thiserror::Error)]
#[error("value {0} rejected")]
struct Rejected(u64);

// =============================================================================
// Transformation Benchmarks
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_chain");

    for length in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::new("tri_state", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut result = Result::success(black_box(1_u64));
                    for _ in 0..length {
                        result = result.map(|value| value.wrapping_mul(3)).filter(|value| *value != 0);
                    }
                    black_box(result.into_option())
                });
            },
        );

        // Baseline
        group.bench_with_input(
            BenchmarkId::new("option", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut option = Some(black_box(1_u64));
                    for _ in 0..length {
                        option = option.map(|value| value.wrapping_mul(3)).filter(|value| *value != 0);
                    }
                    black_box(option)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    group.bench_function("success_path", |bencher| {
        bencher.iter(|| {
            let result = Result::success(black_box(21_u64))
                .flat_map(|value| Result::success(value * 2))
                .flat_map(|value| Result::success_or_empty(value.checked_sub(2)));
            black_box(result)
        });
    });

    group.bench_function("empty_path", |bencher| {
        bencher.iter(|| {
            let result = Result::<u64>::empty()
                .flat_map(|value| Result::success(value * 2))
                .if_empty_return(black_box(0));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Recovery Benchmarks
// =============================================================================

fn benchmark_recovery(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("recovery");

    group.bench_function("failure_construction", |bencher| {
        bencher.iter(|| black_box(Result::<u64>::failure(Rejected(black_box(7)))));
    });

    let failure = Result::<u64>::failure(Rejected(7));

    group.bench_function("if_failure_return", |bencher| {
        bencher.iter(|| black_box(failure.clone().if_failure_return(black_box(0))));
    });

    group.bench_function("if_failure_return_of_match", |bencher| {
        bencher.iter(|| black_box(failure.clone().if_failure_return_of::<Rejected>(black_box(0))));
    });

    group.bench_function("if_failure_return_of_miss", |bencher| {
        bencher.iter(|| {
            black_box(
                failure
                    .clone()
                    .if_failure_return_of::<std::num::ParseIntError>(black_box(0)),
            )
        });
    });

    group.bench_function("if_failure_map", |bencher| {
        bencher.iter(|| {
            black_box(
                failure
                    .clone()
                    .if_failure_map(|error| Error::msg(format!("wrapped: {error}"))),
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_chain,
    benchmark_flat_map,
    benchmark_recovery
);

criterion_main!(benches);
