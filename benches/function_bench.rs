//! Benchmark for the function, predicate and consumer wrappers.
//!
//! Compares wrapper calls and combinator chains with direct closure calls.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambdadepot::function::{Consumer1, Function1, Function3, Predicate1};
use lambdadepot::function::logic::{all_of, is_greater_than, is_less_than};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Function Benchmarks
// =============================================================================

fn benchmark_apply(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply");

    let closure = |value: u64| value.wrapping_add(1);
    let wrapped = Function1::of(closure);

    // Baseline
    group.bench_function("closure", |bencher| {
        bencher.iter(|| black_box(closure(black_box(41))));
    });

    group.bench_function("function1", |bencher| {
        bencher.iter(|| black_box(wrapped.apply(black_box(41))));
    });

    for depth in [1, 5, 25] {
        let mut chained = Function1::<u64, u64>::identity();
        for _ in 0..depth {
            chained = chained.and_then(closure);
        }
        group.bench_with_input(BenchmarkId::new("and_then_chain", depth), &chained, |bencher, chained| {
            bencher.iter(|| black_box(chained.apply(black_box(0))));
        });
    }

    group.finish();
}

fn benchmark_partial_application(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_application");

    let volume = Function3::of(|width: u64, height: u64, depth: u64| width * height * depth);

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(volume.apply(black_box(2), black_box(3), black_box(4))));
    });

    let bound = volume.partial_apply2(2, 3);
    group.bench_function("partial_apply2", |bencher| {
        bencher.iter(|| black_box(bound.apply(black_box(4))));
    });

    let curried = volume.curry();
    group.bench_function("curry", |bencher| {
        bencher.iter(|| black_box(curried.apply(black_box(2)).apply(3, 4)));
    });

    let lifted = Function1::of(|text: &'static str| text.parse::<u64>()).lift();
    group.bench_function("lift_failure", |bencher| {
        bencher.iter(|| black_box(lifted.apply(black_box("nan"))));
    });

    group.finish();
}

// =============================================================================
// Predicate and Consumer Benchmarks
// =============================================================================

fn benchmark_predicates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicates");

    let in_range = is_greater_than(10_i64).and(is_less_than(100_i64).into_fn());
    group.bench_function("and", |bencher| {
        bencher.iter(|| black_box(in_range.test(black_box(&50))));
    });

    for count in [2, 8, 32] {
        let predicates: Vec<Predicate1<i64>> = (0..count).map(|bound| is_greater_than(-bound)).collect();
        let Ok(combined) = all_of(predicates) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("all_of", count), &combined, |bencher, combined| {
            bencher.iter(|| black_box(combined.test(black_box(&0))));
        });
    }

    group.finish();
}

fn benchmark_consumers(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("consumers");

    let total = std::sync::Arc::new(AtomicU64::new(0));
    let sink = std::sync::Arc::clone(&total);
    let record = Consumer1::of(move |value: &u64| {
        sink.fetch_add(*value, Ordering::Relaxed);
    });
    let twice = record.and_then(record.clone().into_fn());

    group.bench_function("accept", |bencher| {
        bencher.iter(|| record.accept(black_box(&1)));
    });

    group.bench_function("and_then", |bencher| {
        bencher.iter(|| twice.accept(black_box(&1)));
    });

    group.finish();
    black_box(total.load(Ordering::Relaxed));
}

criterion_group!(
    benches,
    benchmark_apply,
    benchmark_partial_application,
    benchmark_predicates,
    benchmark_consumers
);

criterion_main!(benches);
