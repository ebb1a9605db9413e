//! Benchmarks for pipeline execution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowbind::prelude::*;

fn add1(i: i32) -> i32 {
    i.wrapping_add(1)
}

fn evens_only(i: i32) -> Option<i32> {
    (i % 2 == 0).then_some(i)
}

fn sequence_benchmark(c: &mut Criterion) {
    let pipeline = lift(add1) >> lift(add1) >> lift(add1);
    let handwritten = |i: i32| add1(add1(add1(i)));

    c.bench_function("sequence_composed", |b| {
        b.iter(|| pipeline.call(black_box(12)))
    });
    c.bench_function("sequence_handwritten", |b| {
        b.iter(|| handwritten(black_box(12)))
    });
}

fn maybe_benchmark(c: &mut Criterion) {
    let pipeline = MAYBE >> lift(add1) >> lift_maybe(evens_only) >> MAYBE >> lift(add1);
    let handwritten = |i: Option<i32>| i.map(add1).and_then(evens_only).map(add1);

    c.bench_function("maybe_composed", |b| {
        b.iter(|| pipeline.call(black_box(Some(13))))
    });
    c.bench_function("maybe_handwritten", |b| {
        b.iter(|| handwritten(black_box(Some(13))))
    });
}

fn boxed_benchmark(c: &mut Criterion) {
    let boxed = (lift(add1) >> lift(add1) >> lift(add1)).into_boxed::<i32>();

    c.bench_function("sequence_boxed", |b| b.iter(|| boxed(black_box(12))));
}

criterion_group!(benches, sequence_benchmark, maybe_benchmark, boxed_benchmark);
criterion_main!(benches);
