use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use dcsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let random_ints: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| merge_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("quick_sort", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| quick_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    // Clones in the merge buffer and the pivot cost an allocation each here.
    let mut rng = rand::rng();
    let count = 10_000;
    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| merge_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("quick_sort", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| quick_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_strings);
criterion_main!(benches);
