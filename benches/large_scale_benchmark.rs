use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use dcsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Integers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let random_ints: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Elements(count as u64));

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || random_ints.clone(),
                |mut data| algorithm.sort(black_box(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_integers);
criterion_main!(benches);
