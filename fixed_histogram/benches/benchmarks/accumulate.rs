use criterion::{black_box, BatchSize, Criterion};
use fixed_histogram::Histogram;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn accumulate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("accumulate");
    group.throughput(criterion::Throughput::Elements(1));

    for capacity in [10, 1_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let mut histogram = Histogram::new(0.0, 1_000.0, capacity);
        group.bench_function(format!("in-place-{capacity}"), |bencher| {
            bencher.iter(|| histogram.accumulate(black_box(rng.gen_range(-10.0..1_010.0))))
        });
    }

    // Value-style updates move the histogram rather than copying it
    let mut rng = StdRng::seed_from_u64(7);
    group.bench_function("update-by-value", |bencher| {
        bencher.iter_batched(
            || Histogram::new(0.0, 1_000.0, 1_000),
            |histogram| histogram.update(black_box(rng.gen_range(0.0..1_000.0))),
            BatchSize::SmallInput,
        )
    });
}

criterion::criterion_group!(benches, accumulate);
