use criterion::{black_box, Criterion};
use fixed_histogram::Histogram;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn quantile(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("quantile");

    for capacity in [10, 1_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(11);
        let histogram = Histogram::new(0.0, 1_000.0, capacity)
            .update_all((0..100_000).map(|_| rng.gen_range(0.0..1_000.0)));

        group.bench_function(format!("p99-{capacity}"), |bencher| {
            bencher.iter(|| histogram.quantile(black_box(0.99)))
        });
    }
}

criterion::criterion_group!(benches, quantile);
