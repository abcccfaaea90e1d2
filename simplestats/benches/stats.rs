use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simplestats::{correlation, linear_regression, median, ordinary_least_square, variance};

fn random_f64(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

fn bench_descriptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptive");

    let data_100k = random_f64(100_000, 42);
    group.bench_function("variance_100k", |b| {
        b.iter(|| variance(black_box(&data_100k)))
    });
    group.bench_function("median_100k", |b| {
        b.iter(|| median(black_box(&data_100k)))
    });

    group.finish();
}

fn bench_bivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bivariate");

    let x = random_f64(100_000, 42);
    let y = random_f64(100_000, 7);
    group.bench_function("correlation_100k", |b| {
        b.iter(|| correlation(black_box(&x), black_box(&y)))
    });
    group.bench_function("ols_100k", |b| {
        b.iter(|| ordinary_least_square(black_box(&x), black_box(&y)))
    });
    // Fresh holder per iteration, so every derived value is computed once.
    group.bench_function("holder_all_derived_100k", |b| {
        b.iter(|| {
            let reg = linear_regression(black_box(&x), black_box(&y)).unwrap();
            (reg.slope(), reg.rsquared(), reg.residuals().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_descriptive, bench_bivariate);
criterion_main!(benches);
