use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use statys::*;
use std::hint::black_box;

const SAMPLE_SIZE: usize = 30;

fn xrng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(42)
}

fn distribution(samples: usize, len: usize) -> Distribution {
    let mut rng = xrng();
    let data: Vec<Vec<f64>> = (0..samples)
        .map(|_| (0..len).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect();
    Distribution::new(data).expect("numeric samples")
}

/// 1. PAIRWISE PIPELINE (scaling with the number of samples)
fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/pairwise");

    for &samples in &[2, 8, 32] {
        let d = distribution(samples, SAMPLE_SIZE);
        group.throughput(Throughput::Elements((samples * (samples - 1)) as u64));

        group.bench_with_input(BenchmarkId::new("signed_rank", samples), &d, |b, d| {
            b.iter(|| black_box(wilcoxon::signed_rank(black_box(d), 0.05)))
        });
        group.bench_with_input(BenchmarkId::new("mann_whitney", samples), &d, |b, d| {
            b.iter(|| black_box(mann_whitney::u_test(black_box(d), 0.05)))
        });
    }
    group.finish();
}

/// 2. MEASURE PIPELINE
fn bench_measures(c: &mut Criterion) {
    let d = distribution(16, 1_000);

    c.bench_function("pipeline/measure_kurtosis", |b| {
        b.iter(|| black_box(measure::kurtosis(black_box(&d))))
    });
    c.bench_function("pipeline/measure_rank", |b| {
        b.iter(|| black_box(measure::rank(black_box(&d), Axis::Flat)))
    });
}

/// 3. FRIEDMAN + NEMENYI over repeated measures
fn bench_friedman(c: &mut Criterion) {
    let mut rng = xrng();
    let trials: Vec<Vec<f64>> = (0..100)
        .map(|_| (0..10).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect();
    let d = Distribution::new([trials]).expect("numeric samples");

    c.bench_function("friedman/statistic", |b| {
        b.iter(|| black_box(friedman::friedman(black_box(&d), Axis::At(1))))
    });
    c.bench_function("friedman/nemenyi", |b| {
        b.iter(|| black_box(friedman_with_posthoc(black_box(&d), 0.05, "nemenyi", Axis::At(1))))
    });
}

criterion_group!(benches, bench_pairwise, bench_measures, bench_friedman);
criterion_main!(benches);
