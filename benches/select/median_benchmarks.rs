use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use medians::select::{
    median_torben, AhuSelect, QuickSelect, SelectionAlgorithm, TorbenMedian, WirthSelect,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::hint::black_box;

// Generated values are in [0, MAX_VALUE).
const MAX_VALUE: u32 = 1024;

fn uniform_samples(size: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..MAX_VALUE) as f32).collect()
}

fn normal_samples(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_lower_median<A: SelectionAlgorithm + Clone>(
    c: &mut Criterion,
    label: &str,
    sizes: &[usize],
    algorithm: A,
) {
    let mut group = c.benchmark_group("median");
    for &size in sizes {
        let data = uniform_samples(size, size as u64);
        group.bench_with_input(BenchmarkId::new(label, size), &data, |b, data| {
            let mut algorithm = algorithm.clone();
            b.iter_batched_ref(
                || data.clone(),
                |work| black_box(algorithm.lower_median(work).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn benchmark_selectors(c: &mut Criterion) {
    let sizes = [1_000usize, 10_000, 100_000, 1 << 20];

    bench_lower_median(c, "quickselect", &sizes, QuickSelect::new());
    bench_lower_median(c, "quickselect_random", &sizes, QuickSelect::seeded(42));
    bench_lower_median(c, "wirth", &sizes, WirthSelect);
    bench_lower_median(c, "ahu", &sizes, AhuSelect);

    let mut group = c.benchmark_group("median");
    for size in sizes {
        let data = uniform_samples(size, size as u64);
        group.bench_with_input(BenchmarkId::new("torben", size), &data, |b, data| {
            b.iter(|| black_box(median_torben(data).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("std_sort", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |work| {
                    work.sort_by(|a, b| a.total_cmp(b));
                    black_box(work[(work.len() - 1) / 2])
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn benchmark_torben_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("torben");
    let data = normal_samples(1 << 20, 7);

    group.bench_function("sequential", |b| {
        let torben = TorbenMedian::new().with_parallel_threshold(usize::MAX);
        b.iter(|| black_box(torben.median(&data).unwrap()))
    });

    group.bench_function("parallel_threshold_default", |b| {
        let torben = TorbenMedian::new();
        b.iter(|| black_box(torben.median(&data).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_selectors, benchmark_torben_passes);
criterion_main!(benches);
