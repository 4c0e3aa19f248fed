//! Benchmarks for the three timed sorts across mixing factors.
//!
//! Complements the one-shot wall-clock sweep of the `sortedness` binary with
//! Criterion's repeated sampling and confidence intervals. Inputs are generated
//! once per `(size, mixing_factor)` with a fixed seed and cloned per iteration.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortedness::algorithm::SortAlgorithm;
use sortedness::generator::{generate_with_layout, ChunkLayout};

const MIXING_FACTORS: [usize; 4] = [1, 10, 100, 1_000];

fn bench_algorithm(c: &mut Criterion, algorithm: SortAlgorithm, sizes: &[usize]) {
    let mut group = c.benchmark_group(algorithm.name());

    for &n in sizes {
        for &mf in MIXING_FACTORS.iter().filter(|&&mf| mf <= n) {
            group.throughput(Throughput::Elements(n as u64));
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let input = generate_with_layout(n, mf, ChunkLayout::Partition, &mut rng)
                .expect("mixing factor filtered to at most size");
            group.bench_with_input(
                BenchmarkId::new(format!("n={n}"), mf),
                &input,
                |b, input| {
                    b.iter(|| algorithm.sort(black_box(input.clone())));
                },
            );
        }
    }

    group.finish();
}

fn bench_builtin(c: &mut Criterion) {
    bench_algorithm(c, SortAlgorithm::Builtin, &[1_000, 10_000, 100_000]);
}

fn bench_insertion(c: &mut Criterion) {
    // Quadratic: keep sizes small
    bench_algorithm(c, SortAlgorithm::Insertion, &[100, 1_000, 10_000]);
}

fn bench_merge(c: &mut Criterion) {
    bench_algorithm(c, SortAlgorithm::Merge, &[1_000, 10_000, 100_000]);
}

fn bench_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("presorted");

    for &n in &[1_000_usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let input: Vec<usize> = (0..n).collect();
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &input, |b, input| {
                b.iter(|| algorithm.sort(black_box(input.clone())));
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_builtin,
    bench_insertion,
    bench_merge,
    bench_presorted
);
criterion_main!(benches);
