//! Zipf fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of rank and size fits (100 to 100K counts)
//! - Event tallying through the histogram adapters
//! - Degenerate distributions (uniform, single count)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Uniform, Zipf as ZipfDistribution};
use std::hint::black_box;
use zipf_rs::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Draw `size` events from a Zipf distribution over `n` ranks.
fn generate_zipf_events(size: usize, n: f64, exponent: f64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = ZipfDistribution::new(n, exponent).unwrap();

    (0..size).map(|_| dist.sample(&mut rng) as u64).collect()
}

/// Random positive counts, one per category.
fn generate_counts(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(1.0, 10_000.0).unwrap();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Sizes `1..=size` paired with random counts.
fn generate_sized_counts(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let sizes: Vec<f64> = (1..=size).map(|i| i as f64).collect();
    (sizes, generate_counts(size, seed))
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in [100, 1_000, 10_000, 100_000] {
        let counts = generate_counts(size, 42);
        let (sizes, sized_counts) = generate_sized_counts(size, 42);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("by_rank", size), &counts, |b, counts| {
            b.iter(|| by_rank(black_box(counts)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("by_size", size),
            &(sizes, sized_counts),
            |b, (sizes, counts)| b.iter(|| by_size(black_box(sizes), black_box(counts)).unwrap()),
        );
    }

    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("events");
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        let events = generate_zipf_events(size, 1_000.0, 1.1, 7);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rank", size), &events, |b, events| {
            b.iter(|| {
                Zipf::new()
                    .adapter(ByRank)
                    .fit_events::<_, f64, _>(black_box(events.iter().copied()))
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("size", size), &events, |b, events| {
            b.iter(|| {
                Zipf::new()
                    .adapter(BySize)
                    .fit_events::<_, f64, _>(black_box(events.iter().copied()))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_degenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("degenerate");

    let uniform = vec![25.0; 10_000];
    let single = vec![25.0];

    group.bench_function("uniform", |b| {
        b.iter(|| by_rank(black_box(&uniform)).unwrap())
    });
    group.bench_function("single", |b| {
        b.iter(|| by_rank(black_box(&single)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_events, bench_degenerate);

criterion_main!(benches);
