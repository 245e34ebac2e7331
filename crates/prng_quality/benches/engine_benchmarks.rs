//! Criterion benchmarks for prng_quality.
//!
//! Benchmarks cover:
//! - Raw engine throughput per kind
//! - Exact vs approximate normal sampling
//! - Seed-correlation and lattice analyzers at their reference sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prng_quality::correlation::SeedCorrelationAnalyzer;
use prng_quality::engine::{EngineKind, EngineRegistry};
use prng_quality::lattice::SpectralLatticeAnalyzer;
use prng_quality::sampler::{generate_series, SamplingStrategy};

/// Raw output throughput.
fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_next_raw");

    for kind in EngineKind::ALL {
        group.bench_with_input(BenchmarkId::new(kind.name(), 10_000), &kind, |b, &kind| {
            let mut engine = EngineRegistry::seeded(kind, 42);
            let mut buffer = vec![0u64; 10_000];
            b.iter(|| {
                engine.fill_raw(&mut buffer);
                black_box(buffer[buffer.len() - 1])
            });
        });
    }

    group.finish();
}

/// Normal sampling strategies.
fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_sampling");

    for strategy in SamplingStrategy::ALL {
        for n_samples in [1_000, 100_000] {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), n_samples),
                &n_samples,
                |b, &n| {
                    let mut engine = EngineRegistry::seeded(EngineKind::Xoshiro256PlusPlus, 3);
                    b.iter(|| black_box(generate_series(&mut engine, strategy, n)));
                },
            );
        }
    }

    group.finish();
}

/// Reference-size analyses.
fn bench_analyzers(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzers");
    group.sample_size(30);

    for kind in [EngineKind::Minstd, EngineKind::Mersenne] {
        group.bench_with_input(BenchmarkId::new("seed_correlation", kind), &kind, |b, &kind| {
            let analyzer = SeedCorrelationAnalyzer::new();
            b.iter(|| black_box(analyzer.build_matrix(kind, 160, 200)));
        });
    }

    group.bench_function("spectral_lattice/randu", |b| {
        let analyzer = SpectralLatticeAnalyzer::new();
        b.iter(|| black_box(analyzer.build_lattice(EngineKind::Randu, 1000)));
    });

    group.finish();
}

criterion_group!(benches, bench_engines, bench_samplers, bench_analyzers);
criterion_main!(benches);
