//! Benchmarks for the Gridlife evaluator.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gridlife::{
    engine::Simulation,
    schema::{Boundary, EngineConfig},
};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for size in [64, 128, 256, 512, 1024] {
        let config = EngineConfig {
            width: size,
            height: size,
            ..EngineConfig::default()
        };

        let mut sim = Simulation::with_rng_seed(config, 42).unwrap();
        sim.randomize(0.5).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut sim).step();
                });
            },
        );
    }

    group.finish();
}

fn bench_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary");

    for (name, boundary) in [
        ("wrap", Boundary::Wrap),
        ("walls", Boundary::Walls { alive: false }),
    ] {
        let config = EngineConfig {
            width: 256,
            height: 256,
            boundary,
            ..EngineConfig::default()
        };

        let mut sim = Simulation::with_rng_seed(config, 42).unwrap();
        sim.randomize(0.5).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, _| {
            b.iter(|| {
                black_box(&mut sim).step();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_boundaries);
criterion_main!(benches);
