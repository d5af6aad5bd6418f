//! Performance benchmarks for the Euler stepping loop
//!
//! The loop is O(T/dt) steps with one rate evaluation each, so time should
//! scale linearly with the number of grid points and be essentially
//! identical across the three rate laws.
//!
//! ```bash
//! cargo bench --bench euler_performance
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kinet_rs::kinetics::ReactionModel;
use kinet_rs::simulation::{EulerSimulator, SimulationConfig};

fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_laws");
    let simulator = EulerSimulator::new();

    let configs = [
        ("first_order", SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 10.0, 0.001)),
        ("second_order", SimulationConfig::new(ReactionModel::SecondOrder, 1.0, 1.0, 10.0, 0.001)),
        ("reversible", SimulationConfig::reversible(1.0, 1.0, 1.0, 10.0, 0.001)),
    ];

    for (name, config) in configs {
        group.bench_function(name, |b| {
            b.iter(|| simulator.run(black_box(&config)).unwrap())
        });
    }

    group.finish();
}

fn bench_grid_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_scaling");
    let simulator = EulerSimulator::new();

    // Halving dt doubles the step count; time should double too.
    for steps in [1_000u64, 10_000, 100_000] {
        let dt = 10.0 / steps as f64;
        let config = SimulationConfig::new(ReactionModel::FirstOrder, 1.0, 1.0, 10.0, dt);

        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, config| {
            b.iter(|| simulator.run(black_box(config)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_models, bench_grid_scaling);
criterion_main!(benches);
