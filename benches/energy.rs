//! Mechanics benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kresling_sim::config::UnitParameters;
use kresling_sim::geometry::{FoldState, KreslingUnit, UnitMesh};

fn bench_energy(c: &mut Criterion) {
    let unit = KreslingUnit::default();

    c.bench_function("energy", |b| {
        b.iter(|| unit.energy(black_box(2.0), black_box(0.4)))
    });
}

fn bench_equilibrium_twist(c: &mut Criterion) {
    let unit = KreslingUnit::default();

    c.bench_function("equilibrium_twist", |b| {
        b.iter(|| unit.equilibrium_twist_angle(black_box(2.0)))
    });
}

fn bench_landscape_sampling(c: &mut Criterion) {
    let unit = KreslingUnit::default();

    c.bench_function("landscape_101_points", |b| {
        b.iter(|| unit.energy_landscape(0.0, 4.0, 100).count())
    });
}

fn bench_stable_states_uncached(c: &mut Criterion) {
    let params = UnitParameters::default();

    c.bench_function("stable_states_uncached", |b| {
        b.iter(|| {
            // Fresh unit per iteration so the per-instance cache is cold
            let unit = KreslingUnit::new(black_box(&params)).unwrap();
            unit.stable_states()
        })
    });
}

fn bench_mesh_generation(c: &mut Criterion) {
    let unit = KreslingUnit::default();
    let state = FoldState::new(2.0, 0.4);

    c.bench_function("mesh_generation", |b| {
        b.iter(|| UnitMesh::from_unit(black_box(&unit), black_box(state)))
    });
}

criterion_group!(
    benches,
    bench_energy,
    bench_equilibrium_twist,
    bench_landscape_sampling,
    bench_stable_states_uncached,
    bench_mesh_generation
);
criterion_main!(benches);
