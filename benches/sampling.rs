use criterion::{black_box, criterion_group, criterion_main, Criterion};
use land_sim::simulation::exact::hypergeometric;
use land_sim::simulation::sampler::{simulate, Sampler};
use land_sim::simulation::{Deck, SimParams};

fn benchmark_simulate_100k(c: &mut Criterion) {
    c.bench_function("simulate_100k_hands", |b| {
        b.iter(|| simulate(black_box(100), black_box(35), black_box(7), black_box(100_000), Some(42)))
    });
}

fn benchmark_parallel_1m(c: &mut Criterion) {
    let params = SimParams {
        trials: 1_000_000,
        seed: Some(42),
        ..SimParams::default()
    }
    .validate()
    .expect("valid parameters");

    c.bench_function("parallel_1m_hands", |b| {
        b.iter(|| Sampler::new(black_box(params)).parallel(true).run())
    });
}

fn benchmark_exact(c: &mut Criterion) {
    c.bench_function("hypergeometric_100_35_7", |b| {
        b.iter(|| hypergeometric(black_box(Deck { size: 100, lands: 35 }), black_box(7)))
    });
}

criterion_group!(benches, benchmark_simulate_100k, benchmark_parallel_1m, benchmark_exact);
criterion_main!(benches);
