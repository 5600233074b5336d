use criterion::{criterion_group, criterion_main, Criterion};
use outbreak::population::Population;
use outbreak::runner::{run_simulation, TimeSeries, DEFAULT_DISCOVERY_EFFICIENCY};
use rand::rngs::StdRng;
use rand::SeedableRng;

static POPULATION: usize = 2000;
static SEED: u64 = 123;
static NDAYS: u32 = 120;

fn epidemic_run() -> TimeSeries {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut population = Population::new(POPULATION, 5, &mut rng).expect("valid population");
    run_simulation(
        &mut population,
        NDAYS,
        DEFAULT_DISCOVERY_EFFICIENCY,
        0,
        &mut rng,
    )
    .expect("simulation runs to completion")
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("120-day epidemic over 2000 people", |bencher| {
        bencher.iter_with_large_drop(epidemic_run)
    });
}

criterion_group!(outbreak_benches, criterion_benchmark);
criterion_main!(outbreak_benches);
