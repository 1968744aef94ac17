//! Criterion benchmarks for the game simulator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lineuplab_core::domain::{Outcome, Player, PlayerGroup};
use lineuplab_core::lineup::BattingLineup;
use lineuplab_core::sim::{GameSimulator, SimConfig};

fn bench_lineup() -> BattingLineup {
    // League-average-ish batter: mostly outs, some singles, a few extra-base hits.
    let mut counts = [0u64; 6];
    counts[Outcome::Out.index()] = 13;
    counts[Outcome::Walk.index()] = 2;
    counts[Outcome::Single.index()] = 4;
    counts[Outcome::Double.index()] = 1;
    counts[Outcome::Triple.index()] = 1;
    counts[Outcome::HomeRun.index()] = 1;

    let players = (0..10)
        .map(|i| Player::new(format!("batter{i}"), PlayerGroup::A, counts).unwrap())
        .collect();
    BattingLineup::standard(players).unwrap()
}

fn bench_run_game(c: &mut Criterion) {
    let sim = GameSimulator::new(SimConfig::default());
    let mut lineup = bench_lineup();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("run_game_6_innings", |b| {
        b.iter(|| sim.run_game(black_box(&mut lineup), &mut rng))
    });
}

fn bench_run_series(c: &mut Criterion) {
    let sim = GameSimulator::new(SimConfig::default());
    let mut lineup = bench_lineup();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("run_series_1000_games", |b| {
        b.iter(|| sim.run_series(black_box(&mut lineup), 1000, &mut rng))
    });
}

criterion_group!(benches, bench_run_game, bench_run_series);
criterion_main!(benches);
