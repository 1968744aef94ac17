//! Integration tests for lineup cycling across simulated games.

use lineuplab_core::domain::{Outcome, Player, PlayerGroup};
use lineuplab_core::lineup::{BattingLineup, LineupDescription};
use lineuplab_core::sim::{GameSimulator, SimConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn hitter(name: &str, group: PlayerGroup) -> Player {
    let mut counts = [0u64; 6];
    counts[Outcome::Out.index()] = 1;
    counts[Outcome::Single.index()] = 1;
    Player::new(name, group, counts).unwrap()
}

#[test]
fn simulator_resets_lineup_between_games() {
    // After an odd number of at-bats the cursor sits mid-order; the next
    // game must still open with the leadoff batter. Verify by replaying
    // the same game twice with identical RNG streams.
    let players: Vec<Player> = ["a", "b", "c", "d"]
        .iter()
        .map(|n| hitter(n, PlayerGroup::A))
        .collect();
    let mut lineup = BattingLineup::standard(players).unwrap();
    let sim = GameSimulator::new(SimConfig::default());

    let mut rng1 = StdRng::seed_from_u64(5);
    let first = sim.run_game(&mut lineup, &mut rng1);

    // Same lineup object, fresh identical stream: identical game.
    let mut rng2 = StdRng::seed_from_u64(5);
    let second = sim.run_game(&mut lineup, &mut rng2);
    assert_eq!(first, second);
}

#[test]
fn alternating_lineup_survives_a_full_series() {
    let group_a = vec![hitter("a1", PlayerGroup::A), hitter("a2", PlayerGroup::A)];
    let group_b = vec![
        hitter("b1", PlayerGroup::B),
        hitter("b2", PlayerGroup::B),
        hitter("b3", PlayerGroup::B),
    ];
    let mut lineup = BattingLineup::alternating(group_a, group_b).unwrap();

    let sim = GameSimulator::new(SimConfig::default());
    let mut rng = StdRng::seed_from_u64(21);
    let mean = sim.run_series(&mut lineup, 100, &mut rng);
    assert!(mean.is_finite());

    // The series leaves the object replayable: reset + describe intact.
    match lineup.describe() {
        LineupDescription::Grouped { group_a, group_b } => {
            assert_eq!(group_a, vec!["a1", "a2"]);
            assert_eq!(group_b, vec!["b1", "b2", "b3"]);
        }
        LineupDescription::Ordered { .. } => panic!("expected grouped description"),
    }
    lineup.reset();
    assert_eq!(lineup.next_batter().name(), "a1");
}

#[test]
fn description_json_is_stable_for_reporting() {
    let players: Vec<Player> = ["kim", "lee"].iter().map(|n| hitter(n, PlayerGroup::A)).collect();
    let lineup = BattingLineup::standard(players).unwrap();
    let json = serde_json::to_string(&lineup.describe()).unwrap();
    assert_eq!(json, r#"{"policy":"ordered","order":["kim","lee"]}"#);

    let back: LineupDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lineup.describe());
}
