//! Property tests for the lineup enumeration.

use std::collections::HashSet;

use proptest::prelude::*;

use lineuplab_core::domain::{Player, PlayerGroup, Roster};
use lineuplab_runner::{LineupGenerator, LineupPolicy};

fn roster_of(n: usize) -> Roster {
    let players = (0..n)
        .map(|i| {
            let group = if i % 2 == 0 {
                PlayerGroup::A
            } else {
                PlayerGroup::B
            };
            Player::new(format!("p{i}"), group, [3, 1, 2, 1, 0, 1]).unwrap()
        })
        .collect();
    Roster::new(players)
}

fn factorial(n: u64) -> u64 {
    (2..=n).product::<u64>().max(1)
}

proptest! {
    #[test]
    fn standard_enumeration_is_exactly_n_factorial_distinct_orders(n in 1usize..=5) {
        let mut generator = LineupGenerator::new(LineupPolicy::Standard);
        generator.set_roster(roster_of(n)).unwrap();

        let mut ids = HashSet::new();
        let mut produced = 0u64;
        while let Some(lineup) = generator.next_lineup() {
            prop_assert!(ids.insert(lineup.id()), "duplicate lineup produced");
            produced += 1;
        }
        prop_assert_eq!(produced, factorial(n as u64));
        prop_assert!(generator.next_lineup().is_none());
    }

    #[test]
    fn alternating_enumeration_matches_the_cross_product(n in 2usize..=5) {
        let mut generator = LineupGenerator::new(LineupPolicy::Alternating);
        generator.set_roster(roster_of(n)).unwrap();

        let size_a = (n + 1) / 2;
        let size_b = n / 2;
        let expected = factorial(size_a as u64) * factorial(size_b as u64);

        let mut ids = HashSet::new();
        let mut produced = 0u64;
        while let Some(lineup) = generator.next_lineup() {
            prop_assert!(ids.insert(lineup.id()), "duplicate lineup produced");
            produced += 1;
        }
        prop_assert_eq!(produced, expected);
    }
}
