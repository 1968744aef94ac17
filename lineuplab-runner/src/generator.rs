//! Lineup enumeration — exhaustive, duplicate-free orders under a policy.
//!
//! The generator is the sole owner of enumeration order and progress. It
//! produces each distinct lineup exactly once and signals exhaustion by
//! returning `None` — forever, on every subsequent call.
//!
//! Standard policy: every permutation of the roster, via iterative Heap's
//! algorithm. Rotation-equivalent orders are NOT collapsed: a game ends
//! mid-cycle after a fixed number of innings, so the leadoff position
//! changes the score distribution.
//!
//! Alternating policy: the cross product of group-A orders and group-B
//! orders, |A|! x |B|! lineups in total.

use std::path::Path;

use thiserror::Error;

use lineuplab_core::domain::{Player, Roster};
use lineuplab_core::lineup::{BattingLineup, LineupError};

use crate::policy::LineupPolicy;
use crate::roster_loader::{self, LoadError};

/// Errors from generator setup. Enumeration itself cannot fail; it only
/// ends.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Lineup(#[from] LineupError),
}

/// Iterative Heap's algorithm over an owned player order.
///
/// The first yield is the order as given; each later yield differs from
/// its predecessor by a single swap. Yields every permutation exactly
/// once, then `None` forever.
#[derive(Debug, Clone)]
struct HeapPermutations {
    items: Vec<Player>,
    counters: Vec<usize>,
    depth: usize,
    first: bool,
    done: bool,
}

impl HeapPermutations {
    fn new(items: Vec<Player>) -> HeapPermutations {
        let done = items.is_empty();
        let counters = vec![0; items.len()];
        HeapPermutations {
            items,
            counters,
            depth: 1,
            first: true,
            done,
        }
    }

    fn next_order(&mut self) -> Option<Vec<Player>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.items.clone());
        }
        while self.depth < self.items.len() {
            if self.counters[self.depth] < self.depth {
                if self.depth % 2 == 0 {
                    self.items.swap(0, self.depth);
                } else {
                    self.items.swap(self.counters[self.depth], self.depth);
                }
                self.counters[self.depth] += 1;
                self.depth = 1;
                return Some(self.items.clone());
            }
            self.counters[self.depth] = 0;
            self.depth += 1;
        }
        self.done = true;
        None
    }
}

#[derive(Debug)]
enum Enumeration {
    Standard(HeapPermutations),
    Alternating {
        heap_a: HeapPermutations,
        current_a: Option<Vec<Player>>,
        heap_b: HeapPermutations,
        // Pristine group-B order, used to restart heap_b per A order.
        group_b: Vec<Player>,
    },
}

/// Produces the lazy sequence of distinct lineups for a loaded roster.
///
/// The policy is fixed at construction; the roster is attached exactly
/// once via [`load_roster`](LineupGenerator::load_roster) (or
/// [`set_roster`](LineupGenerator::set_roster) for pre-loaded rosters)
/// before enumeration begins.
#[derive(Debug)]
pub struct LineupGenerator {
    policy: LineupPolicy,
    state: Option<Enumeration>,
    produced: u64,
    total: Option<u64>,
}

impl LineupGenerator {
    pub fn new(policy: LineupPolicy) -> LineupGenerator {
        LineupGenerator {
            policy,
            state: None,
            produced: 0,
            total: None,
        }
    }

    pub fn policy(&self) -> LineupPolicy {
        self.policy
    }

    /// Load the roster from a stats file or directory. Must be called
    /// exactly once, before [`next_lineup`](LineupGenerator::next_lineup).
    ///
    /// A failed load leaves the generator unloaded, never half-loaded.
    pub fn load_roster(&mut self, source: &Path) -> Result<(), GeneratorError> {
        let roster = roster_loader::load_roster(source)?;
        self.set_roster(roster)
    }

    /// Attach an already-loaded roster. Same exactly-once contract as
    /// [`load_roster`](LineupGenerator::load_roster).
    ///
    /// # Panics
    ///
    /// Panics if a roster was already attached; loading twice is caller
    /// misuse, not a recoverable condition.
    pub fn set_roster(&mut self, roster: Roster) -> Result<(), GeneratorError> {
        assert!(
            self.state.is_none(),
            "load_roster() may only be called once per generator"
        );
        match self.policy {
            LineupPolicy::Standard => {
                if roster.is_empty() {
                    return Err(LineupError::EmptyLineup.into());
                }
                self.total = factorial(roster.len());
                self.state = Some(Enumeration::Standard(HeapPermutations::new(
                    roster.players().to_vec(),
                )));
            }
            LineupPolicy::Alternating => {
                let (group_a, group_b) = roster.split_groups();
                if group_a.is_empty() || group_b.is_empty() {
                    return Err(LineupError::EmptyGroup {
                        group_a: group_a.len(),
                        group_b: group_b.len(),
                    }
                    .into());
                }
                self.total = factorial(group_a.len())
                    .zip(factorial(group_b.len()))
                    .and_then(|(a, b)| a.checked_mul(b));
                self.state = Some(Enumeration::Alternating {
                    heap_a: HeapPermutations::new(group_a),
                    current_a: None,
                    heap_b: HeapPermutations::new(group_b.clone()),
                    group_b,
                });
            }
        }
        Ok(())
    }

    /// The next not-yet-produced lineup, or `None` once every order for
    /// the policy has been produced. Exhaustion is idempotent: every call
    /// after the first `None` also returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if called before a roster is loaded — enumerating an
    /// unloaded generator is a programming error, not a recoverable one.
    pub fn next_lineup(&mut self) -> Option<BattingLineup> {
        let state = self
            .state
            .as_mut()
            .expect("next_lineup() called before load_roster()");
        let lineup = match state {
            Enumeration::Standard(heap) => heap.next_order().map(|order| {
                BattingLineup::standard(order).expect("roster validated non-empty at load")
            }),
            Enumeration::Alternating {
                heap_a,
                current_a,
                heap_b,
                group_b,
            } => loop {
                if current_a.is_none() {
                    *current_a = Some(heap_a.next_order()?);
                }
                if let Some(order_b) = heap_b.next_order() {
                    let order_a = current_a.clone()?;
                    break Some(
                        BattingLineup::alternating(order_a, order_b)
                            .expect("groups validated non-empty at load"),
                    );
                }
                // Group B exhausted for this A order: advance A, restart B.
                *current_a = Some(heap_a.next_order()?);
                *heap_b = HeapPermutations::new(group_b.clone());
            },
        };
        if lineup.is_some() {
            self.produced += 1;
        }
        lineup
    }

    /// Total lineups this policy will produce for the loaded roster, when
    /// it fits in a u64 (none before load, or for rosters past 20 players).
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Lineups produced so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }
}

fn factorial(n: usize) -> Option<u64> {
    let mut acc: u64 = 1;
    for i in 2..=n as u64 {
        acc = acc.checked_mul(i)?;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineuplab_core::domain::PlayerGroup;
    use std::collections::HashSet;

    fn player(name: &str, group: PlayerGroup) -> Player {
        Player::new(name, group, [1, 0, 0, 0, 0, 0]).unwrap()
    }

    fn roster(names_a: &[&str], names_b: &[&str]) -> Roster {
        let mut players: Vec<Player> =
            names_a.iter().map(|n| player(n, PlayerGroup::A)).collect();
        players.extend(names_b.iter().map(|n| player(n, PlayerGroup::B)));
        Roster::new(players)
    }

    fn drain_ids(generator: &mut LineupGenerator) -> Vec<String> {
        let mut ids = Vec::new();
        while let Some(lineup) = generator.next_lineup() {
            ids.push(lineup.id());
        }
        ids
    }

    #[test]
    fn standard_enumerates_all_permutations_without_duplicates() {
        let mut generator = LineupGenerator::new(LineupPolicy::Standard);
        generator.set_roster(roster(&["a", "b", "c", "d"], &[])).unwrap();
        assert_eq!(generator.total(), Some(24));

        let ids = drain_ids(&mut generator);
        assert_eq!(ids.len(), 24);
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), 24);
        assert_eq!(generator.produced(), 24);
    }

    #[test]
    fn single_player_roster_yields_one_lineup() {
        let mut generator = LineupGenerator::new(LineupPolicy::Standard);
        generator.set_roster(roster(&["solo"], &[])).unwrap();
        assert_eq!(generator.total(), Some(1));
        assert_eq!(drain_ids(&mut generator).len(), 1);
    }

    #[test]
    fn alternating_enumerates_the_cross_product() {
        let mut generator = LineupGenerator::new(LineupPolicy::Alternating);
        generator
            .set_roster(roster(&["a1", "a2"], &["b1", "b2", "b3"]))
            .unwrap();
        assert_eq!(generator.total(), Some(12)); // 2! * 3!

        let ids = drain_ids(&mut generator);
        assert_eq!(ids.len(), 12);
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut generator = LineupGenerator::new(LineupPolicy::Standard);
        generator.set_roster(roster(&["a", "b"], &[])).unwrap();
        assert_eq!(drain_ids(&mut generator).len(), 2);

        assert!(generator.next_lineup().is_none());
        assert!(generator.next_lineup().is_none());
        assert_eq!(generator.produced(), 2);
    }

    #[test]
    fn alternating_with_one_empty_group_fails_at_load() {
        let mut generator = LineupGenerator::new(LineupPolicy::Alternating);
        let err = generator.set_roster(roster(&["a1"], &[])).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::Lineup(LineupError::EmptyGroup { .. })
        ));
        // A failed load leaves the generator unloaded, not half-loaded.
        assert!(generator.state.is_none());
    }

    #[test]
    #[should_panic(expected = "next_lineup() called before load_roster()")]
    fn enumerating_before_load_is_fatal() {
        let mut generator = LineupGenerator::new(LineupPolicy::Standard);
        generator.next_lineup();
    }

    #[test]
    #[should_panic(expected = "load_roster() may only be called once")]
    fn loading_twice_is_fatal() {
        let mut generator = LineupGenerator::new(LineupPolicy::Standard);
        generator.set_roster(roster(&["a"], &[])).unwrap();
        generator.set_roster(roster(&["b"], &[])).unwrap();
    }

    #[test]
    fn factorial_overflow_reports_unknown_total() {
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }
}
