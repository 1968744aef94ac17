//! Player — immutable identity plus a categorical at-bat distribution.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use thiserror::Error;

use super::outcome::Outcome;

/// Which alternation group a player belongs to.
///
/// Coed-league rosters alternate by gender; the engine only cares that
/// there are two disjoint groups, so they are kept as neutral tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerGroup {
    A,
    B,
}

impl PlayerGroup {
    /// Parse a roster-file group token ("a"/"b", or the gender markers
    /// "m"/"f" found in exported rosters).
    pub fn from_token(token: &str) -> Option<PlayerGroup> {
        match token.trim().to_ascii_lowercase().as_str() {
            "a" | "m" | "male" => Some(PlayerGroup::A),
            "b" | "f" | "female" => Some(PlayerGroup::B),
            _ => None,
        }
    }
}

/// Errors from player construction.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("player '{0}' has no recorded plate appearances")]
    NoPlateAppearances(String),
}

/// A roster member with a fixed probability distribution over at-bat
/// outcomes, derived from per-outcome appearance counts.
///
/// The distribution is read-only after construction; sampling requires only
/// a caller-supplied RNG, so a `Player` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    group: PlayerGroup,
    counts: [u64; Outcome::ALL.len()],
    dist: WeightedIndex<u64>,
}

impl Player {
    /// Build a player from per-outcome counts (indexed as [`Outcome::ALL`]).
    ///
    /// Counts need not be normalized. Fails if every count is zero — a
    /// player with no plate appearances has no distribution to sample.
    pub fn new(
        name: impl Into<String>,
        group: PlayerGroup,
        counts: [u64; Outcome::ALL.len()],
    ) -> Result<Player, PlayerError> {
        let name = name.into();
        let dist = WeightedIndex::new(counts)
            .map_err(|_| PlayerError::NoPlateAppearances(name.clone()))?;
        Ok(Player {
            name,
            group,
            counts,
            dist,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> PlayerGroup {
        self.group
    }

    pub fn counts(&self) -> &[u64; Outcome::ALL.len()] {
        &self.counts
    }

    /// One independent categorical draw from this player's distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        Outcome::ALL[self.dist.sample(rng)]
    }

    /// Normalized probability of a given outcome, for reporting.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        let total: u64 = self.counts.iter().sum();
        self.counts[outcome.index()] as f64 / total as f64
    }
}
