//! Batting lineups — cyclic batter orderings under a policy.
//!
//! A lineup is a tagged variant over ordering policies, dispatched through
//! one capability surface: `next_batter`, `reset`, `describe`, and the
//! optional `random_swap`. Each variant owns only its cursor state; the
//! arranged players are fixed at construction, and `reset` restores the
//! cursors without reallocating anything.

mod alternating;
mod standard;

pub use alternating::AlternatingLineup;
pub use standard::StandardLineup;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Player;

/// Content-addressable lineup identifier (hex BLAKE3 of the description).
pub type LineupId = String;

/// Errors from lineup construction and optional capabilities.
#[derive(Debug, Error)]
pub enum LineupError {
    #[error("a lineup requires at least one player")]
    EmptyLineup,
    #[error(
        "alternating lineup requires at least one player in each group \
         (group A: {group_a}, group B: {group_b})"
    )]
    EmptyGroup { group_a: usize, group_b: usize },
    #[error("{variant} lineup does not support {operation}")]
    Unsupported {
        variant: &'static str,
        operation: &'static str,
    },
}

/// Stable, cursor-independent representation of a lineup for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum LineupDescription {
    /// A single ordered batting list.
    Ordered { order: Vec<String> },
    /// Two group lists; at-bats alternate A, B, A, B, ...
    Grouped {
        group_a: Vec<String>,
        group_b: Vec<String>,
    },
}

/// A cyclic batting order.
///
/// `next_batter` never terminates on its own: after the last position it
/// wraps around, which is how a fixed-innings game can end mid-cycle.
#[derive(Debug, Clone)]
pub enum BattingLineup {
    Standard(StandardLineup),
    Alternating(AlternatingLineup),
}

impl BattingLineup {
    /// Fixed-permutation lineup in the given order.
    pub fn standard(players: Vec<Player>) -> Result<BattingLineup, LineupError> {
        StandardLineup::new(players).map(BattingLineup::Standard)
    }

    /// Strictly alternating lineup over two non-empty groups.
    pub fn alternating(
        group_a: Vec<Player>,
        group_b: Vec<Player>,
    ) -> Result<BattingLineup, LineupError> {
        AlternatingLineup::new(group_a, group_b).map(BattingLineup::Alternating)
    }

    /// The next batter under this lineup's policy; advances the cursor(s).
    pub fn next_batter(&mut self) -> &Player {
        match self {
            BattingLineup::Standard(l) => l.next_batter(),
            BattingLineup::Alternating(l) => l.next_batter(),
        }
    }

    /// Restore every cursor to its initial position so the same lineup can
    /// be replayed for a fresh game.
    pub fn reset(&mut self) {
        match self {
            BattingLineup::Standard(l) => l.reset(),
            BattingLineup::Alternating(l) => l.reset(),
        }
    }

    /// Cursor-independent description for reporting. Never mutates state.
    pub fn describe(&self) -> LineupDescription {
        match self {
            BattingLineup::Standard(l) => l.describe(),
            BattingLineup::Alternating(l) => l.describe(),
        }
    }

    /// A new lineup with two randomly chosen positions exchanged.
    ///
    /// Only the standard variant supports this. The alternating variant
    /// returns [`LineupError::Unsupported`] — an explicit, branchable
    /// failure rather than a silent no-op, so a caller probing for the
    /// capability can tell the difference.
    pub fn random_swap<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<BattingLineup, LineupError> {
        match self {
            BattingLineup::Standard(l) => Ok(BattingLineup::Standard(l.random_swap(rng))),
            BattingLineup::Alternating(_) => Err(LineupError::Unsupported {
                variant: "alternating",
                operation: "random_swap",
            }),
        }
    }

    /// Content id of this lineup: BLAKE3 over the serialized description.
    ///
    /// Two lineup objects arranging the same players the same way share an
    /// id, which is what leaderboard deduplication keys on.
    pub fn id(&self) -> LineupId {
        let json = serde_json::to_string(&self.describe())
            .expect("LineupDescription serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
