//! Game simulation — inning-by-inning Monte Carlo scoring of a lineup.
//!
//! State machine per game:
//!
//! ```text
//! INNING_START → AT_BAT → (OUT | ADVANCE_RUNNERS[+SCORE])
//!             → (repeat AT_BAT | INNING_END)
//!             → (repeat INNING_START | GAME_END)
//! ```
//!
//! An inning ends at three outs (discarding base state) or at the
//! runs-per-inning guard; the game ends after the configured innings.

mod bases;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::Outcome;
use crate::lineup::BattingLineup;

use bases::BaseState;

/// Outs that retire the side.
pub const OUTS_PER_INNING: u32 = 3;

/// Simulation parameters, passed explicitly rather than read from ambient
/// globals so tests and parallel workers can each carry their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Innings per simulated game. Zero innings scores zero runs.
    pub innings_per_game: u32,
    /// Guard that retires the side after this many runs in one inning.
    /// Without it a lineup that never records an out bats forever.
    pub max_runs_per_inning: u32,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            innings_per_game: 6,
            max_runs_per_inning: 100,
        }
    }
}

/// Plays out full games for a lineup and aggregates mean runs.
///
/// All per-game state (outs, bases, runs) lives on the stack of `run_game`
/// and dies with it; the only state that persists across games is the
/// lineup's cursor, which `run_game` resets up front.
#[derive(Debug, Clone, Copy)]
pub struct GameSimulator {
    config: SimConfig,
}

impl GameSimulator {
    pub fn new(config: SimConfig) -> GameSimulator {
        GameSimulator { config }
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    /// One full game; returns total runs scored.
    ///
    /// Resets the lineup first, so the same lineup object can be replayed
    /// game after game.
    pub fn run_game<R: Rng + ?Sized>(&self, lineup: &mut BattingLineup, rng: &mut R) -> u32 {
        lineup.reset();
        let mut total_runs = 0;
        for _ in 0..self.config.innings_per_game {
            total_runs += self.run_inning(lineup, rng);
        }
        total_runs
    }

    fn run_inning<R: Rng + ?Sized>(&self, lineup: &mut BattingLineup, rng: &mut R) -> u32 {
        let mut outs = 0;
        let mut runs = 0;
        let mut bases = BaseState::default();
        while outs < OUTS_PER_INNING && runs < self.config.max_runs_per_inning {
            let outcome = lineup.next_batter().sample(rng);
            match outcome {
                Outcome::Out => outs += 1,
                hit => runs += bases.advance(hit.total_bases()),
            }
        }
        runs
    }

    /// Mean runs over `games` independent games — the lineup's fitness
    /// score. Zero games yields 0.0.
    pub fn run_series<R: Rng + ?Sized>(
        &self,
        lineup: &mut BattingLineup,
        games: u32,
        rng: &mut R,
    ) -> f64 {
        if games == 0 {
            return 0.0;
        }
        let mut runs: u64 = 0;
        for _ in 0..games {
            runs += u64::from(self.run_game(lineup, rng));
        }
        runs as f64 / f64::from(games)
    }
}
