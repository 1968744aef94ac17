//! Search orchestration — enumerate, simulate, keep the best.
//!
//! The driver pulls lineups from the generator in batches, scores each
//! batch (in parallel when configured), and folds the scores into a
//! running best plus a bounded leaderboard. Each lineup's RNG is derived
//! from the master seed and the lineup's enumeration ordinal, so results
//! are identical whether a batch is scored serially or across threads.

use std::time::Instant;

use chrono::NaiveDateTime;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lineuplab_core::lineup::{BattingLineup, LineupDescription, LineupId};
use lineuplab_core::rng::RngHierarchy;
use lineuplab_core::sim::GameSimulator;

use crate::config::{ConfigError, SearchConfig};
use crate::fitness;
use crate::generator::{GeneratorError, LineupGenerator};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::policy::LineupPolicy;

/// Lineups pulled from the generator per scoring pass. Bounds memory for
/// rosters whose enumeration does not fit in it.
const BATCH_SIZE: usize = 512;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Everything a finished search produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub policy: LineupPolicy,
    pub config: SearchConfig,
    pub lineups_evaluated: u64,
    pub best_lineup: LineupDescription,
    pub best_lineup_id: LineupId,
    pub best_mean_runs: f64,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub elapsed_secs: f64,
    pub completed_at: NaiveDateTime,
}

/// Run a full search to exhaustion.
pub fn run_search(config: &SearchConfig) -> Result<SearchReport, SearchError> {
    run_search_with_progress(config, |_, _| {})
}

/// Like [`run_search`], reporting `(evaluated, total)` after each batch.
/// `total` is `None` when the enumeration size overflows a u64.
pub fn run_search_with_progress(
    config: &SearchConfig,
    mut progress: impl FnMut(u64, Option<u64>),
) -> Result<SearchReport, SearchError> {
    config.validate()?;
    let started = Instant::now();

    let mut generator = LineupGenerator::new(config.policy);
    generator.load_roster(&config.stats_path)?;

    let simulator = GameSimulator::new(config.sim_config());
    let hierarchy = RngHierarchy::new(config.seed);

    let mut leaderboard = Leaderboard::new(config.leaderboard_size);
    let mut best_score = f64::NEG_INFINITY;
    let mut best: Option<(LineupDescription, LineupId)> = None;
    let mut evaluated: u64 = 0;

    loop {
        let mut batch: Vec<BattingLineup> = Vec::with_capacity(BATCH_SIZE);
        while batch.len() < BATCH_SIZE {
            match generator.next_lineup() {
                Some(lineup) => batch.push(lineup),
                None => break,
            }
        }
        if batch.is_empty() {
            break;
        }

        let base = evaluated;
        let score_one = |(i, mut lineup): (usize, BattingLineup)| {
            let ordinal = base + i as u64;
            let mut rng = hierarchy.rng_for_lineup(ordinal);
            let mean_runs = simulator.run_series(&mut lineup, config.games_per_lineup, &mut rng);
            (ordinal, lineup, mean_runs)
        };
        let scored: Vec<(u64, BattingLineup, f64)> = if config.parallel {
            batch.into_par_iter().enumerate().map(score_one).collect()
        } else {
            batch.into_iter().enumerate().map(score_one).collect()
        };

        for (ordinal, lineup, mean_runs) in scored {
            evaluated += 1;
            let description = lineup.describe();
            let lineup_id = lineup.id();
            if fitness::is_better(mean_runs, best_score) {
                best_score = mean_runs;
                best = Some((description.clone(), lineup_id.clone()));
            }
            leaderboard.insert(LeaderboardEntry {
                description,
                lineup_id,
                mean_runs,
                ordinal,
                recorded_at: chrono::Utc::now().naive_utc(),
            });
        }
        progress(evaluated, generator.total());
    }

    // Load validation guarantees at least one lineup, so a best exists.
    let (best_lineup, best_lineup_id) =
        best.expect("a validated roster produces at least one lineup");

    Ok(SearchReport {
        policy: config.policy,
        config: config.clone(),
        lineups_evaluated: evaluated,
        best_lineup,
        best_lineup_id,
        best_mean_runs: best_score,
        leaderboard: leaderboard.into_entries(),
        elapsed_secs: started.elapsed().as_secs_f64(),
        completed_at: chrono::Utc::now().naive_utc(),
    })
}
