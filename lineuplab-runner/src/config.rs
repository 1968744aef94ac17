//! Search configuration — every knob a run needs, with sane defaults.
//!
//! Configs deserialize from TOML with defaults for every field except the
//! stats path, so a minimal file is just `stats_path = "stats/"`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lineuplab_core::sim::SimConfig;

use crate::policy::LineupPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("games_per_lineup must be at least 1")]
    ZeroGames,
    #[error("innings_per_game must be at least 1")]
    ZeroInnings,
}

/// Full configuration for one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Where to load player statistics from (a file or a directory).
    pub stats_path: PathBuf,

    #[serde(default)]
    pub policy: LineupPolicy,

    /// Innings simulated per game.
    #[serde(default = "default_innings")]
    pub innings_per_game: u32,

    /// Games simulated per lineup; the mean over these is the fitness.
    #[serde(default = "default_games")]
    pub games_per_lineup: u32,

    /// Safety cap on runs in a single inning.
    #[serde(default = "default_max_runs")]
    pub max_runs_per_inning: u32,

    /// Master seed; two runs with the same seed and config score every
    /// lineup identically.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Score lineups across worker threads.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// How many top lineups the report keeps.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
}

fn default_innings() -> u32 {
    6
}

fn default_games() -> u32 {
    10_000
}

fn default_max_runs() -> u32 {
    100
}

fn default_seed() -> u64 {
    42
}

fn default_parallel() -> bool {
    true
}

fn default_leaderboard_size() -> usize {
    10
}

impl SearchConfig {
    pub fn new(stats_path: impl Into<PathBuf>) -> SearchConfig {
        SearchConfig {
            stats_path: stats_path.into(),
            policy: LineupPolicy::default(),
            innings_per_game: default_innings(),
            games_per_lineup: default_games(),
            max_runs_per_inning: default_max_runs(),
            seed: default_seed(),
            parallel: default_parallel(),
            leaderboard_size: default_leaderboard_size(),
        }
    }

    pub fn from_toml_path(path: &Path) -> Result<SearchConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games_per_lineup == 0 {
            return Err(ConfigError::ZeroGames);
        }
        if self.innings_per_game == 0 {
            return Err(ConfigError::ZeroInnings);
        }
        Ok(())
    }

    /// The simulation parameters this search hands to the game engine.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            innings_per_game: self.innings_per_game,
            max_runs_per_inning: self.max_runs_per_inning,
        }
    }
}
