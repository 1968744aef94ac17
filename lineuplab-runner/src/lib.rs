//! LineupLab Runner — search orchestration over `lineuplab-core`.
//!
//! This crate builds on the core engine to provide:
//! - Roster loading from CSV/JSON stat files (single file or directory)
//! - Policy selection by name or ordinal
//! - Exhaustive, duplicate-free lineup enumeration per policy
//! - The search driver: batched (optionally parallel) evaluation with a
//!   bounded leaderboard and a structured report
//! - JSON report artifacts

pub mod config;
pub mod fitness;
pub mod generator;
pub mod leaderboard;
pub mod policy;
pub mod report;
pub mod roster_loader;
pub mod search;

pub use config::{ConfigError, SearchConfig};
pub use generator::{GeneratorError, LineupGenerator};
pub use leaderboard::{InsertOutcome, Leaderboard, LeaderboardEntry};
pub use policy::{LineupPolicy, PolicyError};
pub use report::{save_report, ReportError};
pub use roster_loader::{load_roster, LoadError};
pub use search::{run_search, run_search_with_progress, SearchError, SearchReport};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn search_types_are_send_sync() {
        assert_send::<SearchConfig>();
        assert_sync::<SearchConfig>();
        assert_send::<SearchReport>();
        assert_sync::<SearchReport>();
        assert_send::<LeaderboardEntry>();
        assert_sync::<LeaderboardEntry>();
    }
}
