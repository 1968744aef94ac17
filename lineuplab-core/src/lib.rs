//! LineupLab Core — domain types, batting lineups, game simulation, deterministic RNG.
//!
//! This crate contains the heart of the lineup optimizer:
//! - Domain types (at-bat outcomes, players, rosters)
//! - Batting lineup variants behind a single capability surface
//!   (standard permutation, two-group alternation)
//! - Inning-by-inning Monte Carlo game simulator
//! - Deterministic RNG hierarchy for order-independent parallel evaluation
//!
//! No I/O happens here; roster loading, enumeration policy selection, and
//! search orchestration live in `lineuplab-runner`.

pub mod domain;
pub mod lineup;
pub mod rng;
pub mod sim;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything the search driver moves across rayon
    /// workers is Send + Sync. If any type fails this check, the build
    /// breaks immediately instead of at the parallel call site.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Outcome>();
        require_sync::<domain::Outcome>();
        require_send::<domain::Player>();
        require_sync::<domain::Player>();
        require_send::<domain::Roster>();
        require_sync::<domain::Roster>();

        require_send::<lineup::BattingLineup>();
        require_sync::<lineup::BattingLineup>();
        require_send::<lineup::LineupDescription>();
        require_sync::<lineup::LineupDescription>();

        require_send::<sim::SimConfig>();
        require_sync::<sim::SimConfig>();
        require_send::<sim::GameSimulator>();
        require_sync::<sim::GameSimulator>();

        require_send::<rng::RngHierarchy>();
        require_sync::<rng::RngHierarchy>();
    }
}
