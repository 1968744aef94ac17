//! Search leaderboard — bounded, deduplicated, sorted by mean runs.
//!
//! The search keeps the top N lineups seen so far, not just the single
//! best. Deduplication key: `lineup_id` (content hash of the lineup
//! description). The generator never produces duplicates, but the
//! leaderboard enforces the invariant anyway so replayed or merged
//! results stay well-formed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use lineuplab_core::lineup::{LineupDescription, LineupId};

use crate::fitness;

/// A single ranked lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub description: LineupDescription,
    pub lineup_id: LineupId,
    pub mean_runs: f64,
    /// Position of this lineup in the enumeration sequence.
    pub ordinal: u64,
    pub recorded_at: NaiveDateTime,
}

/// Outcome of an insert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New entry added to the leaderboard.
    Inserted,
    /// Replaced an existing entry with the same lineup_id (better score).
    Replaced,
    /// Skipped: duplicate with worse or equal score, non-finite score, or
    /// no room among the top N.
    Skipped,
}

/// Top N lineups ranked by mean runs, best first.
#[derive(Debug)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    max_size: usize,
}

impl Leaderboard {
    pub fn new(max_size: usize) -> Leaderboard {
        Leaderboard {
            entries: Vec::with_capacity(max_size.min(1024)),
            max_size,
        }
    }

    /// Insert an entry. Returns the outcome.
    ///
    /// - Rejects entries with non-finite scores.
    /// - Deduplicates by `lineup_id`: replaces if better, skips if worse.
    /// - Keeps at most `max_size` entries, dropping the worst.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> InsertOutcome {
        if !entry.mean_runs.is_finite() {
            return InsertOutcome::Skipped;
        }

        if let Some(idx) = self.find_by_id(&entry.lineup_id) {
            if fitness::is_better(entry.mean_runs, self.entries[idx].mean_runs) {
                self.entries[idx] = entry;
                self.sort_entries();
                return InsertOutcome::Replaced;
            }
            return InsertOutcome::Skipped;
        }

        if self.entries.len() < self.max_size {
            self.entries.push(entry);
            self.sort_entries();
            InsertOutcome::Inserted
        } else if let Some(worst) = self.entries.last() {
            if fitness::is_better(entry.mean_runs, worst.mean_runs) {
                self.entries.pop();
                self.entries.push(entry);
                self.sort_entries();
                InsertOutcome::Inserted
            } else {
                InsertOutcome::Skipped
            }
        } else {
            // max_size of zero
            InsertOutcome::Skipped
        }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the board, yielding entries best first.
    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    fn find_by_id(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.lineup_id == id)
    }

    fn sort_entries(&mut self) {
        // Scores are finite by the insert guard; equal scores keep the
        // earlier entry first.
        self.entries.sort_by(|a, b| {
            b.mean_runs
                .partial_cmp(&a.mean_runs)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}
