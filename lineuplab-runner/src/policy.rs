//! Lineup policy selection — by symbolic name, then by ordinal.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from policy selection.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown lineup policy '{0}' (expected a policy name or ordinal)")]
    Unknown(String),
}

/// The fixed, enumerable set of lineup ordering policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineupPolicy {
    /// Fixed batting order; the generator enumerates every permutation of
    /// the roster.
    #[default]
    Standard,
    /// Strict two-group alternation; the generator enumerates within-group
    /// permutations.
    Alternating,
}

impl LineupPolicy {
    pub const ALL: [LineupPolicy; 2] = [LineupPolicy::Standard, LineupPolicy::Alternating];

    pub fn name(self) -> &'static str {
        match self {
            LineupPolicy::Standard => "standard",
            LineupPolicy::Alternating => "alternating",
        }
    }

    pub fn ordinal(self) -> usize {
        match self {
            LineupPolicy::Standard => 0,
            LineupPolicy::Alternating => 1,
        }
    }

    /// Two-stage lookup: case-insensitive symbolic name first, then numeric
    /// ordinal. Anything unrecognized maps to one unified error.
    pub fn from_selector(selector: &str) -> Result<LineupPolicy, PolicyError> {
        let trimmed = selector.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if let Some(policy) = LineupPolicy::ALL.iter().find(|p| p.name() == lowered) {
            return Ok(*policy);
        }
        if let Ok(ordinal) = trimmed.parse::<usize>() {
            if let Some(policy) = LineupPolicy::ALL.get(ordinal) {
                return Ok(*policy);
            }
        }
        Err(PolicyError::Unknown(selector.to_string()))
    }
}

impl fmt::Display for LineupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
