//! At-bat outcome — the fundamental unit of simulated offense.

use serde::{Deserialize, Serialize};

/// Result of a single plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Out,
    Walk,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Outcome {
    /// All outcomes, in the order stat files list their count columns.
    pub const ALL: [Outcome; 6] = [
        Outcome::Out,
        Outcome::Walk,
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
    ];

    /// Bases awarded to the batter and to every runner already on base.
    ///
    /// A walk advances all runners one base, same as a single; the scoring
    /// model does not distinguish forced from unforced advances.
    pub fn total_bases(self) -> u32 {
        match self {
            Outcome::Out => 0,
            Outcome::Walk | Outcome::Single => 1,
            Outcome::Double => 2,
            Outcome::Triple => 3,
            Outcome::HomeRun => 4,
        }
    }

    /// Position of this outcome within [`Outcome::ALL`].
    pub fn index(self) -> usize {
        match self {
            Outcome::Out => 0,
            Outcome::Walk => 1,
            Outcome::Single => 2,
            Outcome::Double => 3,
            Outcome::Triple => 4,
            Outcome::HomeRun => 5,
        }
    }

    /// Column label used in stat files and reports.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Out => "out",
            Outcome::Walk => "walk",
            Outcome::Single => "single",
            Outcome::Double => "double",
            Outcome::Triple => "triple",
            Outcome::HomeRun => "hr",
        }
    }

    /// Parse a scorebook token.
    ///
    /// Accepts both plain labels ("single", "hr") and the abbreviated
    /// scorebook forms found in exported stat files: fielder's choice,
    /// sacrifice, and strikeout all count as outs; a reached-on-error
    /// counts as a single.
    pub fn from_token(token: &str) -> Option<Outcome> {
        match token.trim().to_ascii_lowercase().as_str() {
            "out" | "fc" | "sac" | "k" => Some(Outcome::Out),
            "walk" | "bb" => Some(Outcome::Walk),
            "single" | "1b" | "e" => Some(Outcome::Single),
            "double" | "2b" => Some(Outcome::Double),
            "triple" | "3b" => Some(Outcome::Triple),
            "hr" | "hro" | "homerun" => Some(Outcome::HomeRun),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_bases_match_scoring_rules() {
        assert_eq!(Outcome::Out.total_bases(), 0);
        assert_eq!(Outcome::Walk.total_bases(), 1);
        assert_eq!(Outcome::Single.total_bases(), 1);
        assert_eq!(Outcome::Double.total_bases(), 2);
        assert_eq!(Outcome::Triple.total_bases(), 3);
        assert_eq!(Outcome::HomeRun.total_bases(), 4);
    }

    #[test]
    fn index_agrees_with_all_ordering() {
        for (i, outcome) in Outcome::ALL.iter().enumerate() {
            assert_eq!(outcome.index(), i);
        }
    }

    #[test]
    fn parses_scorebook_tokens() {
        assert_eq!(Outcome::from_token("FC"), Some(Outcome::Out));
        assert_eq!(Outcome::from_token("bb"), Some(Outcome::Walk));
        assert_eq!(Outcome::from_token(" 1b "), Some(Outcome::Single));
        assert_eq!(Outcome::from_token("hro"), Some(Outcome::HomeRun));
        assert_eq!(Outcome::from_token("bunt???"), None);
    }
}
