//! Fitness comparison for lineup candidates.
//!
//! A lineup's fitness is its mean runs per game over a simulated series.
//! Higher is strictly better; ties keep the incumbent, so the first
//! lineup to reach a score wins it under any enumeration order.

/// True when `candidate` should displace `incumbent`.
///
/// Non-finite candidates never win. The search seeds its incumbent with
/// `f64::NEG_INFINITY`, so the first finite score always takes the lead.
pub fn is_better(candidate: f64, incumbent: f64) -> bool {
    candidate.is_finite() && candidate > incumbent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_mean_wins() {
        assert!(is_better(4.2, 3.9));
        assert!(!is_better(3.9, 4.2));
    }

    #[test]
    fn ties_keep_the_incumbent() {
        assert!(!is_better(4.0, 4.0));
    }

    #[test]
    fn anything_finite_beats_the_seed() {
        assert!(is_better(0.0, f64::NEG_INFINITY));
    }

    #[test]
    fn non_finite_candidates_never_win() {
        assert!(!is_better(f64::NAN, 1.0));
        assert!(!is_better(f64::INFINITY, 1.0));
    }
}
