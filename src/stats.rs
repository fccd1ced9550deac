//! Win-rate estimates and confidence intervals
//!
//! Each strategy's win rate is a binomial proportion. Intervals use the normal
//! approximation `p ± z·sqrt(p(1-p)/n)` with both bounds clamped to `[0, 1]`.

use serde::Serialize;

use crate::error::SimError;
use crate::tally::Tally;

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.96;

/// Point estimate and 95% interval for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyStats {
    pub wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    pub std_err: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

impl StrategyStats {
    fn estimate(wins: u64, losses: u64, trials: u64) -> Self {
        let win_rate = wins as f64 / trials as f64;
        let std_err = standard_error(win_rate, trials);
        let (ci_low, ci_high) = confidence_interval(win_rate, std_err, Z_95);
        Self {
            wins,
            losses,
            win_rate,
            std_err,
            ci_low,
            ci_high,
        }
    }
}

/// Statistics for both strategies over the completed trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub trials: u64,
    pub seed: Option<i64>,
    pub stay: StrategyStats,
    pub switch: StrategyStats,
}

impl Summary {
    /// Build the summary for `trials` completed rounds.
    ///
    /// The tally is re-verified first; a mismatch here is a bookkeeping bug.
    pub fn from_tally(tally: &Tally, trials: u64, seed: Option<i64>) -> Result<Self, SimError> {
        if trials == 0 {
            return Err(SimError::NoTrials);
        }
        tally.verify(trials)?;

        Ok(Self {
            trials,
            seed,
            stay: StrategyStats::estimate(tally.stay_win, tally.stay_lose, trials),
            switch: StrategyStats::estimate(tally.switch_win, tally.switch_lose, trials),
        })
    }
}

/// Standard error of a proportion `p` estimated from `n` samples.
pub fn standard_error(p: f64, n: u64) -> f64 {
    (p * (1.0 - p) / n as f64).sqrt()
}

/// Interval `p ± z·se`, clamped to `[0, 1]`.
pub fn confidence_interval(p: f64, se: f64, z: f64) -> (f64, f64) {
    let half_width = z * se;
    ((p - half_width).max(0.0), (p + half_width).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Outcome;
    use approx::assert_relative_eq;

    fn tally_of(stay_win: u64, switch_win: u64) -> Tally {
        Tally {
            stay_win,
            stay_lose: switch_win,
            switch_win,
            switch_lose: stay_win,
        }
    }

    #[test]
    fn test_standard_error() {
        let se = standard_error(0.5, 100);
        assert_relative_eq!(se, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_interval_is_clamped() {
        let (lo, hi) = confidence_interval(0.01, 0.02, Z_95);
        assert_eq!(lo, 0.0);
        assert_relative_eq!(hi, 0.01 + 1.96 * 0.02, epsilon = 1e-12);

        let (lo, hi) = confidence_interval(0.99, 0.02, Z_95);
        assert_relative_eq!(lo, 0.99 - 1.96 * 0.02, epsilon = 1e-12);
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn test_summary_point_estimates() {
        let summary = Summary::from_tally(&tally_of(333, 667), 1_000, Some(42)).unwrap();
        assert_relative_eq!(summary.stay.win_rate, 0.333, epsilon = 1e-12);
        assert_relative_eq!(summary.switch.win_rate, 0.667, epsilon = 1e-12);
        assert_relative_eq!(
            summary.stay.std_err,
            (0.333_f64 * 0.667 / 1_000.0).sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(summary.stay.std_err, summary.switch.std_err, epsilon = 1e-12);
        assert_eq!(summary.stay.losses, 667);
        assert_eq!(summary.seed, Some(42));
    }

    #[test]
    fn test_interval_brackets_estimate() {
        for (stay_win, switch_win) in [(0, 1), (1, 0), (1, 5), (3, 3), (40, 2), (0, 500)] {
            let trials = stay_win + switch_win;
            let summary =
                Summary::from_tally(&tally_of(stay_win, switch_win), trials, None).unwrap();
            for stats in [summary.stay, summary.switch] {
                assert!(0.0 <= stats.ci_low && stats.ci_high <= 1.0);
                assert!(stats.ci_low <= stats.win_rate && stats.win_rate <= stats.ci_high);
            }
        }
    }

    #[test]
    fn test_unanimous_outcome_has_zero_width() {
        let mut tally = Tally::new();
        for _ in 0..10 {
            tally = tally.record(Outcome::SwitchWins);
        }
        let summary = Summary::from_tally(&tally, 10, None).unwrap();
        assert_eq!(summary.switch.win_rate, 1.0);
        assert_eq!(summary.switch.std_err, 0.0);
        assert_eq!((summary.switch.ci_low, summary.switch.ci_high), (1.0, 1.0));
        assert_eq!((summary.stay.ci_low, summary.stay.ci_high), (0.0, 0.0));
    }

    #[test]
    fn test_zero_trials_is_rejected() {
        assert!(matches!(
            Summary::from_tally(&Tally::new(), 0, None),
            Err(SimError::NoTrials)
        ));
    }

    #[test]
    fn test_inconsistent_tally_is_rejected() {
        let tally = tally_of(2, 2);
        assert!(Summary::from_tally(&tally, 5, None).is_err());
    }
}
