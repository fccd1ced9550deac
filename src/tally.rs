//! Running stay/switch counters

use serde::Serialize;

use crate::error::SimError;
use crate::round::Outcome;

/// Win/loss counters for both strategies.
///
/// Stay and switch are complements: every recorded round adds one to a stay
/// counter and one to a switch counter, and never a win to both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub stay_win: u64,
    pub stay_lose: u64,
    pub switch_win: u64,
    pub switch_lose: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round into the counters.
    #[must_use]
    pub fn record(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::StayWins => Self {
                stay_win: self.stay_win + 1,
                switch_lose: self.switch_lose + 1,
                ..self
            },
            Outcome::SwitchWins => Self {
                switch_win: self.switch_win + 1,
                stay_lose: self.stay_lose + 1,
                ..self
            },
        }
    }

    pub fn stay_total(&self) -> u64 {
        self.stay_win + self.stay_lose
    }

    pub fn switch_total(&self) -> u64 {
        self.switch_win + self.switch_lose
    }

    /// Confirm the counters describe exactly `trials` complementary rounds.
    pub fn verify(&self, trials: u64) -> Result<(), SimError> {
        if self.stay_total() != trials {
            return Err(SimError::TallyMismatch {
                context: "stay",
                expected: trials,
                got: self.stay_total(),
            });
        }
        if self.switch_total() != trials {
            return Err(SimError::TallyMismatch {
                context: "switch",
                expected: trials,
                got: self.switch_total(),
            });
        }
        if self.stay_win != self.switch_lose || self.stay_lose != self.switch_win {
            return Err(SimError::CrossMismatch { tally: *self });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_touches_one_counter_per_strategy() {
        let tally = Tally::new().record(Outcome::StayWins);
        assert_eq!(
            tally,
            Tally {
                stay_win: 1,
                stay_lose: 0,
                switch_win: 0,
                switch_lose: 1,
            }
        );

        let tally = tally.record(Outcome::SwitchWins);
        assert_eq!(
            tally,
            Tally {
                stay_win: 1,
                stay_lose: 1,
                switch_win: 1,
                switch_lose: 1,
            }
        );
    }

    #[test]
    fn test_verify_holds_after_any_sequence() {
        let outcomes = [
            Outcome::SwitchWins,
            Outcome::SwitchWins,
            Outcome::StayWins,
            Outcome::SwitchWins,
            Outcome::StayWins,
        ];
        let mut tally = Tally::new();
        for (n, outcome) in outcomes.into_iter().enumerate() {
            tally = tally.record(outcome);
            tally.verify(n as u64 + 1).unwrap();
        }
        assert_eq!(tally.switch_win, 3);
        assert_eq!(tally.stay_win, 2);
    }

    #[test]
    fn test_verify_rejects_wrong_total() {
        let tally = Tally::new().record(Outcome::StayWins);
        let err = tally.verify(2).unwrap_err();
        assert!(matches!(
            err,
            SimError::TallyMismatch {
                context: "stay",
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_verify_rejects_non_complementary_counts() {
        let tally = Tally {
            stay_win: 1,
            stay_lose: 1,
            switch_win: 2,
            switch_lose: 0,
        };
        assert!(matches!(
            tally.verify(2),
            Err(SimError::CrossMismatch { .. })
        ));
    }
}
