use thiserror::Error;

use crate::checker::InvariantViolation;
use crate::tally::Tally;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    #[error("{context} counter mismatch: expected {expected}, got {got}")]
    TallyMismatch {
        context: &'static str,
        expected: u64,
        got: u64,
    },
    #[error("cross-consistency failed: {tally:?}")]
    CrossMismatch { tally: Tally },
    #[error("statistics requested for zero completed trials")]
    NoTrials,
}
