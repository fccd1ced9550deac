//! Monty Hall - Monte Carlo stay/switch simulation
//!
//! Simulates the three-door game show puzzle for a configurable number of
//! trials, scores the "stay" and "switch" strategies against every round and
//! reports win rates with 95% confidence intervals. Runs are reproducible
//! given a seed and can be cut short by a cancellation flag, in which case the
//! trials completed so far are still reported.

pub mod checker;
pub mod config;
pub mod door;
pub mod error;
pub mod report;
pub mod rng;
pub mod round;
pub mod run;
pub mod stats;
pub mod tally;

// Re-export main types
pub use checker::{check_round, InvariantViolation};
pub use config::{parse_sim_target, RunConfig};
pub use door::{Door, PLAYER_DOOR};
pub use error::SimError;
pub use report::{JsonReport, Report};
pub use rng::DoorRng;
pub use round::{Outcome, Round};
pub use run::{run_trials, CancelFlag, RunOutcome};
pub use stats::{StrategyStats, Summary, Z_95};
pub use tally::Tally;
