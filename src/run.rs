//! Trial loop
//!
//! Runs rounds one at a time until the target is reached or the cancel flag
//! is raised. The flag is only read between rounds, so the returned tally
//! always describes whole rounds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::checker::check_round;
use crate::config::RunConfig;
use crate::error::SimError;
use crate::rng::DoorRng;
use crate::round::Round;
use crate::tally::Tally;

/// Completed-trial interval between progress log events.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Shared stop request, raised from an interrupt handler.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters and progress of a finished or interrupted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub tally: Tally,
    pub completed: u64,
    pub target: u64,
    pub seed: Option<i64>,
    pub interrupted: bool,
}

/// Run the configured number of trials with a fresh randomness source.
pub fn run_trials(config: &RunConfig, cancel: &CancelFlag) -> Result<RunOutcome, SimError> {
    config.validate()?;
    let mut rng = DoorRng::new(config.seed);
    run_with_rng(config, &mut rng, cancel)
}

/// Run the trial loop drawing from `rng`.
pub fn run_with_rng(
    config: &RunConfig,
    rng: &mut DoorRng,
    cancel: &CancelFlag,
) -> Result<RunOutcome, SimError> {
    info!(
        sim_target = config.target,
        seed = ?config.seed,
        debug = config.debug,
        "starting simulation"
    );

    let mut tally = Tally::new();
    let mut completed = 0u64;
    let mut interrupted = false;

    while completed < config.target {
        if cancel.is_cancelled() {
            warn!(
                completed,
                sim_target = config.target,
                "interrupt received, stopping early"
            );
            interrupted = true;
            break;
        }

        let round = Round::play(rng);
        if config.debug {
            check_round(&round)?;
        }
        tally = tally.record(round.outcome());
        completed += 1;

        if completed % PROGRESS_INTERVAL == 0 {
            debug!(completed, sim_target = config.target, "progress");
        }
    }

    info!(completed, interrupted, "simulation finished");

    Ok(RunOutcome {
        tally,
        completed,
        target: config.target,
        seed: config.seed,
        interrupted,
    })
}
