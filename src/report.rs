//! Rendering of run results
//!
//! The text form is what the command line prints. [`JsonReport`] carries the
//! same figures plus run progress for machine consumption.

use std::fmt;

use serde::Serialize;

use crate::error::SimError;
use crate::run::RunOutcome;
use crate::stats::{StrategyStats, Summary};

/// Final report for a run; `Empty` when no trial completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    Empty,
    Complete(Summary),
}

impl Report {
    pub fn from_outcome(outcome: &RunOutcome) -> Result<Self, SimError> {
        if outcome.completed == 0 {
            return Ok(Report::Empty);
        }
        let summary = Summary::from_tally(&outcome.tally, outcome.completed, outcome.seed)?;
        Ok(Report::Complete(summary))
    }

    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Report::Empty => None,
            Report::Complete(summary) => Some(summary),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = match self {
            Report::Empty => return writeln!(f, "No simulations completed."),
            Report::Complete(summary) => summary,
        };

        let seed = summary
            .seed
            .map_or_else(|| "OS entropy".to_string(), |seed| seed.to_string());
        writeln!(
            f,
            "Trials: {} | Seed: {}",
            group_thousands(summary.trials),
            seed
        )?;
        write_strategy_line(f, "Stay:  ", &summary.stay)?;
        write_strategy_line(f, "Switch:", &summary.switch)
    }
}

fn write_strategy_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    stats: &StrategyStats,
) -> fmt::Result {
    writeln!(
        f,
        "{label} wins={}  losses={}   win-rate={}   95% CI [{} , {}]",
        group_thousands(stats.wins),
        group_thousands(stats.losses),
        percent(stats.win_rate),
        percent(stats.ci_low),
        percent(stats.ci_high),
    )
}

/// Notice printed ahead of the report when a run was cut short.
pub fn interruption_notice(outcome: &RunOutcome) -> String {
    format!(
        "Interrupted at {} / {} simulations. Reporting partial results…",
        group_thousands(outcome.completed),
        group_thousands(outcome.target)
    )
}

/// Machine-readable run report: the run's progress and raw counters,
/// followed by the derived statistics when any trial completed.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub run: &'a RunOutcome,
    pub summary: Option<&'a Summary>,
}

impl<'a> JsonReport<'a> {
    pub fn new(outcome: &'a RunOutcome, report: &'a Report) -> Self {
        Self {
            run: outcome,
            summary: report.summary(),
        }
    }
}

/// Format a proportion as a percentage with three decimals.
pub fn percent(x: f64) -> String {
    format!("{:.3}%", 100.0 * x)
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
