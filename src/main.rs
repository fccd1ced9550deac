use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use monty_hall::report::interruption_notice;
use monty_hall::{
    parse_sim_target, run_trials, CancelFlag, JsonReport, Report, RunConfig, RunOutcome,
};

#[derive(Debug, Parser)]
#[command(name = "monty-hall", author, version, about = "Monty Hall simulation")]
struct Cli {
    /// Number of simulations to run (>=1)
    #[arg(value_parser = parse_sim_target)]
    sim_target: u64,

    /// Optional RNG seed for reproducibility
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Enable per-round invariant checks
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            target: self.sim_target,
            seed: self.seed,
            debug: self.debug,
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")
}

fn write_report<W: Write>(
    out: &mut W,
    json: bool,
    outcome: &RunOutcome,
    report: &Report,
) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &JsonReport::new(outcome, report))?;
        writeln!(out)?;
    } else {
        if outcome.interrupted {
            writeln!(out, "\n{}", interruption_notice(outcome))?;
        }
        write!(out, "{report}")?;
    }
    out.flush()
}

/// A reader that went away (`| head`) is not a failure of the run.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = cli.run_config();

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || handler_flag.cancel())
        .context("failed to install interrupt handler")?;

    let outcome = run_trials(&config, &cancel).context("simulation aborted")?;
    let report = Report::from_outcome(&outcome).context("failed to summarize run")?;

    let stdout = io::stdout();
    ignore_broken_pipe(write_report(&mut stdout.lock(), cli.json, &outcome, &report))
        .context("failed to write report")?;

    info!(completed = outcome.completed, "report written");
    Ok(())
}
