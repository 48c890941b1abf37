//! # upkeep CLI entry point
//!
//! Parses command-line arguments, builds the event log, and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use upkeep_cli::policy::{run_policy, PolicyArgs};
use upkeep_cli::LogArgs;
use upkeep_logger::{new_logger, EventLog, EVENT_SHUTDOWN};

/// Upkeep — update enforcement policy toolchain.
///
/// Loads per-source enforcement policies (required updates, hidden updates,
/// excluded drivers) and reports their normalized content.
#[derive(Parser, Debug)]
#[command(name = "upkeep", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect and check enforcement policy files.
    Policy(PolicyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = cli.log.to_config();
    let log = match new_logger(&config) {
        Ok(log) => log,
        Err(e) => {
            tracing::error!("failed to open event log: {e}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Policy(args) => run_policy(&args, log.as_ref()),
    };

    if let Err(e) = log.info(EVENT_SHUTDOWN, "upkeep exiting").and_then(|()| log.close()) {
        tracing::warn!("event log shutdown failed: {e}");
    }

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
