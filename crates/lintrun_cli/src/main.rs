//! lintrun CLI
//!
//! Runs a command-line linter over a set of files and reports each file as a
//! passing or failing test.

mod cli;
mod commands;
mod output;
mod reporter;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::init::run_init;
use crate::commands::run::{RunStatus, run_tests};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(RunStatus::Passed) => ExitCode::SUCCESS,
        Ok(RunStatus::Failed) => ExitCode::from(1),
        Ok(RunStatus::Interrupted) => ExitCode::from(130),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<RunStatus> {
    match &cli.command {
        Commands::Run {
            patterns,
            format,
            max_workers,
            linter,
        } => run_tests(&cli, patterns, *format, *max_workers, linter.as_deref()),
        Commands::Init { force } => run_init(*force).map(|_| RunStatus::Passed),
    }
}
