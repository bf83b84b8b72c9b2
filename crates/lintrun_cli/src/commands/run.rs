//! Run command implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lintrun_core::{FileFinder, InterruptFlag, RunnerConfig, TestRunner};
use miette::{IntoDiagnostic, Result};
use tracing::{info, warn};

use crate::cli::{Cli, OutputFormat};
use crate::output::output_report;
use crate::reporter::Reporter;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
    Interrupted,
}

pub fn run_tests(
    cli: &Cli,
    patterns: &[String],
    format: OutputFormat,
    max_workers: Option<u64>,
    linter: Option<&str>,
) -> Result<RunStatus> {
    let mut config = if let Some(ref path) = cli.config {
        RunnerConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    if let Some(max_workers) = max_workers {
        config.max_workers = usize::try_from(max_workers).into_diagnostic()?;
    }
    if let Some(linter) = linter {
        config.linter.command = resolve_linter_override(linter)?;
    }

    let finder = FileFinder::new(&config.include, &config.exclude).into_diagnostic()?;
    let items = finder
        .discover_items(patterns, Path::new("."))
        .into_diagnostic()?;

    let runner = TestRunner::from_config(&config).into_diagnostic()?;
    info!(
        "Linting {} files with {} workers",
        items.len(),
        runner.max_workers()
    );

    let interrupt = InterruptFlag::new();
    let reporter = Arc::new(Reporter::new(
        interrupt.clone(),
        format == OutputFormat::Text,
    ));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;
    runtime
        .block_on(async {
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, waiting for running files to finish");
                    interrupt.interrupt();
                }
            });
            runner.run_tests(items, Arc::clone(&reporter)).await
        })
        .into_diagnostic()?;

    let report = reporter.take_report();
    let has_failures = output_report(&report, format)?;

    Ok(if report.summary().cancelled > 0 {
        RunStatus::Interrupted
    } else if has_failures {
        RunStatus::Failed
    } else {
        RunStatus::Passed
    })
}

/// A linter path given on the command line is relative to the working
/// directory, not to the configuration file.
fn resolve_linter_override(linter: &str) -> Result<String> {
    let path = Path::new(linter);
    if path.components().count() > 1 && path.is_relative() {
        let cwd = std::env::current_dir().into_diagnostic()?;
        return Ok(cwd.join(path).to_string_lossy().into_owned());
    }
    Ok(linter.to_string())
}

pub fn find_config() -> Result<RunnerConfig> {
    if let Some(path) = RunnerConfig::discover(".") {
        info!("Using config: {}", path.display());
        return RunnerConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    let mut config = RunnerConfig::new();
    config.base_dir = Some(PathBuf::from("."));
    Ok(config)
}
