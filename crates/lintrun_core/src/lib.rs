//! # lintrun_core
//!
//! Runs a command-line linter as a test runner.
//!
//! Every file is one test: the linter is spawned per file, a zero exit is a
//! passing test and anything else is a failing test carrying the linter's
//! output. This crate provides:
//! - The bounded-concurrency `TestRunner`
//! - The `TestResult` record shape and its mapping
//! - The `RunnerHost` and `CommandExecutor` seams
//! - Configuration loading and file discovery
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lintrun_core::{RunnerConfig, TestItem, TestRunner};
//!
//! let config = RunnerConfig::from_file(".lintrun.jsonc")?;
//! let runner = TestRunner::from_config(&config)?;
//!
//! let items = vec![TestItem::new("src/index.js")];
//! runner.run_tests(items, Arc::new(my_host)).await?;
//! ```

mod config;
mod error;
pub mod executor;
pub mod file_finder;
pub mod host;
mod result;
mod runner;

pub use config::{LinterCommand, RunnerConfig};
pub use error::{CANCEL_RUN, ErrorKind, RunnerError};
pub use executor::{CommandExecutor, CommandOutput, ProcessExecutor};
pub use file_finder::FileFinder;
pub use host::{InterruptFlag, RunnerHost, TestItem};
pub use result::{
    AssertionResult, Outcome, PerfStats, SnapshotSummary, TestResult, TestStatus, now_millis,
    to_test_result,
};
pub use runner::TestRunner;
