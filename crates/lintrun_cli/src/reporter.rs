//! Collecting host for the CLI.

use std::path::PathBuf;

use lintrun_core::{
    ErrorKind, InterruptFlag, RunnerError, RunnerHost, TestItem, TestResult, TestStatus,
};
use parking_lot::Mutex;
use tracing::debug;

use crate::output::text;

/// A file that could not be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFailure {
    pub path: PathBuf,
    pub kind: ErrorKind,
    pub name: &'static str,
    pub message: String,
}

/// Everything reported during one run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<TestResult>,
    pub failures: Vec<RunFailure>,
}

/// Totals shown after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub errors: usize,
    pub cancelled: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.pending + self.errors + self.cancelled
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0 && self.cancelled == 0
    }
}

impl Report {
    /// Sorts results and failures by path so output is stable across runs.
    pub fn sort(&mut self) {
        self.results
            .sort_by(|a, b| a.test_file_path.cmp(&b.test_file_path));
        self.failures.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for result in &self.results {
            match result.status() {
                TestStatus::Passed => summary.passed += 1,
                TestStatus::Failed => summary.failed += 1,
                TestStatus::Pending => summary.pending += 1,
            }
        }
        for failure in &self.failures {
            if failure.kind == ErrorKind::Cancelled {
                summary.cancelled += 1;
            } else {
                summary.errors += 1;
            }
        }
        summary
    }
}

/// [`RunnerHost`] that collects every callback into a [`Report`].
pub struct Reporter {
    interrupt: InterruptFlag,
    stream: bool,
    report: Mutex<Report>,
}

impl Reporter {
    /// With `stream` set, a status line is printed as each file completes.
    pub fn new(interrupt: InterruptFlag, stream: bool) -> Self {
        Self {
            interrupt,
            stream,
            report: Mutex::new(Report::default()),
        }
    }

    /// Takes the collected report, leaving an empty one behind.
    pub fn take_report(&self) -> Report {
        let mut report = std::mem::take(&mut *self.report.lock());
        report.sort();
        report
    }
}

impl RunnerHost for Reporter {
    fn is_interrupted(&self) -> bool {
        self.interrupt.is_interrupted()
    }

    async fn on_start(&self, test: &TestItem) {
        debug!("Linting {}", test.path.display());
    }

    async fn on_result(&self, _test: &TestItem, result: TestResult) -> Result<(), RunnerError> {
        if self.stream {
            text::print_status_line(&result);
        }
        self.report.lock().results.push(result);
        Ok(())
    }

    async fn on_failure(&self, test: &TestItem, error: RunnerError) {
        self.report.lock().failures.push(RunFailure {
            path: test.path.clone(),
            kind: error.kind(),
            name: error.name(),
            message: error.to_string(),
        });
    }
}
