//! The callbacks a host test framework provides to the runner.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::RunnerError;
use crate::result::TestResult;

/// One file to lint, reported to the host as one test file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestItem {
    pub path: PathBuf,
}

impl TestItem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<PathBuf> for TestItem {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Host test framework seen from the runner.
///
/// Every item reaches exactly one of [`on_result`](Self::on_result) or
/// [`on_failure`](Self::on_failure). Callbacks for different items may run
/// concurrently.
pub trait RunnerHost: Send + Sync + 'static {
    /// Whether the run has been interrupted. Checked before each item starts.
    fn is_interrupted(&self) -> bool;

    fn on_start(&self, test: &TestItem) -> impl Future<Output = ()> + Send;

    /// Receives the record for a linted file. An error is forwarded to
    /// [`on_failure`](Self::on_failure) for the same item.
    fn on_result(
        &self,
        test: &TestItem,
        result: TestResult,
    ) -> impl Future<Output = Result<(), RunnerError>> + Send;

    fn on_failure(&self, test: &TestItem, error: RunnerError) -> impl Future<Output = ()> + Send;
}

/// Shared interruption flag, set from a signal handler or watcher.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
