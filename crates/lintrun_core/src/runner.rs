//! Bounded-concurrency lint test runner.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::executor::{CommandExecutor, ProcessExecutor};
use crate::host::{RunnerHost, TestItem};
use crate::result::{Outcome, TestResult, TestStatus, now_millis, to_test_result};

/// Runs the linter over a set of files, at most `max_workers` at a time, and
/// reports every file to a [`RunnerHost`] as a test result.
pub struct TestRunner<E> {
    executor: Arc<E>,
    max_workers: usize,
}

impl TestRunner<ProcessExecutor> {
    /// Creates a runner that spawns the configured linter.
    pub fn from_config(config: &RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let executor = ProcessExecutor::new(config.linter_program(), config.linter.args.clone());
        Self::new(executor, config.max_workers)
    }
}

impl<E: CommandExecutor> TestRunner<E> {
    pub fn new(executor: E, max_workers: usize) -> Result<Self, RunnerError> {
        if max_workers == 0 {
            return Err(RunnerError::config("maxWorkers must be at least 1"));
        }
        Ok(Self {
            executor: Arc::new(executor),
            max_workers,
        })
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Lints every item and reports it to `host`.
    ///
    /// Items are admitted in order, and at most `max_workers` of them are
    /// between admission and their terminal callback at any time. Returns
    /// once every item has reached `on_result` or `on_failure`. Per-item
    /// faults go to `on_failure`; only a panicked task fails the whole run.
    pub async fn run_tests<H: RunnerHost>(
        &self,
        tests: Vec<TestItem>,
        host: Arc<H>,
    ) -> Result<(), RunnerError> {
        let permits = self.max_workers.min(Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut tasks = JoinSet::new();

        for test in tests {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| RunnerError::Internal(format!("Worker pool closed: {}", e)))?;
            let executor = Arc::clone(&self.executor);
            let host = Arc::clone(&host);

            tasks.spawn(async move {
                run_item(executor.as_ref(), host.as_ref(), test).await;
                drop(permit);
            });
        }

        let mut failure = None;
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("Lint task did not complete: {}", e);
                failure.get_or_insert(RunnerError::Internal(format!("Lint task failed: {}", e)));
            }
        }

        failure.map_or(Ok(()), Err)
    }

    /// Lints a single file and maps the outcome to a [`TestResult`].
    pub async fn run_test(&self, path: &Path) -> Result<TestResult, RunnerError> {
        run_test(self.executor.as_ref(), path).await
    }
}

async fn run_item<E, H>(executor: &E, host: &H, test: TestItem)
where
    E: CommandExecutor,
    H: RunnerHost,
{
    if host.is_interrupted() {
        debug!("Run interrupted, cancelling {}", test.path.display());
        host.on_failure(&test, RunnerError::cancelled()).await;
        return;
    }

    host.on_start(&test).await;

    match run_test(executor, &test.path).await {
        Ok(result) => {
            if let Err(error) = host.on_result(&test, result).await {
                warn!("Host rejected result for {}: {}", test.path.display(), error);
                host.on_failure(&test, error).await;
            }
        }
        Err(error) => {
            warn!("Failed to lint {}: {}", test.path.display(), error);
            host.on_failure(&test, error).await;
        }
    }
}

async fn run_test<E: CommandExecutor>(
    executor: &E,
    path: &Path,
) -> Result<TestResult, RunnerError> {
    let start = now_millis();
    let output = executor.execute(path).await?;
    let end = now_millis().max(start);

    let (status, failure_message) = if output.success() {
        (TestStatus::Passed, None)
    } else {
        (TestStatus::Failed, Some(output.failure_text()))
    };
    debug!("{} {} in {}ms", path.display(), status, end - start);

    Ok(to_test_result(Outcome {
        test_path: path,
        status,
        start,
        end,
        failure_message: failure_message.as_deref(),
    }))
}
