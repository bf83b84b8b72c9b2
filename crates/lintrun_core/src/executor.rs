//! Linter process invocation.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::RunnerError;

/// Captured result of one linter invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a run that exited with `code`.
    pub fn with_exit_code(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Text describing a failed run.
    ///
    /// stdout is forwarded verbatim. stderr is used only when the linter
    /// wrote nothing to stdout, and a placeholder naming the exit status is
    /// used when both streams are empty.
    pub fn failure_text(&self) -> String {
        if !self.stdout.trim().is_empty() {
            return self.stdout.clone();
        }
        if !self.stderr.trim().is_empty() {
            return self.stderr.clone();
        }
        match self.exit_code {
            Some(code) => format!("Linter exited with status {code}"),
            None => "Linter was terminated by a signal".to_string(),
        }
    }
}

/// Runs the linter against a single file.
///
/// A non-zero exit is a regular [`CommandOutput`], not an error. Errors are
/// reserved for runs that could not happen at all.
pub trait CommandExecutor: Send + Sync + 'static {
    fn execute(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<CommandOutput, RunnerError>> + Send;
}

/// Executes the linter as a child process: `<program> <args...> <path>`.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessExecutor {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, path: &Path) -> Result<CommandOutput, RunnerError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        debug!("Running {} on {}", self.program.display(), path.display());
        let output = command.output().await?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
