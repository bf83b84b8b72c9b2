//! Runner error types.

use thiserror::Error;

/// Name reported for a cancelled run, matching the host's `CancelRun` error.
pub const CANCEL_RUN: &str = "CancelRun";

/// Errors that can occur while running lint tests.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The host requested interruption before the item started.
    #[error("CancelRun{}", message_suffix(.0))]
    CancelRun(Option<String>),

    /// The linter process could not be spawned or awaited.
    #[error("Failed to run linter: {0}")]
    Spawn(#[from] std::io::Error),

    /// The host rejected a reported result.
    #[error("Host error: {0}")]
    Host(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Coarse classification of a [`RunnerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The run was deliberately interrupted.
    Cancelled,
    /// Anything the run did not ask for: spawn faults, host faults.
    Fault,
    /// Invalid configuration.
    Config,
    /// A bug or a panicked task.
    Internal,
}

impl RunnerError {
    /// Creates a cancellation signal without a message.
    pub fn cancelled() -> Self {
        Self::CancelRun(None)
    }

    /// Creates a cancellation signal with a message.
    pub fn cancelled_with(message: impl Into<String>) -> Self {
        Self::CancelRun(Some(message.into()))
    }

    /// Creates a host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CancelRun(_) => ErrorKind::Cancelled,
            Self::Spawn(_) | Self::Host(_) => ErrorKind::Fault,
            Self::Config(_) => ErrorKind::Config,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns true for the cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }

    /// Identifying name of the error, as shown to the host.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CancelRun(_) => CANCEL_RUN,
            Self::Spawn(_) => "SpawnError",
            Self::Host(_) => "HostError",
            Self::Config(_) => "ConfigError",
            Self::Internal(_) => "InternalError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_run_display() {
        assert_eq!(RunnerError::cancelled().to_string(), "CancelRun");
        assert_eq!(
            RunnerError::cancelled_with("watch mode restarted").to_string(),
            "CancelRun: watch mode restarted"
        );
    }

    #[test]
    fn test_cancel_run_is_distinguished_by_kind() {
        let cancelled = RunnerError::cancelled();
        let host = RunnerError::host("reporter crashed");
        let spawn = RunnerError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "eslint not found",
        ));

        assert!(cancelled.is_cancelled());
        assert!(!host.is_cancelled());
        assert!(!spawn.is_cancelled());
        assert_eq!(host.kind(), ErrorKind::Fault);
        assert_eq!(spawn.kind(), ErrorKind::Fault);
        assert_eq!(cancelled.name(), CANCEL_RUN);
    }

    #[test]
    fn test_config_error_message() {
        let err = RunnerError::config("maxWorkers must be at least 1");
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(
            err.to_string(),
            "Configuration error: maxWorkers must be at least 1"
        );
    }
}
