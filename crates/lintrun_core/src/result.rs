//! Test result records handed to the host.
//!
//! A linted file is reported as a test file holding exactly one assertion,
//! whose status mirrors the linter's verdict for the whole file.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Status of a linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Pending,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Pending => "pending",
        }
    }

    fn count(self, of: TestStatus) -> u32 {
        u32::from(self == of)
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start and end of a test file run, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfStats {
    pub end: u64,
    pub start: u64,
}

/// Snapshot counters. Linting has no snapshots, so these stay zeroed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub added: u32,
    pub file_deleted: bool,
    pub matched: u32,
    pub unchecked: u32,
    pub unmatched: u32,
    pub updated: u32,
}

/// The single assertion reported for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    pub ancestor_titles: Vec<String>,
    pub duration: u64,
    pub failure_messages: Vec<String>,
    pub full_name: String,
    pub num_passing_asserts: u32,
    pub status: TestStatus,
    pub title: String,
}

/// Result record for one linted file, in the shape host reporters consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub console: Option<serde_json::Value>,
    pub failure_message: Option<String>,
    pub num_failing_tests: u32,
    pub num_passing_tests: u32,
    pub num_pending_tests: u32,
    pub perf_stats: PerfStats,
    pub skipped: bool,
    pub snapshot: SnapshotSummary,
    pub source_maps: serde_json::Map<String, serde_json::Value>,
    pub test_exec_error: Option<serde_json::Value>,
    pub test_file_path: String,
    pub test_results: Vec<AssertionResult>,
}

impl TestResult {
    /// Status of the file-level assertion.
    pub fn status(&self) -> TestStatus {
        self.test_results
            .first()
            .map(|r| r.status)
            .unwrap_or(TestStatus::Pending)
    }

    /// Duration of the lint run in milliseconds.
    pub fn duration(&self) -> u64 {
        self.perf_stats.end.saturating_sub(self.perf_stats.start)
    }
}

/// Inputs of [`to_test_result`].
#[derive(Debug, Clone, Copy)]
pub struct Outcome<'a> {
    pub test_path: &'a Path,
    pub status: TestStatus,
    pub start: u64,
    pub end: u64,
    pub failure_message: Option<&'a str>,
}

/// Maps the outcome of a lint run onto a [`TestResult`].
///
/// Pure: the same outcome always yields an equal record. `end` must not be
/// earlier than `start`; a reversed pair reports a zero duration.
pub fn to_test_result(outcome: Outcome<'_>) -> TestResult {
    let Outcome {
        test_path,
        status,
        start,
        end,
        failure_message,
    } = outcome;

    let path = test_path.display().to_string();
    let failure_message = failure_message.map(str::to_owned);

    TestResult {
        console: None,
        failure_message: failure_message.clone(),
        num_failing_tests: status.count(TestStatus::Failed),
        num_passing_tests: status.count(TestStatus::Passed),
        num_pending_tests: status.count(TestStatus::Pending),
        perf_stats: PerfStats { end, start },
        skipped: false,
        snapshot: SnapshotSummary::default(),
        source_maps: serde_json::Map::new(),
        test_exec_error: None,
        test_file_path: path.clone(),
        test_results: vec![AssertionResult {
            ancestor_titles: Vec::new(),
            duration: end.saturating_sub(start),
            failure_messages: failure_message.into_iter().collect(),
            full_name: path.clone(),
            num_passing_asserts: status.count(TestStatus::Passed),
            status,
            title: path,
        }],
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
