//! Text output formatter

use lintrun_core::{TestResult, TestStatus};

use crate::reporter::{Report, RunSummary};

/// One line per completed file, printed as results arrive.
pub fn print_status_line(result: &TestResult) {
    println!("{}", status_line(result));
}

fn status_line(result: &TestResult) -> String {
    let label = match result.status() {
        TestStatus::Passed => "PASS",
        TestStatus::Failed => "FAIL",
        TestStatus::Pending => "SKIP",
    };
    format!(
        "{} {} ({}ms)",
        label,
        result.test_file_path,
        result.duration()
    )
}

pub fn output_text(report: &Report) {
    for result in &report.results {
        let Some(message) = result.failure_message.as_deref() else {
            continue;
        };

        println!("\n{}:", result.test_file_path);
        for line in message.lines() {
            println!("  {}", line);
        }
    }

    for failure in &report.failures {
        eprintln!("{}: {}", failure.path.display(), failure.message);
    }

    println!();
    println!("{}", summary_line(&report.summary()));
}

fn summary_line(summary: &RunSummary) -> String {
    let mut parts = vec![format!("{} passed", summary.passed)];
    if summary.failed > 0 {
        parts.push(format!("{} failed", summary.failed));
    }
    if summary.pending > 0 {
        parts.push(format!("{} skipped", summary.pending));
    }
    if summary.errors > 0 {
        parts.push(format!("{} errored", summary.errors));
    }
    if summary.cancelled > 0 {
        parts.push(format!("{} cancelled", summary.cancelled));
    }
    format!("Files: {}, {} total", parts.join(", "), summary.total())
}
