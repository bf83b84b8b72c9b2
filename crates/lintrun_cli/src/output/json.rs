//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use crate::reporter::Report;

pub fn output_json(report: &Report) -> Result<()> {
    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|f| {
            serde_json::json!({
                "testFilePath": f.path.display().to_string(),
                "name": f.name,
                "message": f.message,
            })
        })
        .collect();
    let summary = report.summary();
    let output = serde_json::json!({
        "numPassedTestSuites": summary.passed,
        "numFailedTestSuites": summary.failed,
        "numPendingTestSuites": summary.pending,
        "numRuntimeErrorTestSuites": summary.errors + summary.cancelled,
        "numTotalTestSuites": summary.total(),
        "success": summary.is_success(),
        "testResults": report.results,
        "runtimeErrors": failures,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
