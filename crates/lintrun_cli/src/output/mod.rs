//! Output formatting module

mod json;
pub mod text;

use miette::Result;

use crate::cli::OutputFormat;
use crate::reporter::Report;

/// Prints the report and returns whether any file did not pass.
pub fn output_report(report: &Report, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => json::output_json(report)?,
        OutputFormat::Text => text::output_text(report),
    }

    Ok(!report.summary().is_success())
}
