// src/core/report.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::models::Report;

/// Fixed output location, relative to the working directory.
pub const REPORT_FILE: &str = "report.json";

/// Serializes the report as pretty JSON (two-space indentation, non-ASCII
/// preserved literally) and writes it to `path`, overwriting any existing
/// file. A failed write is fatal to the run; there is no retry.
///
/// # Errors
///
/// This function may return an error if:
/// * The report cannot be serialized
/// * The output file cannot be created or written
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

/// Prints the two console lines: the saved-file confirmation and the totals
/// summary.
pub fn print_summary(report: &Report, path: &Path) {
    println!("Report saved to {}", path.display());
    println!(
        "Files: {} | Lines: {} | Words: {} | Chars: {}",
        report.totals.files, report.totals.lines, report.totals.words, report.totals.chars
    );
}
