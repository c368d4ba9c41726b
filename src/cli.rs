// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::core::aggregate::{SystemClock, assemble_report};
use crate::core::count::count_file;
use crate::core::report::{REPORT_FILE, print_summary, write_report};
use crate::core::walk::collect_files;
use crate::models::FileRecord;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,
}

/// Runs the full scan pipeline: walk, count, aggregate, persist, summarize.
///
/// # Errors
///
/// This function may return an error if:
/// * The scan root does not exist or cannot be resolved
/// * The root directory cannot be enumerated at all
/// * The report file cannot be written
///
/// Per-file read failures are captured as error records inside the report
/// and never abort the run.
pub fn run(args: Args) -> Result<()> {
    let root = args
        .directory
        .canonicalize()
        .with_context(|| format!("Failed to access scan root: {}", args.directory.display()))?;

    let paths = collect_files(&root)
        .with_context(|| format!("Failed to scan directory: {}", root.display()))?;

    let records: Vec<FileRecord> = paths.iter().map(|path| count_file(path)).collect();
    let report = assemble_report(&root, records, &SystemClock);

    let out_path = Path::new(REPORT_FILE);
    write_report(&report, out_path)?;
    print_summary(&report, out_path);

    Ok(())
}
