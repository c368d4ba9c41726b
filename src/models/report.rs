// src/models/report.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::models::{FileRecord, Totals};

/// The complete output of one run. Assembled once, never mutated, written
/// exactly once. `files` is sorted ascending by path and holds no duplicate
/// paths (both guaranteed by the walk).
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub root: PathBuf,
    pub totals: Totals,
    pub files: Vec<FileRecord>,
}
