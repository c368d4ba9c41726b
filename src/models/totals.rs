// src/models/totals.rs
use serde::Serialize;

use crate::models::FileRecord;

#[derive(Debug, Default, Serialize)]
pub struct Totals {
    pub files: u64,
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

impl Totals {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            lines: 0,
            words: 0,
            chars: 0,
        }
    }

    /// Sums counts over successful records only; error records contribute
    /// zero to every field, including `files`.
    #[must_use]
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut totals = Self::new();
        for record in records {
            if let FileRecord::Counts(counts) = record {
                totals.files = totals.files.saturating_add(1);
                totals.lines = totals.lines.saturating_add(counts.lines);
                totals.words = totals.words.saturating_add(counts.words);
                totals.chars = totals.chars.saturating_add(counts.chars);
            }
        }
        totals
    }
}
