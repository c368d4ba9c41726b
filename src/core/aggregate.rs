// src/core/aggregate.rs
use chrono::{DateTime, Local};
use std::path::Path;

use crate::models::{FileRecord, Report, Totals};

/// Local timestamp at second precision, no timezone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Injectable time source so report assembly stays deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Assembles the final report from the ordered record list: totals over the
/// success records, the absolute root path, and the generation timestamp.
#[must_use]
pub fn assemble_report(root: &Path, records: Vec<FileRecord>, clock: &dyn Clock) -> Report {
    Report {
        generated_at: clock.now().format(TIMESTAMP_FORMAT).to_string(),
        root: root.to_path_buf(),
        totals: Totals::from_records(&records),
        files: records,
    }
}
