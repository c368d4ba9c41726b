// src/models.rs
mod file_record;
mod report;
mod totals;

pub use file_record::{FileCounts, FileError, FileRecord, ReadError};
pub use report::Report;
pub use totals::Totals;
