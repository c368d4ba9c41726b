// src/models/file_record.rs
use serde::{Serialize, Serializer};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single file could not be counted. Captured in the report as data;
/// a read failure never aborts the run.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("{0}")]
    Other(String),
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other(err.to_string()),
        }
    }
}

impl Serialize for ReadError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Serialize)]
pub struct FileCounts {
    pub path: PathBuf,
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

#[derive(Debug, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub error: ReadError,
}

/// Per-file result: either counts or an error, never both. The untagged
/// serialization gives the two JSON shapes directly.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FileRecord {
    Counts(FileCounts),
    Error(FileError),
}

impl FileRecord {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Counts(counts) => &counts.path,
            Self::Error(error) => &error.path,
        }
    }

    #[must_use]
    pub const fn is_counted(&self) -> bool {
        matches!(self, Self::Counts(_))
    }
}
