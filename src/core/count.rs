// src/core/count.rs
use std::fs;
use std::path::Path;

use crate::models::{FileCounts, FileError, FileRecord};

/// Reads one file and computes its line/word/character counts.
///
/// The content is decoded as lossy UTF-8: undecodable byte sequences become
/// replacement characters and are counted as ordinary text, never promoted
/// to a per-file error. An open or read failure produces an error record
/// instead of partial counts.
#[must_use]
pub fn count_file(path: &Path) -> FileRecord {
    match fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            FileRecord::Counts(FileCounts {
                path: path.to_path_buf(),
                lines: line_count(&content),
                words: word_count(&content),
                chars: char_count(&content),
            })
        }
        Err(err) => FileRecord::Error(FileError {
            path: path.to_path_buf(),
            error: err.into(),
        }),
    }
}

/// Counts line segments split on universal newline boundaries (LF, CRLF, or
/// lone CR). A trailing newline does not open an extra empty segment; empty
/// content has 0 lines; content without any newline has 1.
#[must_use]
pub fn line_count(content: &str) -> u64 {
    if content.is_empty() {
        return 0;
    }

    let bytes = content.as_bytes();
    let mut breaks: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                breaks = breaks.saturating_add(1);
                i += 1;
            }
            b'\r' => {
                breaks = breaks.saturating_add(1);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
            }
            _ => i += 1,
        }
    }

    if matches!(bytes.last(), Some(b'\n' | b'\r')) {
        breaks
    } else {
        breaks.saturating_add(1)
    }
}

/// Counts whitespace-delimited tokens; runs of whitespace and boundary
/// whitespace produce no empty tokens.
#[must_use]
pub fn word_count(content: &str) -> u64 {
    u64::try_from(content.split_whitespace().count()).unwrap_or(u64::MAX) // Fallback to max value if conversion fails
}

/// Counts decoded characters, not raw bytes.
#[must_use]
pub fn char_count(content: &str) -> u64 {
    u64::try_from(content.chars().count()).unwrap_or(u64::MAX) // Fallback to max value if conversion fails
}
