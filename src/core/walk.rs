// src/core/walk.rs
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::classify::is_text_like;
use crate::utils::is_hidden_dir;

/// Recursively enumerates text-like files beneath `root`.
///
/// Hidden directories (any dot-prefixed segment below the root) are pruned
/// with their whole subtree; the surviving files are filtered through the
/// extension classifier and returned sorted ascending, so the record order
/// in the report is deterministic across runs on an unchanged tree.
///
/// # Errors
///
/// Returns an error only when the root itself cannot be enumerated.
/// Unreadable entries deeper in the tree are silently absent from the
/// result.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if is_text_like(entry.path()) {
            files.push(entry.into_path());
        }
    }

    // Compare whole paths as strings: component-wise PathBuf ordering would
    // put `x/g.md` before `x.y/f.md`, which is not lexicographic.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}
