// src/utils.rs

/// Returns `true` for directories whose name starts with a dot, so the walk
/// prunes them together with their entire subtree. The walk root itself is
/// never considered hidden, and files are left to the classifier.
#[must_use]
pub fn is_hidden_dir(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
