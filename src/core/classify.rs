// src/core/classify.rs
use std::ffi::OsStr;
use std::path::Path;

/// Extensions treated as text-like. Membership is the whole policy: files
/// without an extension or with an extension outside this list are skipped
/// regardless of their actual content.
const TEXT_EXTENSIONS: &[&str] = &[
    // scripting and compiled languages
    "rs", "py", "js", "ts", "jsx", "tsx", "java", "c", "h", "cpp", "hpp", "cs", "go", "rb", "php",
    "swift", "kt", "sh", "bash", "pl", "lua", "r", "sql",
    // markup and docs
    "html", "htm", "css", "scss", "xml", "md", "rst", "txt", "tex",
    // config and data serialization
    "json", "yaml", "yml", "toml", "ini", "cfg", "conf", "csv",
];

/// Pure predicate: is the path's extension (case-insensitive, after the last
/// `.` in the filename) in the fixed allow-list?
#[must_use]
pub fn is_text_like(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
