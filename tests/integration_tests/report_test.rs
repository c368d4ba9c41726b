// tests/integration_tests/report_test.rs
use super::common::{create_test_file, fixed_clock};
use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use txtstat::core::aggregate::assemble_report;
use txtstat::core::count::count_file;
use txtstat::core::report::write_report;
use txtstat::core::walk::collect_files;
use txtstat::models::FileRecord;

#[test]
fn test_report_shape_and_ordering() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "zebra.md", "last\n")?;
    create_test_file(temp_dir.path(), "apple.md", "first one\n")?;

    let paths = collect_files(temp_dir.path())?;
    let records: Vec<FileRecord> = paths.iter().map(|path| count_file(path)).collect();
    let report = assemble_report(temp_dir.path(), records, &fixed_clock());

    let out = temp_dir.path().join("report.json");
    write_report(&report, &out)?;

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;

    assert_eq!(json["generated_at"], "2024-06-01T12:30:05");
    assert_eq!(
        json["root"],
        temp_dir.path().to_str().expect("utf-8 temp path"),
        "Root should be the absolute scan path"
    );
    assert_eq!(json["totals"]["files"], 2);

    let files = json["files"].as_array().expect("files should be an array");
    assert_eq!(files.len(), 2);
    assert!(
        files[0]["path"]
            .as_str()
            .expect("path should be a string")
            .ends_with("apple.md"),
        "File records should be sorted ascending by path"
    );

    Ok(())
}

#[test]
fn test_non_ascii_preserved_literally() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "café.md", "naïve text\n")?;

    let paths = collect_files(temp_dir.path())?;
    let records: Vec<FileRecord> = paths.iter().map(|path| count_file(path)).collect();
    let report = assemble_report(temp_dir.path(), records, &fixed_clock());

    let out = temp_dir.path().join("report.json");
    write_report(&report, &out)?;

    let raw = fs::read_to_string(&out)?;
    assert!(
        raw.contains("café.md"),
        "Non-ASCII in paths should not be escaped"
    );
    assert!(!raw.contains("\\u00e9"), "No unicode escapes in the output");

    Ok(())
}

#[test]
fn test_reruns_agree_on_everything_but_timestamp() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "one.md", "a b c\n")?;
    create_test_file(temp_dir.path(), "two.txt", "d e\nf\n")?;

    let run = || -> Result<serde_json::Value> {
        let paths = collect_files(temp_dir.path())?;
        let records: Vec<FileRecord> = paths.iter().map(|path| count_file(path)).collect();
        let report = assemble_report(temp_dir.path(), records, &fixed_clock());
        Ok(serde_json::to_value(&report)?)
    };

    let first = run()?;
    let second = run()?;
    assert_eq!(first["files"], second["files"]);
    assert_eq!(first["totals"], second["totals"]);

    Ok(())
}
