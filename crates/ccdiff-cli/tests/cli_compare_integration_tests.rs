//! CLI compare integration tests
//!
//! These tests run the built binary against temporary export trees and
//! check the report on stdout and the exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const VERDICT_DIFFERENCES: &str = "Semantic differences detected in CCD configuration outputs.";
const VERDICT_IDENTICAL: &str =
    "No semantic differences detected between CCD configuration outputs.";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn setup_trees() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

fn run(base: &Path, head: &Path, extra: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_ccdiff-cli");
    Command::new(cli_bin)
        .arg(base)
        .arg(head)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_identical_trees_exit_zero() {
    let (base, head) = setup_trees();
    write(base.path(), "CaseField/CaseField.json", r#"[{"ID":"f1","Label":"First"}]"#);
    write(head.path(), "CaseField/CaseField.json", r#"[{"Label":"First","ID":"f1"}]"#);

    let output = run(base.path(), head.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), format!("{}\n", VERDICT_IDENTICAL));
}

#[test]
fn test_id_difference_reported_as_missing_and_unexpected() {
    let (base, head) = setup_trees();
    write(base.path(), "x.json", r#"[{"ID":"1","Name":"A","Comment":"junk"}]"#);
    write(head.path(), "x.json", r#"[{"ID":"2","Name":"A"}]"#);

    let output = run(base.path(), head.path(), &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Differences found in x.json\n"));
    assert!(out.contains("  Missing entries (1):\n"));
    assert!(out.contains("  Unexpected entries (1):\n"));
    assert!(out.contains("closest match"));
    assert!(!out.contains("Comment"), "ignored field must not be shown");
    assert!(out.ends_with(&format!("{}\n", VERDICT_DIFFERENCES)));
}

#[test]
fn test_complex_type_mappings_ignore_ids() {
    let (base, head) = setup_trees();
    let rel = "CaseEventToComplexTypes/event.json";
    write(base.path(), rel, r#"[{"ID":"1","Name":"A","Comment":"junk"}]"#);
    write(head.path(), rel, r#"[{"ID":"2","Name":"A"}]"#);

    let output = run(base.path(), head.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    assert_eq!(stdout(&output), format!("{}\n", VERDICT_IDENTICAL));
}

#[test]
fn test_file_only_in_base_fails_run() {
    let (base, head) = setup_trees();
    write(base.path(), "shared.json", r#"[{"Name":"A"}]"#);
    write(head.path(), "shared.json", r#"[{"Name":"A"}]"#);
    write(base.path(), "extra/only_base.json", "[]");

    let output = run(base.path(), head.path(), &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        out.starts_with("Files only in base:\n  extra/only_base.json\n\n"),
        "stdout: {}",
        out
    );
    assert!(!out.contains("Differences found in"));
}

#[test]
fn test_file_only_in_head_fails_run() {
    let (base, head) = setup_trees();
    write(head.path(), "new/only_head.json", "[]");

    let output = run(base.path(), head.path(), &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        out.starts_with("Files only in head:\n  new/only_head.json\n\n"),
        "stdout: {}",
        out
    );
}

#[test]
fn test_non_production_file_is_skipped() {
    let (base, head) = setup_trees();
    write(base.path(), "foo_nonprod.json", r#"[{"Name":"only here"}]"#);
    write(
        base.path(),
        "AuthorisationCaseField/Roles-NONPROD.json",
        "[]",
    );

    let output = run(base.path(), head.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{}\n", VERDICT_IDENTICAL));
}

#[test]
fn test_neutral_defaults_do_not_count() {
    let (base, head) = setup_trees();
    let with_defaults = concat!(
        r#"[{"ID":"e","Publish":"N","ShowSummary":"N","#,
        r#""SecurityClassification":"Public","DisplayOrder":1}]"#,
    );
    write(base.path(), "CaseEvent.json", with_defaults);
    write(head.path(), "CaseEvent.json", r#"{"ID":"e","DisplayOrder":7}"#);

    let output = run(base.path(), head.path(), &[]);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
}

#[test]
fn test_ignore_field_flag_is_repeatable() {
    let (base, head) = setup_trees();
    write(base.path(), "x.json", r#"[{"Name":"A","LiveFrom":"2017","Owner":"x"}]"#);
    write(head.path(), "x.json", r#"[{"Name":"A","LiveFrom":"2024","Owner":"y"}]"#);

    let strict = run(base.path(), head.path(), &["--ignore-field", "LiveFrom"]);
    assert_eq!(strict.status.code(), Some(1));

    let relaxed = run(
        base.path(),
        head.path(),
        &["--ignore-field", "LiveFrom", "--ignore-field", "Owner"],
    );
    assert_eq!(
        relaxed.status.code(),
        Some(0),
        "stdout: {}",
        stdout(&relaxed)
    );
}

#[test]
fn test_duplicate_rows_are_differences() {
    let (base, head) = setup_trees();
    write(base.path(), "x.json", r#"[{"Name":"A"},{"Name":"A"}]"#);
    write(head.path(), "x.json", r#"[{"Name":"A"}]"#);

    let output = run(base.path(), head.path(), &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("  Missing entries (1):\n"));
    assert!(!out.contains("Unexpected entries"));
    // the only candidate is identical, so no closest match is offered
    assert!(!out.contains("closest match"));
}

#[test]
fn test_max_printed_truncates_sections() {
    let (base, head) = setup_trees();
    write(
        base.path(),
        "x.json",
        r#"[{"Name":"A"},{"Name":"B"},{"Name":"C"}]"#,
    );
    write(head.path(), "x.json", "[]");

    let output = run(base.path(), head.path(), &["--max-printed", "1"]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("  Missing entries (3):\n    1)\n"));
    assert!(out.contains("    ... 2 more not shown\n"));
}

#[test]
fn test_missing_root_exits_two() {
    let (base, _head) = setup_trees();
    let absent = base.path().join("does-not-exist");

    let output = run(base.path(), &absent, &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Head directory not found:"));
}

#[test]
fn test_root_that_is_a_file_exits_two() {
    let (base, head) = setup_trees();
    write(base.path(), "plain.json", "[]");

    let output = run(&base.path().join("plain.json"), head.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Base directory not found:"));
}

#[test]
fn test_malformed_json_aborts_run() {
    let (base, head) = setup_trees();
    write(base.path(), "broken.json", "[{\"Name\":");
    write(head.path(), "broken.json", "[]");

    let output = run(base.path(), head.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Failed to parse JSON from"));
    assert!(!stdout(&output).contains(VERDICT_IDENTICAL));
}

#[test]
fn test_scalar_top_level_aborts_run() {
    let (base, head) = setup_trees();
    write(base.path(), "scalar.json", "42");
    write(head.path(), "scalar.json", "42");

    let output = run(base.path(), head.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported JSON structure"));
}
