//! End-to-end tests for the `ach-file-builder` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("ach-file-builder").unwrap()
}

fn write_batch(dir: &TempDir, contents: &Value) -> PathBuf {
    let path = dir.path().join("batch.json");
    std::fs::write(&path, serde_json::to_string_pretty(contents).unwrap()).unwrap();
    path
}

fn valid_batch() -> Value {
    json!({
        "originator_name": "Acme Inc",
        "originator_routing": "021000021",
        "company_id": "1234567890",
        "destination_routing": "021000021",
        "destination_bank_name": "Test Bank",
        "effective_date": "2025-01-15",
        "batch_description": "PAYROLL",
        "entries": [
            {
                "receiver_name": "John Doe",
                "receiver_routing": "021000021",
                "receiver_account": "123456789",
                "amount": "100.00",
                "individual_id": "EMP001"
            }
        ]
    })
}

#[test]
fn test_encode_writes_nacha_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write_batch(&dir, &valid_batch());

    let assert = cmd().arg(&path).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|line| line.len() == 94));
    assert!(lines[0].starts_with("101 "));
    assert!(lines[1].contains("PAYROLL"));
    assert!(lines[9].chars().all(|c| c == '9'));
}

#[test]
fn test_check_mode_is_silent_for_a_valid_batch() {
    let dir = TempDir::new().unwrap();
    let path = write_batch(&dir, &valid_batch());

    cmd()
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_validation_errors_fail_without_writing_a_file() {
    let mut batch = valid_batch();
    batch["originator_routing"] = json!("123456789");
    batch["entries"][0]["amount"] = json!("-5.00");

    let dir = TempDir::new().unwrap();
    let path = write_batch(&dir, &batch);

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: originator_routing"))
        .stderr(predicate::str::contains("error: entries[0].amount"))
        .stderr(predicate::str::contains("failed validation with 2 error(s)"));
}

#[test]
fn test_warnings_are_reported_but_do_not_block_encoding() {
    let mut batch = valid_batch();
    batch["entries"] = json!([
        {
            "receiver_name": "John Doe",
            "receiver_routing": "021000021",
            "receiver_account": "123456789",
            "amount": "600000.00"
        },
        {
            "receiver_name": "Jane Roe",
            "receiver_routing": "011401533",
            "receiver_account": "987654321",
            "amount": "600000.00"
        }
    ]);

    let dir = TempDir::new().unwrap();
    let path = write_batch(&dir, &batch);

    let assert = cmd()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: entries"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.lines().count(), 10);
}

#[test]
fn test_check_mode_reports_warnings_without_output() {
    let mut batch = valid_batch();
    batch["entries"][0]["amount"] = json!("2000000.00");

    let dir = TempDir::new().unwrap();
    let path = write_batch(&dir, &batch);

    cmd()
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("warning"));
}

#[test]
fn test_missing_input_argument() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_nonexistent_input_file() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("no-such-batch.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid batch file"));
}

#[test]
fn test_missing_required_field_is_a_parse_error() {
    let mut batch = valid_batch();
    batch.as_object_mut().unwrap().remove("company_id");

    let dir = TempDir::new().unwrap();
    let path = write_batch(&dir, &batch);

    cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid batch file"));
}

#[test]
fn test_unknown_option_is_rejected() {
    cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized option '--frobnicate'"));
}
