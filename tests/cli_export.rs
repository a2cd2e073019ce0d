//! Export flows: CSV and JSON dumps of the ledger.

use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, ext: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "shiftledger_exp_{}_{}.{}",
        std::process::id(),
        name,
        ext
    ));
    let _ = fs::remove_file(&path);
    path
}

fn seeded_ledger(name: &str) -> PathBuf {
    let ledger = temp_file(name, "json");
    let start = Utc::now() - Duration::hours(8);

    let document = json!({
        "100": [
            { "tipo": "entrada", "fecha": start.to_rfc3339(), "username": "ana" },
            { "tipo": "salida", "fecha": (start + Duration::hours(4)).to_rfc3339(), "username": "ana" },
        ],
    });
    fs::write(&ledger, document.to_string()).unwrap();
    ledger
}

fn bin(ledger: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("shiftledger").unwrap();
    cmd.args(["--ledger", ledger.to_str().unwrap()]);
    cmd
}

#[test]
fn csv_export_writes_header_and_rows() {
    let ledger = seeded_ledger("csv");
    let out = temp_file("csv_out", "csv");

    bin(&ledger)
        .args(["export", "--format", "csv", "--file", out.to_str().unwrap(), "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("csv export completed"));

    let written = fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next().unwrap(), "user_id,username,kind,timestamp");
    assert_eq!(written.lines().count(), 3);
    assert!(written.contains("100,ana,entrada,"));

    let _ = fs::remove_file(&ledger);
    let _ = fs::remove_file(&out);
}

#[test]
fn json_export_is_a_parsable_row_list() {
    let ledger = seeded_ledger("json");
    let out = temp_file("json_out", "json");

    bin(&ledger)
        .args(["export", "--format", "json", "--file", out.to_str().unwrap(), "--force"])
        .assert()
        .success();

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["user_id"], "100");
    assert_eq!(rows[1]["kind"], "salida");

    let _ = fs::remove_file(&ledger);
    let _ = fs::remove_file(&out);
}

#[test]
fn export_requires_an_absolute_path() {
    let ledger = seeded_ledger("relative");

    bin(&ledger)
        .args(["export", "--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));

    let _ = fs::remove_file(&ledger);
}

#[test]
fn export_scoped_to_an_empty_window_writes_nothing() {
    let ledger = seeded_ledger("scope");
    let out = temp_file("scope_out", "csv");

    // bogus user id → no rows, no file
    bin(&ledger)
        .args([
            "export",
            "--format",
            "csv",
            "--file",
            out.to_str().unwrap(),
            "--user",
            "999",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attendance records"));

    assert!(!out.exists());

    let _ = fs::remove_file(&ledger);
}
