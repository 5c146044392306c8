//! CLI smoke tests using the compiled binary.

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn logsift() -> Command {
    Command::cargo_bin("logsift").unwrap()
}

#[test]
fn help_exits_zero() {
    logsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("crashes"))
        .stdout(predicate::str::contains("packages"));
}

#[test]
fn crashes_over_fixture_dir_json() {
    let dir = TempDir::new().unwrap();
    let mut file = fs::File::create(dir.path().join("safari.ips")).unwrap();
    file.write_all(
        br#"{"process": "Safari", "exception": {"values": [{"type": "EXC_CRASH", "value": "boom"}]}}"#,
    )
    .unwrap();

    logsift()
        .args(["crashes", "--dir"])
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"process\": \"Safari\""))
        .stdout(predicate::str::contains("\"exception_type\": \"EXC_CRASH\""));
}

#[test]
fn crashes_over_empty_dir_reports_none() {
    let dir = TempDir::new().unwrap();

    logsift()
        .args(["crashes", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No crash reports found."));
}

#[test]
fn packages_over_fixture_dir_text() {
    let dir = TempDir::new().unwrap();
    let mut file = fs::File::create(dir.path().join("brew.log")).unwrap();
    file.write_all(b"2024-01-15 10:30:45: installed wget\n").unwrap();

    logsift()
        .args(["packages", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("installed wget"));
}

#[test]
fn packages_limit_caps_output() {
    let dir = TempDir::new().unwrap();
    let mut file = fs::File::create(dir.path().join("brew.log")).unwrap();
    for i in 0..10 {
        writeln!(file, "2024-01-{:02} 00:00:00: entry {i}", i + 1).unwrap();
    }

    logsift()
        .args(["packages", "--dir"])
        .arg(dir.path())
        .args(["-n", "3", "-o", "compact"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 3));
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn check_fails_off_macos() {
    logsift()
        .args(["check", "--json"])
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("\"macos_compatible\": false"));
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn show_without_log_tool_is_distinct_error() {
    // Off macOS there is no `log` executable; the CLI must surface the
    // tool-not-found error with its dedicated exit code.
    logsift()
        .args(["show", "kernel"])
        .env("PATH", "/nonexistent")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unified Logging System not available"));
}
