//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a temporary state directory and
//! verify outputs. None of them start a watcher.

use std::path::Path;
use std::process::Command;

use chrono::{Duration, Utc};
use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pomodoro"))
        .args(args)
        .env("POMODORO_HOME", home)
        .env_remove("POMODORO_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_end_time(home: &Path, offset: Duration) {
    let end = Utc::now() + offset;
    std::fs::write(home.join(".pomodoro"), end.to_rfc3339()).unwrap();
}

#[test]
fn test_no_command_prints_usage() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &[]);
    assert_eq!(code, 0);
    assert!(stdout.contains("start"));
    assert!(stdout.contains("status"));
}

#[test]
fn test_unknown_command_fails_with_usage() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["pause"]);
    assert_eq!(code, 1);
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_status_without_timer_is_empty() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn test_status_shows_remaining_work() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(20));
    std::fs::write(home.path().join(".pomodoro_done"), "2\n").unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "2|▼ 20 work \n");
}

#[test]
fn test_status_shows_overdue() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(-15));

    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "0|▲ 10 !!!\n");
    assert_eq!(
        std::fs::read_to_string(home.path().join(".pomodoro_done")).unwrap(),
        "0"
    );
}

#[test]
fn test_status_json() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(-2));

    let (stdout, _, code) = run_cli(home.path(), &["status", "--json"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["phase"], "break");
    assert_eq!(json["minutes"], 3);
    assert_eq!(json["completed"], 0);
}

#[test]
fn test_stop_clears_timer() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(20));

    let (stdout, _, code) = run_cli(home.path(), &["stop"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Pomodoro stop!\n");
    assert_eq!(std::fs::read_to_string(home.path().join(".pomodoro")).unwrap(), "");

    let (stdout, _, _) = run_cli(home.path(), &["status"]);
    assert_eq!(stdout, "");
}

#[test]
fn test_clear_clears_timer() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(20));

    let (stdout, _, code) = run_cli(home.path(), &["clear"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Pomodoro cleared!\n");
}

#[test]
fn test_reset_zeroes_count() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".pomodoro_done"), "5").unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["reset"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Pomodoro reset!\n");
    assert_eq!(
        std::fs::read_to_string(home.path().join(".pomodoro_done")).unwrap(),
        "0"
    );
}

#[test]
fn test_cancel_after_completion_decrements() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(-1));
    std::fs::write(home.path().join(".pomodoro_done"), "3").unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["cancel"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Pomodoro cancel!\n");
    assert_eq!(
        std::fs::read_to_string(home.path().join(".pomodoro_done")).unwrap(),
        "2"
    );
}

#[test]
fn test_cancel_during_work_keeps_count() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(10));
    std::fs::write(home.path().join(".pomodoro_done"), "3").unwrap();

    let (_, _, code) = run_cli(home.path(), &["cancel"]);
    assert_eq!(code, 0);
    assert_eq!(
        std::fs::read_to_string(home.path().join(".pomodoro_done")).unwrap(),
        "3"
    );
}

#[test]
fn test_corrupt_count_is_fatal() {
    let home = TempDir::new().unwrap();
    write_end_time(home.path(), Duration::minutes(10));
    std::fs::write(home.path().join(".pomodoro_done"), "many").unwrap();

    let (stdout, stderr, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.contains("error:"));
}
