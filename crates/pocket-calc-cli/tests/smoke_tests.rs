//! Smoke tests for the pocket-calc CLI
//!
//! These tests verify basic CLI functionality works correctly.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the pocket-calc binary
fn pocket_calc() -> Command {
    let mut cmd = Command::cargo_bin("pocket-calc").expect("pocket-calc binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocket_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocket_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_args_shows_help() {
    pocket_calc().assert().failure(); // Requires a subcommand
}

// ============================================================================
// Eval Tests
// ============================================================================

#[test]
fn test_eval_chained_operations() {
    pocket_calc()
        .args(["eval", "5", "+", "3", "+", "2", "="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_eval_formats_thousands() {
    pocket_calc()
        .args(["eval", "1234567"])
        .assert()
        .success()
        .stdout("1,234,567\n");
}

#[test]
fn test_eval_raw() {
    pocket_calc()
        .args(["eval", "--raw", "1234567"])
        .assert()
        .success()
        .stdout("1234567\n");
}

#[test]
fn test_eval_raw_after_tokens() {
    pocket_calc()
        .args(["eval", "1234567", "--raw"])
        .assert()
        .success()
        .stdout("1234567\n");
}

#[test]
fn test_eval_quiet_after_tokens() {
    pocket_calc()
        .args(["eval", "5", "-q"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_eval_hyphen_run_after_separator() {
    pocket_calc()
        .args(["eval", "9", "--", "-4="])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_eval_subtraction_token() {
    pocket_calc()
        .args(["eval", "9", "-", "4", "Enter"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_eval_division_by_zero() {
    pocket_calc()
        .args(["eval", "7/0="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_eval_trace() {
    pocket_calc()
        .args(["eval", "--trace", "6*7", "Enter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter"))
        .stdout(predicate::str::ends_with("42\n"));
}

#[test]
fn test_eval_trace_after_tokens() {
    pocket_calc()
        .args(["eval", "6*7", "Enter", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter"))
        .stdout(predicate::str::ends_with("42\n"));
}

#[test]
fn test_eval_unknown_key_fails() {
    pocket_calc()
        .args(["eval", "1", "+", "Tab"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_eval_requires_tokens() {
    pocket_calc().arg("eval").assert().failure();
}

// ============================================================================
// Repl Tests
// ============================================================================

#[test]
fn test_repl_session() {
    pocket_calc()
        .arg("repl")
        .write_stdin("1200\n* 3\n- 1.5\nEnter\n")
        .assert()
        .success()
        .stdout("1,200\n3\n1.5\n3,598.5\n");
}

#[test]
fn test_repl_unknown_key_continues() {
    pocket_calc()
        .arg("repl")
        .write_stdin("4 ? 2\nexit\n9\n")
        .assert()
        .success()
        .stdout("42\n")
        .stderr(predicate::str::contains("Unknown key"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    pocket_calc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"press_feedback_ms\": 200"))
        .stdout(predicate::str::contains("\"error_auto_clear_ms\": 2000"));
}

#[test]
fn test_config_file_changes_separator() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("calc.json");
    fs::write(&path, r#"{"group_separator": " "}"#).unwrap();

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .args(["eval", "1000000"])
        .assert()
        .success()
        .stdout("1 000 000\n");
}

#[test]
fn test_config_file_disables_grouping() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("calc.json");
    fs::write(&path, r#"{"group_separator": null}"#).unwrap();

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .args(["eval", "1000000"])
        .assert()
        .success()
        .stdout("1000000\n");
}

#[test]
fn test_config_file_invalid_separator() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("calc.json");
    fs::write(&path, r#"{"group_separator": "."}"#).unwrap();

    pocket_calc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file_missing() {
    let temp = TempDir::new().unwrap();

    pocket_calc()
        .arg("--config")
        .arg(temp.path().join("absent.json"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn test_debug_logs_go_to_stderr() {
    pocket_calc()
        .args(["-vv", "eval", "2", "+", "2", "="])
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("DEBUG"));
}
