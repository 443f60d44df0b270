//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.
//! DOLCE_ENV=dev keeps them out of the production data directory.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dolce-cli", "--"])
        .args(args)
        .env("DOLCE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_achievements_list() {
    let (stdout, _, code) = run_cli(&["achievements", "list"]);
    assert_eq!(code, 0, "achievements list failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("achievements list is not JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(8));
}

#[test]
fn test_stats_show() {
    let (stdout, _, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stats is not JSON");
    assert!(parsed.get("totalViews").is_some());
}

#[test]
fn test_track_view() {
    let (stdout, _, code) = run_cli(&["track", "view", "tiramisu", "italy"]);
    assert_eq!(code, 0, "track view failed");
    assert!(stdout.contains("tiramisu"));
}

#[test]
fn test_favorite_toggle_and_list() {
    let (_, _, code) = run_cli(&["favorite", "toggle", "cli-test-dessert"]);
    assert_eq!(code, 0, "favorite toggle failed");
    let (stdout, _, code) = run_cli(&["favorite", "list"]);
    assert_eq!(code, 0, "favorite list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
    // Second toggle restores the original state.
    let (_, _, code) = run_cli(&["favorite", "toggle", "cli-test-dessert"]);
    assert_eq!(code, 0, "favorite untoggle failed");
}

#[test]
fn test_timer_status_without_timer() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}
