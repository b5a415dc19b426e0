//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! runs against its own temporary home directory so state never leaks
//! between tests.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "-p", "bloomtime-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("BLOOMTIME_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn json(s: &str) -> serde_json::Value {
    serde_json::from_str(s).expect("stdout should be JSON")
}

fn add_task(home: &Path, title: &str, minutes: &str) -> String {
    let (stdout, stderr, code) = run_cli(home, &["task", "add", title, "--duration", minutes]);
    assert_eq!(code, 0, "task add failed: {stderr}");
    json(&stdout)["id"].as_str().expect("task id").to_string()
}

#[test]
fn task_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let id = add_task(home.path(), "Read chapter 1", "25");

    let (stdout, _, code) = run_cli(home.path(), &["task", "list"]);
    assert_eq!(code, 0, "task list failed");
    let tasks = json(&stdout);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], id.as_str());
    assert_eq!(tasks[0]["status"], "pending");
    assert_eq!(tasks[0]["duration_min"], 25);
}

#[test]
fn start_then_complete_credits_stats_once() {
    let home = tempfile::tempdir().unwrap();
    let id = add_task(home.path(), "Flashcards", "25");

    let (stdout, _, code) = run_cli(home.path(), &["task", "start", &id]);
    assert_eq!(code, 0, "task start failed");
    assert_eq!(json(&stdout)["type"], "TaskStarted");

    let (stdout, _, code) = run_cli(home.path(), &["task", "complete"]);
    assert_eq!(code, 0, "task complete failed");
    assert!(stdout.contains("\"TaskCompleted\""));

    let (stdout, _, code) = run_cli(home.path(), &["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    let out = json(&stdout);
    assert_eq!(out["stats"]["total_points"], 10);
    assert_eq!(out["stats"]["tasks_completed"], 1);

    // The finished task left no active timer behind.
    let (stdout, _, code) = run_cli(home.path(), &["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    assert!(stdout.contains("NoActiveTimer"));
}

#[test]
fn superseded_task_can_be_restarted_and_completed() {
    let home = tempfile::tempdir().unwrap();
    let first = add_task(home.path(), "Essay draft", "25");
    let second = add_task(home.path(), "Math drills", "25");

    let (_, _, code) = run_cli(home.path(), &["task", "start", &first]);
    assert_eq!(code, 0, "first start failed");
    // Starting the second task parks the first one mid-run.
    let (_, _, code) = run_cli(home.path(), &["task", "start", &second]);
    assert_eq!(code, 0, "second start failed");

    // The parked task picks up where it left off.
    let (stdout, stderr, code) = run_cli(home.path(), &["task", "start", &first]);
    assert_eq!(code, 0, "restart of a parked task failed: {stderr}");
    assert_eq!(json(&stdout)["type"], "TaskResumed");

    let (stdout, _, code) = run_cli(home.path(), &["task", "complete"]);
    assert_eq!(code, 0, "task complete failed");
    assert!(stdout.contains("\"TaskCompleted\""));

    let (stdout, _, code) = run_cli(home.path(), &["task", "get", &first]);
    assert_eq!(code, 0, "task get failed");
    assert_eq!(json(&stdout)["status"], "completed");
}

#[test]
fn starting_the_active_task_again_is_not_an_error() {
    let home = tempfile::tempdir().unwrap();
    let id = add_task(home.path(), "Vocabulary", "25");

    let (_, _, code) = run_cli(home.path(), &["task", "start", &id]);
    assert_eq!(code, 0, "start failed");
    let (stdout, _, code) = run_cli(home.path(), &["task", "start", &id]);
    assert_eq!(code, 0, "re-start of the active task failed");
    assert_eq!(json(&stdout)["type"], "StateSnapshot");
}

#[test]
fn stats_show_reports_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    let out = json(&stdout);
    assert_eq!(out["stats"]["total_points"], 0);
    assert_eq!(out["stats"]["daily_goal"], 3);
    assert_eq!(out["level"]["level"], 1);
}

#[test]
fn config_set_then_get_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "tasks.duration_min", "45"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "tasks.duration_min"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "45");
}

#[test]
fn unknown_task_id_fails_with_an_error() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["task", "start", "task-0-missing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Task not found"));
}
