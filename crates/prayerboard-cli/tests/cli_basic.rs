//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway data
//! directory and verify outputs.

use std::process::Command;
use tempfile::TempDir;

const ADMIN: &str = "admin123";

/// Run a CLI command against an isolated data directory.
fn run_cli(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "prayerboard-cli", "--"])
        .args(args)
        .env("PRAYERBOARD_DATA_DIR", dir.path())
        .env_remove("PRAYERBOARD_API_KEY")
        .env_remove("PRAYERBOARD_ADMIN_PASSWORD")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn list_active(dir: &TempDir) -> Vec<serde_json::Value> {
    let (stdout, _, code) = run_cli(dir, &["prayer", "list"]);
    assert_eq!(code, 0, "prayer list failed");
    serde_json::from_str(&stdout).expect("list output is JSON")
}

fn list_pending(dir: &TempDir) -> Vec<serde_json::Value> {
    let (stdout, _, code) = run_cli(dir, &["moderate", "list", "--password", ADMIN]);
    assert_eq!(code, 0, "moderate list failed");
    serde_json::from_str(&stdout).expect("pending output is JSON")
}

#[test]
fn test_fresh_board_shows_seed_list() {
    let dir = TempDir::new().unwrap();
    let active = list_active(&dir);
    assert_eq!(active.len(), 4);
    assert_eq!(active[0]["isMain"], serde_json::Value::Bool(true));
}

#[test]
fn test_submit_lands_in_pending_not_active() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["prayer", "submit", "Pray for X"]);
    assert_eq!(code, 0, "submit failed");
    assert!(stdout.contains("Prayer submitted for approval:"));

    let pending = list_pending(&dir);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["isMain"], serde_json::Value::Bool(false));
    assert_eq!(pending[0]["prayedCount"], serde_json::json!(0));
    assert_eq!(list_active(&dir).len(), 4);
}

#[test]
fn test_approve_moves_submission_onto_board() {
    let dir = TempDir::new().unwrap();
    run_cli(&dir, &["prayer", "submit", "Pray for the campus"]);
    let pending = list_pending(&dir);
    let id = pending[0]["id"].as_str().unwrap();

    let (_, _, code) = run_cli(&dir, &["moderate", "approve", id, "--password", ADMIN]);
    assert_eq!(code, 0, "approve failed");

    assert!(list_pending(&dir).is_empty());
    assert_eq!(list_active(&dir).len(), 5);
}

#[test]
fn test_reject_drops_submission() {
    let dir = TempDir::new().unwrap();
    run_cli(&dir, &["prayer", "submit", "Not this one"]);
    let pending = list_pending(&dir);
    let id = pending[0]["id"].as_str().unwrap();

    let (_, _, code) = run_cli(&dir, &["moderate", "reject", id, "--password", ADMIN]);
    assert_eq!(code, 0, "reject failed");
    assert!(list_pending(&dir).is_empty());
    assert_eq!(list_active(&dir).len(), 4);
}

#[test]
fn test_wrong_password_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["prayer", "add", "text", "--password", "nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Incorrect password."));
}

#[test]
fn test_empty_text_is_rejected_before_the_store() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["prayer", "submit", "   "]);
    assert_ne!(code, 0);
    assert!(list_pending(&dir).is_empty());
}

#[test]
fn test_amen_increments_prayed_count() {
    let dir = TempDir::new().unwrap();
    let active = list_active(&dir);
    let id = active[0]["id"].as_str().unwrap();
    let before = active[0]["prayedCount"].as_u64().unwrap();

    let (_, _, code) = run_cli(&dir, &["prayer", "amen", id]);
    assert_eq!(code, 0, "amen failed");

    let after = list_active(&dir);
    assert_eq!(after[0]["prayedCount"].as_u64().unwrap(), before + 1);
}

#[test]
fn test_toggle_flips_only_the_addressed_prayer() {
    let dir = TempDir::new().unwrap();
    let active = list_active(&dir);
    let id = active[1]["id"].as_str().unwrap();

    let (_, _, code) = run_cli(&dir, &["prayer", "toggle", id, "--password", ADMIN]);
    assert_eq!(code, 0, "toggle failed");

    let after = list_active(&dir);
    // Both the seed feature and the toggled one are now featured.
    assert_eq!(after[0]["isMain"], serde_json::Value::Bool(true));
    assert_eq!(after[1]["isMain"], serde_json::Value::Bool(true));
}

#[test]
fn test_update_and_delete_roundtrip() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        &dir,
        &["prayer", "add", "Temporary request", "--password", ADMIN],
    );
    assert_eq!(code, 0, "add failed");
    assert!(stdout.contains("Prayer added:"));
    let active = list_active(&dir);
    let id = active.last().unwrap()["id"].as_str().unwrap().to_string();

    let (_, _, code) = run_cli(
        &dir,
        &["prayer", "update", &id, "Edited request", "--password", ADMIN],
    );
    assert_eq!(code, 0, "update failed");
    let active = list_active(&dir);
    assert_eq!(active.last().unwrap()["text"], "Edited request");

    let (_, _, code) = run_cli(
        &dir,
        &["prayer", "delete", &id, "--password", ADMIN, "--yes"],
    );
    assert_eq!(code, 0, "delete failed");
    assert_eq!(list_active(&dir).len(), 4);
}

#[test]
fn test_config_get_set_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["config", "get", "city"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Halifax");

    let (_, _, code) = run_cli(&dir, &["config", "set", "language", "es"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(&dir, &["config", "get", "language"]);
    assert_eq!(stdout.trim(), "es");

    let (stdout, _, code) = run_cli(&dir, &["config", "list"]);
    assert_eq!(code, 0);
    let listing: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(listing["language"], "es");

    let (_, _, code) = run_cli(&dir, &["config", "get", "nonsense"]);
    assert_ne!(code, 0);
}

#[test]
fn test_remind_set_status_clear() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["remind", "set", "07:30"]);
    assert_eq!(code, 0, "remind set failed");

    let (stdout, _, code) = run_cli(&dir, &["remind", "status"]);
    assert_eq!(code, 0, "remind status failed");
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["time"], "07:30");
    assert_eq!(status["scheduler"]["state"], "armed");

    let (_, _, code) = run_cli(&dir, &["remind", "clear"]);
    assert_eq!(code, 0, "remind clear failed");
    let (stdout, _, _) = run_cli(&dir, &["remind", "status"]);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["scheduler"]["state"], "idle");
}

#[test]
fn test_remind_rejects_bad_time() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["remind", "set", "25:99"]);
    assert_ne!(code, 0);
}

#[test]
fn test_translate_without_key_echoes_input() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(
        &dir,
        &["ai", "translate", "For the church.", "--to", "es"],
    );
    assert_eq!(code, 0, "translate failed");
    assert_eq!(stdout.trim(), "For the church.");
}

#[test]
fn test_sample_without_key_reports_configuration() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["ai", "sample", "For Jane."]);
    assert_eq!(code, 0, "sample failed");
    assert!(stdout.contains("API Key not configured"));
}
