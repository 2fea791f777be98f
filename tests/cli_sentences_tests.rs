//! E2E tests for the `sentences` subcommand.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn pictocomm_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pictocomm")
}

fn write_history(content: &str) -> (std::path::PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("sentences.json");
    fs::write(&path, content).expect("Failed to write sentences file");
    (path, dir)
}

const SAMPLE_HISTORY: &str = r#"[
  {
    "id": "11111111-2222-3333-4444-555555555555",
    "pictogram_ids": ["1", "9", "21"],
    "text": "Yo Quiero Helado",
    "created_at": "2025-01-01T12:00:00Z",
    "times_used": 2
  },
  {
    "id": "66666666-7777-8888-9999-000000000000",
    "pictogram_ids": ["1", "13", "40"],
    "text": "Yo Voy Casa",
    "created_at": "2025-01-02T09:30:00Z"
  }
]"#;

#[test]
fn test_sentences_list_json() {
    let (path, _dir) = write_history(SAMPLE_HISTORY);

    let output = Command::new(pictocomm_bin())
        .args(["sentences", "list", "--json", "--file"])
        .arg(&path)
        .output()
        .expect("Failed to run pictocomm");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(json["count"], 2);
    let sentences = json["sentences"].as_array().unwrap();
    assert_eq!(sentences[0]["text"], "Yo Quiero Helado");
    assert_eq!(sentences[0]["pictogram_count"], 3);
    assert_eq!(sentences[0]["times_used"], 2);
    // Missing counter in the stored record defaults to zero.
    assert_eq!(sentences[1]["times_used"], 0);
}

#[test]
fn test_sentences_list_missing_file_is_empty_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let output = Command::new(pictocomm_bin())
        .args(["sentences", "list", "--json", "--file"])
        .arg(&path)
        .output()
        .expect("Failed to run pictocomm");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 0);
}

#[test]
fn test_sentences_list_text_output() {
    let (path, _dir) = write_history(SAMPLE_HISTORY);

    let output = Command::new(pictocomm_bin())
        .args(["sentences", "list", "--file"])
        .arg(&path)
        .output()
        .expect("Failed to run pictocomm");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Yo Quiero Helado"));
    assert!(stdout.contains("2 sentence(s)"));
}

#[test]
fn test_sentences_list_corrupt_file_fails() {
    let (path, _dir) = write_history("not json at all");

    let output = Command::new(pictocomm_bin())
        .args(["sentences", "list", "--file"])
        .arg(&path)
        .output()
        .expect("Failed to run pictocomm");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse sentences file"));
}
