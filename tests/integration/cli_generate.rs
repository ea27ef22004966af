//! End-to-end tests of the `visgen` binary

use crate::integration::test_utils::fixture_path;
use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn visgen(workspace: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_visgen"));
    command
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .env("XDG_CONFIG_HOME", workspace.join("xdg"))
        .env_remove("VISGEN_ENV")
        .env_remove("VISGEN__OUTPUT__SORT_KEYS")
        .env_remove("VISGEN__OUTPUT__PRETTY");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().unwrap()
}

/// A workspace holding both fixture files.
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in ["viz.yaml", "dashboard.yaml"] {
        std::fs::copy(fixture_path(name), temp.path().join(name)).unwrap();
    }
    temp
}

const PERFORMANCE: &[&str] = &[
    "--viz",
    "viz.yaml",
    "--viz-name",
    "opendaylight-test-performance",
    "--dashboard",
    "dashboard.yaml",
    "--dashboard-index",
    "1",
];

fn generate_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["generate"];
    args.extend_from_slice(PERFORMANCE);
    args.extend_from_slice(extra);
    args
}

#[test]
fn test_generate_prints_vis_state() {
    let temp = workspace();
    let output = visgen(temp.path(), &generate_args(&[]), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n    \"title\""), "got: {stdout}");
    let state: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(state["title"], json!("Southbound throughput"));
    assert_eq!(state["aggs"].as_array().unwrap().len(), 2);
}

#[test]
fn test_generate_emit_both_compact() {
    let temp = workspace();
    let output = visgen(
        temp.path(),
        &generate_args(&["--emit", "both", "--compact"]),
        &[],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let both: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(both["intermediate"]["aggs"]["2"]["schema"], json!("segment"));
    assert_eq!(both["visState"]["aggs"][1]["type"], json!("terms"));
}

#[test]
fn test_generate_vis_state_string() {
    let temp = workspace();
    let output = visgen(temp.path(), &generate_args(&["--vis-state-string"]), &[]);
    assert!(output.status.success());

    let outer: Value = serde_json::from_slice(&output.stdout).unwrap();
    let inner: Value = serde_json::from_str(outer.as_str().unwrap()).unwrap();
    assert_eq!(inner["type"], json!("line"));
}

#[test]
fn test_generate_writes_out_file() {
    let temp = workspace();
    let output = visgen(temp.path(), &generate_args(&["--out", "state.json"]), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Wrote "));

    let written = std::fs::read_to_string(temp.path().join("state.json")).unwrap();
    let state: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(state["params"]["valueAxes"][0]["id"], json!("ValueAxis-1"));
}

#[test]
fn test_sort_keys_from_environment() {
    let temp = workspace();
    let output = visgen(
        temp.path(),
        &generate_args(&[]),
        &[("VISGEN__OUTPUT__SORT_KEYS", "true")],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n    \"aggs\""), "got: {stdout}");
}

#[test]
fn test_check_reports_counts() {
    let temp = workspace();
    let mut args = vec!["check"];
    args.extend_from_slice(PERFORMANCE);
    let output = visgen(temp.path(), &args, &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "ok: 1 value axes, 1 series params, 2 aggregations"
    );
}

#[test]
fn test_incomplete_configuration_fails() {
    let temp = workspace();
    // No dashboard: title, desc and id stay unresolved.
    let output = visgen(
        temp.path(),
        &[
            "generate",
            "--viz",
            "viz.yaml",
            "--viz-name",
            "opendaylight-test-performance",
        ],
        &[],
    );
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration incomplete"), "stderr: {stderr}");
    assert!(stderr.contains("title"), "stderr: {stderr}");
}

#[test]
fn test_missing_viz_file_fails() {
    let temp = workspace();
    let output = visgen(temp.path(), &["check", "--viz", "absent.yaml"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.yaml"));
}
