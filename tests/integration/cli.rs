//! Binary-level tests: flags, log lines, and JSON report

use std::process::Command;

use super::helpers::*;

fn pm_translate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pm-translate"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_prints_per_file_lines_and_summary() {
    let temp_dir = init_plugin();
    let root = temp_dir.path();
    seed_sample_plugin(root);

    let output = pm_translate()
        .arg("--root")
        .arg(root)
        .output()
        .expect("Failed to run pm-translate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("command: status → pm-status.md"), "{stdout}");
    assert!(stdout.contains("agent: planner → planner.md"), "{stdout}");
    assert!(stdout.contains("Done! Commands: 2, Agents: 2"), "{stdout}");
    assert!(stderr.contains("Skipping command draft (no description)"), "{stderr}");
}

#[test]
fn test_cli_json_report() {
    let temp_dir = init_plugin();
    let root = temp_dir.path();
    seed_sample_plugin(root);

    let output = pm_translate()
        .arg("--root")
        .arg(root)
        .arg("--json")
        .output()
        .expect("Failed to run pm-translate");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(json["commands"], 2);
    assert_eq!(json["agents"], 2);
    assert_eq!(json["skipped"], 1);
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let temp_dir = init_plugin();
    let root = temp_dir.path();
    seed_sample_plugin(root);

    let output = pm_translate()
        .arg("--root")
        .arg(root)
        .arg("--dry-run")
        .output()
        .expect("Failed to run pm-translate");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Dry run done!"));
    assert!(!opencode_dir(root).exists());
}

#[test]
fn test_cli_fails_without_source_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = pm_translate()
        .arg("--root")
        .arg(temp_dir.path())
        .output()
        .expect("Failed to run pm-translate");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to translate plugin"));
}
