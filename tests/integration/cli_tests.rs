//! Integration tests for the dockup CLI skeleton

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn dockup() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockup"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // clap with arg_required_else_help shows help on stderr and exits 2
    dockup().assert().code(2).stderr(predicate::str::contains(
        "Docker provisioning for CI hosts",
    ));
}

#[test]
fn test_cli_help_flag_shows_help() {
    dockup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    dockup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dockup"));
}

#[test]
fn test_version_command_shows_version() {
    dockup()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "dockup {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let assert = dockup().arg("version").arg("--json").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let parsed: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("version --json must emit valid JSON");
    assert_eq!(
        parsed.get("version").and_then(serde_json::Value::as_str),
        Some(env!("CARGO_PKG_VERSION"))
    );
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_provision_command() {
    dockup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provision"));
}

#[test]
fn test_help_shows_doctor_command() {
    dockup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_provision_help_describes_the_sequence() {
    dockup()
        .args(["provision", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smoke-test"));
}

#[test]
fn test_doctor_help_describes_inspection() {
    dockup()
        .args(["doctor", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("without changing anything"));
}

#[test]
fn test_unknown_subcommand_fails() {
    dockup()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// --- Provision takes no positional arguments ---

#[test]
fn test_provision_rejects_positional_arguments() {
    dockup()
        .args(["provision", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
