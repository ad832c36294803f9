//! Integration tests for CLI functionality

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Get path to compiled binary
fn circlectx_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("circlectx")
}

/// Command with an isolated home directory and no credentials in the environment
fn isolated_command(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(circlectx_bin());
    cmd.env("HOME", home)
        .env_remove("CIRCLECI_CLI_TOKEN")
        .env_remove("CIRCLECI_CLI_HOST");
    cmd
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let output = Command::new(circlectx_bin())
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Manage CircleCI contexts and their environment variables"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let output = Command::new(circlectx_bin())
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("circlectx"));
}

/// Test context subcommand help lists every action
#[test]
fn test_context_help_lists_actions() {
    Command::new(circlectx_bin())
        .args(["context", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("store-secret"))
                .and(predicate::str::contains("remove-secret")),
        );
}

/// Test invalid output format argument
#[test]
fn test_invalid_output_format() {
    Command::new(circlectx_bin())
        .args(["context", "list", "gh", "my-org", "-o", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

/// Test missing positional arguments are rejected
#[test]
fn test_missing_org_argument() {
    Command::new(circlectx_bin())
        .args(["context", "list", "gh"])
        .assert()
        .failure();
}

/// Test that a subcommand is required
#[test]
fn test_missing_subcommand() {
    Command::new(circlectx_bin()).assert().failure();
}

/// Test missing token produces a helpful error before any request is made
#[test]
fn test_missing_token() {
    let home = tempfile::tempdir().unwrap();

    isolated_command(home.path())
        .args(["--batch", "context", "list", "gh", "my-org"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("No API token")
                .and(predicate::str::contains("CIRCLECI_CLI_TOKEN")),
        );
}

/// Test corrupt config file is reported as a configuration error
#[test]
fn test_corrupt_config_file() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".circleci");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("cli.yml"), "token: [unterminated").unwrap();

    isolated_command(home.path())
        .args(["--batch", "context", "list", "gh", "my-org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
