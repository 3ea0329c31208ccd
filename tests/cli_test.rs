//! CLI binary integration tests using assert_cmd
//!
//! These tests invoke the actual binary and verify command-line behavior.
//! Network calls are pointed at an unreachable local port, so the sync
//! surface exercises the graceful-degradation path.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio-terminal"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive terminal portfolio"))
        .stdout(predicate::str::contains("--user"))
        .stdout(predicate::str::contains("--api-url"))
        .stdout(predicate::str::contains("--oracle-url"))
        .stdout(predicate::str::contains("sync"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio-terminal"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_sync_with_unreachable_api_degrades_to_empty() {
    // Port 9 (discard) refuses connections; the client absorbs the failure
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio-terminal"));
    cmd.args(["--api-url", "http://127.0.0.1:9", "sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio Project Index"))
        .stdout(predicate::str::contains("User: enterk0d3"))
        .stdout(predicate::str::contains("Projects: 0"));
}

#[test]
fn test_cli_sync_honors_user_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio-terminal"));
    cmd.args(["--api-url", "http://127.0.0.1:9", "--user", "someone-else", "sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User: someone-else"));
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio-terminal"));
    cmd.arg("frobnicate").assert().failure().stderr(predicate::str::contains("unrecognized"));
}
