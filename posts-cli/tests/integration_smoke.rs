//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("posts").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("posts").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_serve_without_user_fails() {
    let mut cmd = Command::cargo_bin("posts").unwrap();
    cmd.arg("serve")
        .env_remove("DATABASE_URL")
        .env_remove("DB_USER")
        .current_dir(std::env::temp_dir());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DB_USER not set"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("posts").unwrap();
    cmd.arg("delete");

    cmd.assert().failure();
}
