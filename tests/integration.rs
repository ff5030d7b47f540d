// Integration tests for the career-match CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify argument
// handling, exit codes and help output.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from any config in the caller's home or working directory.
fn career_match(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("career-match").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    career_match(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("career-match"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    career_match(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career recommendation"));
}

#[test]
fn predict_rejects_unknown_policy() {
    let dir = TempDir::new().expect("temp dir should be created");
    career_match(&dir)
        .args(["predict", "--skill", "python", "--policy", "blended"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn predict_rejects_unknown_education() {
    let dir = TempDir::new().expect("temp dir should be created");
    career_match(&dir)
        .args(["predict", "--skill", "python", "--education", "phd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown education level"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let dir = TempDir::new().expect("temp dir should be created");
    career_match(&dir)
        .args(["-q", "-v", "skills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_explicit_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    career_match(&dir)
        .args(["--config", "absent.toml", "skills"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}
