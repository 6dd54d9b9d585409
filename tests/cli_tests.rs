//! Binary-level tests for argument handling and failure reporting.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("mod_portal_release").expect("binary builds");
    // Isolate from any CI environment this test itself runs under.
    cmd.env_remove("FACTORIO_API_KEY")
        .env_remove("GITHUB_REF_NAME")
        .env_remove("GITHUB_WORKSPACE");
    cmd
}

#[test]
fn missing_api_key_fails_with_config_error() {
    cmd()
        .args(["--tag", "v1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FACTORIO_API_KEY"));
}

#[test]
fn missing_tag_fails_with_config_error() {
    cmd()
        .args(["--api-key", "some-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_REF_NAME"));
}

#[test]
fn missing_workspace_fails_with_config_error() {
    cmd()
        .args([
            "--api-key",
            "some-key",
            "--tag",
            "v1.0.0",
            "--workspace",
            "/nonexistent/workspace/path",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workspace directory not found"));
}

#[test]
fn help_describes_the_tool() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mod portal"));
}
