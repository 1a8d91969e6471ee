//! End-to-end tests for the `ci-plugin-env completions` command.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_completions_help() {
    let mut cmd = cargo_bin_cmd!("ci-plugin-env");
    cmd.arg("completions")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("powershell"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = cargo_bin_cmd!("ci-plugin-env");
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        // clap_complete doubles the underscores it substitutes for hyphens.
        .stdout(predicate::str::contains("_ci__plugin__env()"))
        .stdout(predicate::str::contains("output"))
        .stdout(predicate::str::contains("error-metadata"));
}

#[test]
fn test_completions_include_context_flags() {
    let mut cmd = cargo_bin_cmd!("ci-plugin-env");
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("--build.branch"))
        .stdout(predicate::str::contains("--system.host"));
}

#[test]
fn test_completions_zsh() {
    let mut cmd = cargo_bin_cmd!("ci-plugin-env");
    cmd.arg("completions")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef ci-plugin-env"))
        .stdout(predicate::str::contains("secret"));
}

#[test]
fn test_completions_invalid_shell() {
    let mut cmd = cargo_bin_cmd!("ci-plugin-env");
    cmd.arg("completions")
        .arg("tcsh")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
