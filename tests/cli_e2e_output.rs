//! End-to-end tests for the `output` and `secret` commands.
//!
//! These tests invoke the binary with the output variables pointing into a
//! temporary directory and check the rewritten files.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_output_set_writes_env_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .env("DRONE_OUTPUT", fixture.file("output.env"))
        .args(["output", "set", "IMAGE", "octocat/app:1.0.0"])
        .assert()
        .success();

    assert_eq!(fixture.read("output.env"), "IMAGE=octocat/app:1.0.0\n");
}

#[test]
fn test_output_update_and_delete_preserve_order() {
    let fixture = TestFixture::new().with_file("output.out", "A 1\nB 2\nC 3\n");
    let path = fixture.file("output.out");

    fixture
        .command()
        .env("DRONE_OUTPUT", &path)
        .args(["output", "update", "B", "two"])
        .assert()
        .success();
    fixture
        .command()
        .env("DRONE_OUTPUT", &path)
        .args(["output", "delete", "A"])
        .assert()
        .success();

    assert_eq!(fixture.read("output.out"), "B two\nC 3\n");
}

#[test]
fn test_output_without_variable_fails_naming_it() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["output", "set", "KEY", "value"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DRONE_OUTPUT"));
}

#[test]
fn test_output_rejects_multiline_in_out_file() {
    let fixture = TestFixture::new().with_file("output.out", "KEEP me\n");

    fixture
        .command()
        .env("DRONE_OUTPUT", fixture.file("output.out"))
        .args(["output", "set", "NOTES", "line one\nline two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiline values are not allowed"));

    assert_eq!(fixture.read("output.out"), "KEEP me\n");
}

#[test]
fn test_secret_set_and_delete() {
    let fixture = TestFixture::new();
    let path = fixture.file("secrets.env");

    fixture
        .command()
        .env("HARNESS_OUTPUT_SECRET_FILE", &path)
        .args(["secret", "set", "TOKEN", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not())
        .stderr(predicate::str::contains("hunter2").not());
    assert_eq!(fixture.read("secrets.env"), "TOKEN=hunter2\n");

    fixture
        .command()
        .env("HARNESS_OUTPUT_SECRET_FILE", &path)
        .args(["secret", "delete", "TOKEN"])
        .assert()
        .success();
    assert_eq!(fixture.read("secrets.env"), "");
}

#[test]
fn test_secret_delete_missing_key_succeeds() {
    let fixture = TestFixture::new().with_file("secrets.env", "OTHER=1\n");

    fixture
        .command()
        .env("HARNESS_OUTPUT_SECRET_FILE", fixture.file("secrets.env"))
        .args(["secret", "delete", "MISSING"])
        .assert()
        .success();

    assert_eq!(fixture.read("secrets.env"), "OTHER=1\n");
}
