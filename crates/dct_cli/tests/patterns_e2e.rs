//! End-to-end tests for the `dct patterns` command.

#![expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dct() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dct"))
}

#[test]
fn lists_builtin_patterns() {
    dct()
        .args(["patterns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AWS Access Key ID"))
        .stdout(predicate::str::contains("RSA Private Key"))
        .stdout(predicate::str::contains(".env Secret"))
        .stdout(predicate::str::contains("19 of 19 patterns"));
}

#[test]
fn group_filter_limits_output() {
    dct()
        .args(["patterns", "--group", "vcs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub Token"))
        .stdout(predicate::str::contains("GitLab Access Token"))
        .stdout(predicate::str::contains("AWS Access Key ID").not());
}

#[test]
fn severity_filter_limits_output() {
    dct()
        .args(["patterns", "--severity", "critical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RSA Private Key"))
        .stdout(predicate::str::contains("AWS Secret Access Key"))
        .stdout(predicate::str::contains("AWS Access Key ID").not());
}

#[test]
fn verbose_shows_regex_sources() {
    dct()
        .args(["patterns", "--verbose", "--group", "cloud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("regex:"))
        .stdout(predicate::str::contains("AKIA"));
}

#[test]
fn custom_patterns_appear_with_marker() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".dct.toml"),
        r#"
[[patterns]]
name = "Acme License Key"
regex = 'ACME-[0-9A-F]{24}'
severity = "high"
"#,
    )
    .unwrap();

    dct()
        .args(["patterns"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme License Key"))
        .stdout(predicate::str::contains("(custom)"))
        .stdout(predicate::str::contains("20 of 20 patterns"));
}

#[test]
fn override_replaces_builtin_without_growing_the_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".dct.toml"),
        r#"
[[patterns]]
name = "Slack Token"
regex = 'xoxb-[0-9]{12}'
severity = "critical"
"#,
    )
    .unwrap();

    dct()
        .args(["patterns"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("19 of 19 patterns"));
}

#[test]
fn disabled_patterns_shrink_the_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".dct.toml"),
        r#"disabled_patterns = [".env Secret", "Bearer Token"]"#,
    )
    .unwrap();

    dct()
        .args(["patterns"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("17 of 17 patterns"));
}
