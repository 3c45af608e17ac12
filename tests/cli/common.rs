//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("parsemd")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse Markdown headings"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("parsemd")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("parsemd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("parsemd")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("parsemd")
        .args(["tree", "does-not-exist.md"])
        .assert()
        .failure();
}
