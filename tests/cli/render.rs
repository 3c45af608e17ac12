//! Html and ansi subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_html_stdin() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("parsemd")
        .current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .arg("html")
        .write_stdin("# Heading 1\nSome Text under **Heading 1**\n")
        .assert()
        .success()
        .stdout("<h1>Heading 1</h1>\n<p>Some Text under <b>Heading 1</b></p>\n");
}

#[test]
fn test_ansi_stdin() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("parsemd")
        .current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .arg("ansi")
        .write_stdin("*i*")
        .assert()
        .success()
        .stdout("\u{1b}[3mi\u{1b}[23m\n\n");
}

#[test]
fn test_html_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");

    fs::write(&test_file, "**bold**").unwrap();
    fs::write(&config_file, "[html]\nstrong = [\"<strong>\", \"</strong>\"]\n").unwrap();

    cargo_bin_cmd!("parsemd")
        .args([
            "html",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("<p><strong>bold</strong></p>\n");
}

#[test]
fn test_html_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let docs = temp_dir.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    let test_file = docs.join("test.md");

    fs::write(&test_file, "*it*").unwrap();
    fs::write(
        temp_dir.path().join(".parsemd.toml"),
        "[html]\nemph = [\"<em>\", \"</em>\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("parsemd")
        .args(["html", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<p><em>it</em></p>\n");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[html]\nstrong = 1\n").unwrap();

    cargo_bin_cmd!("parsemd")
        .args(["html", "--config", config_file.to_str().unwrap()])
        .write_stdin("**x**")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
