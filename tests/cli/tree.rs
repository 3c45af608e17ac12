//! Tree, blocks and json subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_tree_stdin() {
    cargo_bin_cmd!("parsemd")
        .arg("tree")
        .write_stdin("# Heading\n\nParagraph with *emphasis*.")
        .assert()
        .success()
        .stdout(
            "Token::Root\n  Token::H1\n    Token::Text \"Heading\"\n  Token::Paragraph\n    \
             Token::Text \"Paragraph with \"\n    Token::Emph\n      Token::Text \"emphasis\"\n    \
             Token::Text \".\"\n",
        );
}

#[test]
fn test_tree_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "**a**").unwrap();

    cargo_bin_cmd!("parsemd")
        .args(["tree", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token::Strong"));
}

#[test]
fn test_tree_empty_input() {
    cargo_bin_cmd!("parsemd")
        .arg("tree")
        .write_stdin("")
        .assert()
        .success()
        .stdout("Token::Root\n");
}

#[test]
fn test_tree_invalid_utf8_is_lossy() {
    cargo_bin_cmd!("parsemd")
        .arg("tree")
        .write_stdin(b"ab\xffcd".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("ab\u{FFFD}cd"));
}

#[test]
fn test_blocks_crlf() {
    cargo_bin_cmd!("parsemd")
        .arg("blocks")
        .write_stdin("## Title\r\nline one\r\nline *two*\r\n")
        .assert()
        .success()
        .stdout("Token::Root\n  Token::H2 \"Title\"\n  Token::Paragraph \"line one\nline *two*\"\n");
}

#[test]
fn test_json() {
    cargo_bin_cmd!("parsemd")
        .arg("json")
        .write_stdin("*a*")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"root\""))
        .stdout(predicate::str::contains("\"type\": \"emph\""))
        .stdout(predicate::str::contains("\"text\": \"a\""));
}

#[test]
fn test_tree_handles_pathological_input() {
    // Parser should not panic on unbalanced or deeply nested delimiters
    let input = format!("{}x{}\n\n{}\n\n_*_*_*", "*".repeat(500), "_".repeat(300), "**a".repeat(200));
    cargo_bin_cmd!("parsemd")
        .arg("tree")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Token::Root\n"));
}
