//! Integration tests for the sufx command-line surface.
//!
//! Each test runs the built binary and checks stdout line by line against the
//! `<query> : <result>` format.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn sufx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(args)
        // Keep the user's config file out of the way
        .env("HOME", std::env::temp_dir())
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("sufx_test_no_config"))
        .output()
        .expect("Failed to run sufx")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn write_fasta(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_trie_string_queries() {
    let output = sufx(&["trie", "--string", "abab", "--query", "aba", "abc", "x"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["aba : 3", "abc : 2", "x : 0"]);
}

#[test]
fn test_array_string_queries() {
    let output = sufx(&["array", "--string", "banana", "--query", "ana", "$", "z"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["ana : 2", "$ : 0", "z : 7"]);
}

#[test]
fn test_repeated_query_flag() {
    let output = sufx(&["array", "--string", "banana", "--query", "ana", "--query", "b"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["ana : 2", "b : 4"]);
}

#[test]
fn test_array_verify() {
    let output = sufx(&[
        "array", "--string", "banana", "--verify", "--query", "ana", "anb",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["ana : 2 (2 hits)", "anb : 4 (absent)"]);
}

#[test]
fn test_reference_uses_first_record() {
    let dir = tempdir().unwrap();
    let fasta = write_fasta(
        dir.path(),
        "ref.fa",
        ">chr1 test\nACGT\nACGA\n>chr2\nTTTTTTTT\n",
    );

    let output = sufx(&["trie", "--reference", &fasta, "--query", "GTAC", "TTTT"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["GTAC : 4", "TTTT : 1"]);

    let output = sufx(&["array", "--reference", &fasta, "--query", "A", "--verify"]);
    assert!(output.status.success());
    // ACGTACGA$ sorted: $, A$, ACGA$, ACGTACGA$, ...
    assert_eq!(stdout_lines(&output), vec!["A : 1 (3 hits)"]);
}

#[test]
fn test_missing_input_fails() {
    let output = sufx(&["trie", "--query", "abc"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no input sequence"), "stderr: {stderr}");
}

#[test]
fn test_missing_reference_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.fa");
    let output = sufx(&["array", "--reference", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_empty_reference_fails() {
    let dir = tempdir().unwrap();
    let fasta = write_fasta(dir.path(), "empty.fa", "");
    let output = sufx(&["array", "--reference", &fasta, "--query", "A"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no FASTA records"));
}

#[test]
fn test_sentinel_in_text_fails() {
    let output = sufx(&["array", "--string", "ba$nana", "--query", "a"]);
    assert!(!output.status.success());

    // A NUL sentinel sorts below '$', so the same text indexes fine
    let output = sufx(&["array", "--string", "ba$nana", "--sentinel", "\\0", "--query", "$"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["$ : 1"]);
}

#[test]
fn test_no_queries_prints_nothing() {
    let output = sufx(&["array", "--string", "acgt"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_stats_block() {
    let output = sufx(&["array", "--string", "banana", "--stats", "--no-color"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Suffix array");
    assert!(lines.iter().any(|l| l.trim() == "Suffixes:     7"));
}

#[test]
fn test_config_file_enables_verify() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "verify_matches": true }"#).unwrap();

    let output = sufx(&[
        "array",
        "--string",
        "banana",
        "--config",
        config.to_str().unwrap(),
        "--query",
        "na",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["na : 5 (2 hits)"]);
}
