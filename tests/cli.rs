//! Integration tests for the headless command-line modes

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SPEC: &str = "a: 1\nb: [2, 3]\nc: {d: \"x\"}\n";

/// Run the binary inside `dir` with logs redirected into it
fn specview(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_specview"))
        .args(args)
        .current_dir(dir)
        .env("XDG_DATA_HOME", dir.join("data"))
        .env("HOME", dir)
        .output()
        .expect("failed to run specview")
}

fn spec_dir(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("opencli.yaml"), contents).unwrap();
    dir
}

#[test]
fn test_print_collapsed_tree() {
    let dir = spec_dir(SPEC);
    let output = specview(dir.path(), &[".", "--print"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "  a: 1\n▶ b\n▶ c\n"
    );
}

#[test]
fn test_print_expand_all() {
    let dir = spec_dir(SPEC);
    let output = specview(dir.path(), &[".", "--print", "--expand-all"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "  a: 1\n▼ b\n    [0]: 2\n    [1]: 3\n▼ c\n    d: \"x\"\n"
    );
}

#[test]
fn test_print_json() {
    let dir = spec_dir("b: [2]\na: {d: x}\n");
    let output = specview(dir.path(), &[".", "--print", "--json"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\n  \"b\": [\n    2\n  ],\n  \"a\": {\n    \"d\": \"x\"\n  }\n}\n"
    );
}

#[test]
fn test_print_single_file_source() {
    let dir = spec_dir(SPEC);
    let output = specview(dir.path(), &["opencli.yaml", "--print"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("  a: 1"));
}

#[test]
fn test_print_rejects_non_mapping_document() {
    let dir = spec_dir("- a\n- b\n");
    let output = specview(dir.path(), &[".", "--print"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid YAML structure"));
}

#[test]
fn test_print_missing_document_fails() {
    let dir = TempDir::new().unwrap();
    let output = specview(dir.path(), &[".", "--print"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_expand_all_requires_print() {
    let dir = spec_dir(SPEC);
    let output = specview(dir.path(), &[".", "--expand-all"]);

    assert!(!output.status.success());
}

#[test]
fn test_init_config_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let output = specview(dir.path(), &["--init-config"]);

    assert!(output.status.success());
    let config = fs::read_to_string(dir.path().join(".specview").join("config.toml")).unwrap();
    assert!(config.contains("[source]"));
    assert!(config.contains("nav_breakpoint = 100"));
}
