//! Command-line behaviour of the `mmlint` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn mmlint() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mmlint");
    cmd.args(["--color", "never"]);
    cmd
}

#[test]
fn test_check_clean_directory_exits_zero() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("index.md"), "# Title\n\n!!! note\n\n    Body\n").unwrap();

    mmlint()
        .args(["check", "--no-config"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: No issues found in 1 file"));
}

#[test]
fn test_check_reports_violations_with_exit_one() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("bad.md"), "-item\n").unwrap();
    fs::write(temp.path().join("notes.txt"), "-item\n").unwrap();

    mmlint()
        .args(["check", "--no-config"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad.md:1:1: error[MM003] Unordered list markers must be followed by a space."))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_check_missing_path_is_a_tool_error() {
    let temp = tempdir().unwrap();
    mmlint()
        .args(["check", "--no-config"])
        .arg(temp.path().join("does-not-exist"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_check_invalid_config_is_a_tool_error() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[global\n").unwrap();
    fs::write(temp.path().join("a.md"), "fine\n").unwrap();

    mmlint()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_check_stdin_json_output() {
    let output = mmlint()
        .args(["check", "--no-config", "--stdin", "--stdin-filename", "page.md", "-o", "json"])
        .write_stdin("!!! caution\n")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["file"], "page.md");
    assert_eq!(items[0]["rule"], "MM001");
    assert_eq!(items[0]["severity"], "warning");
    assert_eq!(items[0]["line"], 1);
}

#[test]
fn test_fail_on_error_ignores_warnings() {
    mmlint()
        .args(["check", "--no-config", "--stdin", "--fail-on", "error", "--quiet"])
        .write_stdin("!!! caution\n")
        .assert()
        .success();
}

#[test]
fn test_cli_flags_toggle_checks() {
    mmlint()
        .args(["check", "--no-config", "--stdin", "--check-indentation", "false"])
        .write_stdin("!!! note\n\n  Body\n")
        .assert()
        .success();

    mmlint()
        .args(["check", "--no-config", "--stdin", "--disable", "indented-content"])
        .write_stdin("!!! note\n\n  Body\n")
        .assert()
        .success();

    mmlint()
        .args(["check", "--no-config", "--stdin", "--check-blank-line-before-admonition-content", "true"])
        .write_stdin("!!! note\n    Body\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MM007"));
}

#[test]
fn test_config_file_is_discovered() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(".mmlint.toml"), "[global]\ndisable = [\"MM003\"]\n").unwrap();
    fs::write(temp.path().join("doc.md"), "-item\n").unwrap();

    mmlint().arg("check").arg(temp.path()).assert().success();
}

#[test]
fn test_silent_prints_nothing() {
    mmlint()
        .args(["check", "--no-config", "--stdin", "--silent"])
        .write_stdin("```\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_init_creates_and_refuses_to_overwrite() {
    let temp = tempdir().unwrap();

    mmlint()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let content = fs::read_to_string(temp.path().join(".mmlint.toml")).unwrap();
    assert!(content.contains("[global]"));
    assert!(content.contains("[lint]"));

    mmlint()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_pyproject() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("pyproject.toml"), "[project]\nname = \"docs\"\n").unwrap();

    mmlint()
        .current_dir(temp.path())
        .args(["init", "--pyproject"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("pyproject.toml")).unwrap();
    assert!(content.starts_with("[project]"));
    assert!(content.contains("[tool.mmlint.global]"));

    mmlint()
        .current_dir(temp.path())
        .args(["init", "--pyproject"])
        .assert()
        .code(2);
}

#[test]
fn test_rule_listing_and_lookup() {
    mmlint()
        .arg("rule")
        .assert()
        .success()
        .stdout(predicate::str::contains("MM009"))
        .stdout(predicate::str::contains("Total rules: 9"));

    mmlint()
        .args(["rule", "tab-syntax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MM002"))
        .stdout(predicate::str::contains("Category: tab"));

    mmlint().args(["rule", "MD013"]).assert().code(2);
}

#[test]
fn test_rule_json_output() {
    let output = mmlint().args(["rule", "-o", "json"]).assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 9);
    assert_eq!(json[0]["code"], "MM001");
    assert_eq!(json[0]["alias"], "admonition-syntax");
}

#[test]
fn test_stylesheet_command() {
    let output = mmlint()
        .args(["stylesheet", "--no-config", "--theme", "dark"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["theme"], "dark");
    assert!(json["admonitions"]["note"].is_object());
}

#[test]
fn test_annotate_stdin() {
    let output = mmlint()
        .args(["annotate", "--no-config", "--stdin"])
        .write_stdin("> quote\n\n```\ncode\n```\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["blockquotes"][0]["line"], 0);
    assert_eq!(json["code_fences"].as_array().unwrap().len(), 3);
}

#[test]
fn test_annotate_ignores_non_markdown_files() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("notes.txt");
    fs::write(&file, "> quote\n").unwrap();

    let output = mmlint()
        .args(["annotate", "--no-config"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json["blockquotes"].as_array().unwrap().is_empty());
}

#[test]
fn test_completions_for_named_shell() {
    mmlint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mmlint"));
}
