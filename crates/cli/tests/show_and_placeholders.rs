use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn textprompts(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.env("XDG_CONFIG_HOME", home).env_remove("TEXTPROMPTS_METADATA_MODE");
    cmd
}

const GREETING: &str = r#"---
title = "Greeting"
description = "Says hello"
version = "1.0"
tone = "warm"
---

Hello {name}! You have {0} new {{messages}}.
"#;

#[test]
fn show_prints_the_body() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("greeting.txt");
    write_file(&file, GREETING);

    textprompts(tmp.path())
        .args(["show", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Hello {name}! You have {0} new {{messages}}.\n");
}

#[test]
fn show_json_includes_metadata() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("greeting.txt");
    write_file(&file, GREETING);

    let assert = textprompts(tmp.path())
        .args(["show", "--json", "--meta", "strict", file.to_str().unwrap()])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["title"], "Greeting");
    assert_eq!(value["meta"]["version"], "1.0");
    assert_eq!(value["meta"]["extra"]["tone"], "warm");
    assert_eq!(value["placeholders"], serde_json::json!(["0", "name"]));
}

#[test]
fn show_strict_rejects_headerless_file() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("plain.txt");
    write_file(&file, "No header here");

    textprompts(tmp.path())
        .args(["show", "--meta", "strict", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: no metadata found"));

    textprompts(tmp.path())
        .args(["show", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("No header here\n");
}

#[test]
fn unknown_mode_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    textprompts(tmp.path())
        .args(["show", "--meta", "lenient", "x.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid metadata mode"));
}

#[test]
fn env_var_sets_the_default_mode() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("plain.txt");
    write_file(&file, "No header here");

    textprompts(tmp.path())
        .env("TEXTPROMPTS_METADATA_MODE", "strict")
        .args(["show", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no metadata found"));
}

#[test]
fn missing_file_is_reported() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("nope.txt");

    textprompts(tmp.path())
        .args(["show", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: file not found"));
}

#[test]
fn placeholders_lists_names() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("greeting.txt");
    write_file(&file, GREETING);

    textprompts(tmp.path())
        .args(["placeholders", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("0\nname\n-- 2 placeholders --\n");
}

#[test]
fn placeholders_json_summary() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("greeting.txt");
    write_file(&file, GREETING);

    let assert = textprompts(tmp.path())
        .args(["placeholders", "--json", file.to_str().unwrap()])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["is_mixed"], true);
}
