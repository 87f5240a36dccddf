use assert_cmd::prelude::*;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn normalize_paths(s: &str) -> String {
    let re = Regex::new(r#"(?m)^path: .*$"#).unwrap();
    re.replace(s, "path: <CFG>").to_string()
}

#[test]
fn doctor_snapshot_with_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[metadata]
mode = "strict"

[loading]
glob = "*.prompt"
max_files = 50
"#;
    write_file(&cfg, toml);

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"))
        .env_remove("TEXTPROMPTS_METADATA_MODE")
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    insta::assert_snapshot!(normalize_paths(&out), @r"
    OK   textprompts doctor
    path: <CFG>
    loaded: true
    metadata.mode: strict
    metadata.warn_on_ignored: true
    loading.glob: *.prompt
    loading.recursive: false
    loading.max_files: 50
    logging.level: info
    ");
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    write_file(
        &tmp.path().join("textprompts/config.toml"),
        "version = 1\n[metadata]\nmode = \"ignore\"\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).env_remove("TEXTPROMPTS_METADATA_MODE");
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   textprompts doctor"))
        .stdout(predicate::str::contains("metadata.mode: ignore"));
}

#[test]
fn doctor_without_config_uses_defaults() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).env("TEXTPROMPTS_METADATA_MODE", "strict");
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("loaded: false"))
        .stdout(predicate::str::contains("metadata.mode: strict"))
        .stdout(predicate::str::contains("env TEXTPROMPTS_METADATA_MODE: strict"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(&cfg, "version = 3\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL textprompts doctor"))
        .stdout(predicate::str::contains("version 3 is unsupported"));
}

#[test]
fn doctor_fails_on_missing_explicit_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("nope/config.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("config file not found"));
}
