use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("textprompts.log");
    let prompt = root.join("a.txt");
    fs::write(&prompt, "---\ntitle = \"A\"\n---\nBody").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1

[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.env_remove("RUST_LOG").env_remove("TEXTPROMPTS_METADATA_MODE");
    cmd.arg("--config").arg(&config_path).arg("check").arg(root).assert().success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("parsed prompt"), "debug events reach the file: {log}");
}

#[test]
fn test_ignored_front_matter_warning() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let prompt = root.join("a.txt");
    fs::write(&prompt, "---\ntitle = \"A\"\n---\nBody").unwrap();

    let config_path = root.join("config.toml");
    fs::write(&config_path, "version = 1\n[metadata]\nmode = \"ignore\"\n").unwrap();

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"))
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg("show")
        .arg(&prompt)
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("metadata is ignored"), "{stderr}");

    fs::write(&config_path, "version = 1\n[metadata]\nmode = \"ignore\"\nwarn_on_ignored = false\n")
        .unwrap();
    let assert = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"))
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg("show")
        .arg(&prompt)
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(!stderr.contains("metadata is ignored"), "{stderr}");
}

#[test]
fn test_log_file_in_new_directory_is_appended() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let prompts = root.join("prompts");
    fs::create_dir(&prompts).unwrap();
    fs::write(prompts.join("a.txt"), "---\ntitle = \"A\"\n---\nBody").unwrap();
    let log_file = root.join("logs/nested/textprompts.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        "version = 1\n[logging]\nlevel = \"error\"\nfile_level = \"debug\"\nfile = \"{}\"\n",
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    for _ in 0..2 {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
        cmd.env_remove("RUST_LOG").env_remove("TEXTPROMPTS_METADATA_MODE");
        cmd.arg("--config").arg(&config_path).arg("check").arg(&prompts).assert().success();
    }

    let log = fs::read_to_string(&log_file).unwrap();
    assert_eq!(log.matches("parsed prompt").count(), 2, "{log}");
}

#[test]
fn test_doctor_starts_file_logging() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("doctor.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        "version = 1\n[logging]\nlevel = \"error\"\nfile_level = \"debug\"\nfile = \"{}\"\n",
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(&config_path).arg("doctor").assert().success();

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("config resolved"), "{log}");
}

#[test]
fn test_unopenable_log_file_is_reported() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let blocker = root.join("blocker");
    fs::write(&blocker, "").unwrap();
    fs::write(root.join("a.txt"), "Body").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        "version = 1\n[logging]\nfile = \"{}\"\n",
        blocker.join("textprompts.log").display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"))
        .arg("--config")
        .arg(&config_path)
        .arg("show")
        .arg(root.join("a.txt"))
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("Error: failed to open log file"), "{stderr}");
}
