use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn textprompts(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textprompts"));
    cmd.env("XDG_CONFIG_HOME", home).env_remove("TEXTPROMPTS_METADATA_MODE");
    cmd
}

#[test]
fn new_writes_a_strict_loadable_prompt() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("prompts/review.txt");
    let path = file.to_str().unwrap();

    textprompts(tmp.path())
        .args(["new", path, "--title", "Review", "--description", "Code review"])
        .args(["--version", "1.0", "--author", "Ada", "--body", "Review {file}."])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   textprompts new"))
        .stdout(predicate::str::contains("fill in").not());

    let written = fs::read_to_string(&file).unwrap();
    assert!(written.starts_with("---\ntitle = \"Review\"\ndescription = \"Code review\"\n"));
    assert!(written.contains("author = \"Ada\"\ncreated = \""));
    assert!(written.ends_with("---\n\nReview {file}."));

    textprompts(tmp.path())
        .args(["format", "--meta", "strict", path, "--var", "file=main.rs"])
        .assert()
        .success()
        .stdout("Review main.rs.\n");
}

#[test]
fn new_without_metadata_lists_what_to_fill_in() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("draft.txt");
    let path = file.to_str().unwrap();

    textprompts(tmp.path())
        .args(["new", path])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "fill in before strict loading: description, title, version",
        ));

    textprompts(tmp.path())
        .args(["show", "--meta", "strict", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid metadata"));

    textprompts(tmp.path())
        .args(["show", "--meta", "allow", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write the prompt here."));
}

#[test]
fn new_refuses_to_overwrite() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("existing.txt");
    fs::write(&file, "keep me").unwrap();
    let path = file.to_str().unwrap();

    textprompts(tmp.path())
        .args(["new", path, "--body", "replacement"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");

    textprompts(tmp.path())
        .args(["new", path, "--body", "replacement", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&file).unwrap().ends_with("replacement"));
}
