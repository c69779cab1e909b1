#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `kudos` command isolated in `data_dir`, with plain output.
fn kudos(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("kudos"));
    cmd.env("KUDOS_DATA_DIR", data_dir.path())
        .env_remove("KUDOS_COOKIE_PREFIX")
        .env_remove("KUDOS_COOKIE_TTL_DAYS")
        .env_remove("KUDOS_COOKIE_PATH")
        .env_remove("KUDOS_NOTICE_MS")
        .env_remove("RUST_LOG")
        .args(["--output", "plain"]);
    cmd
}

fn cookies(data_dir: &TempDir) -> String {
    let output = kudos(data_dir).arg("cookies").output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn naked_invocation_shows_fresh_widget() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Like     0"))
        .stdout(predicate::str::contains("Dislike  0"))
        .stdout(predicate::str::contains("(none yet)"));

    assert!(temp.path().join("cookies.json").exists());
}

#[test]
fn like_then_dislike_is_refused() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .arg("like")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for your like!"))
        .stdout(predicate::str::contains("Like     1  <- your vote"))
        .stdout(predicate::str::contains("Voting closed."));

    kudos(&temp)
        .arg("dislike")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You already voted. Use Reset to change your vote.",
        ))
        .stdout(predicate::str::contains("Like     1"))
        .stdout(predicate::str::contains("Dislike  0\n"));

    let header = cookies(&temp);
    assert!(header.contains("lab6_likes=1"));
    assert!(header.contains("lab6_dislikes=0"));
    assert!(header.contains("lab6_vote=like"));
}

#[test]
fn one_comment_per_visitor() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .args(["comment", "nice", "job"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment submitted!"))
        .stdout(predicate::str::contains("  - nice job"));

    kudos(&temp)
        .args(["comment", "again"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You already left a comment. Use Reset to clear it.",
        ))
        .stdout(predicate::str::contains("again").not());

    let header = cookies(&temp);
    assert!(header.contains("lab6_commented=true"));
    assert!(header.contains("lab6_comments=%5B%22nice%20job%22%5D"));
}

#[test]
fn empty_comment_is_refused() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .arg("comment")
        .assert()
        .success()
        .stdout(predicate::str::contains("Write something first"));

    assert!(!cookies(&temp).contains("lab6_commented"));
}

#[test]
fn reset_restores_fresh_state() {
    let temp = TempDir::new().unwrap();
    kudos(&temp).arg("like").assert().success();
    kudos(&temp).args(["comment", "nice job"]).assert().success();

    kudos(&temp)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your vote & comments were reset. You can vote again now.",
        ))
        .stdout(predicate::str::contains("Like     0\n"))
        .stdout(predicate::str::contains("(none yet)"));

    let header = cookies(&temp);
    assert!(!header.contains("lab6_vote"));
    assert!(!header.contains("lab6_commented"));
    assert!(header.contains("lab6_comments=%5B%5D"));

    kudos(&temp)
        .arg("dislike")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for your dislike!"));
}

#[test]
fn reset_on_fresh_state_keeps_zero() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Like     0"));

    assert!(cookies(&temp).contains("lab6_likes=0"));
}

#[test]
fn session_keeps_input_between_lines() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .arg("session")
        .write_stdin("type hello there\nshow\nsubmit\nlike\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft: hello there"))
        .stdout(predicate::str::contains("Comment submitted!"))
        .stdout(predicate::str::contains("  - hello there"))
        .stdout(predicate::str::contains("Thanks for your like!"));

    // A new process is a new page: the input is gone, the cookies are not.
    kudos(&temp)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - hello there"))
        .stdout(predicate::str::contains("Draft:").not());
}

#[test]
fn json_output() {
    let temp = TempDir::new().unwrap();

    let output = kudos(&temp)
        .args(["--output", "json", "like"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["view"]["likes"], 1);
    assert_eq!(value["view"]["dislike_button"]["disabled"], true);
    assert_eq!(value["result"]["messages"][0]["level"], "success");
}

#[test]
fn prefix_from_environment() {
    let temp = TempDir::new().unwrap();

    kudos(&temp)
        .env("KUDOS_COOKIE_PREFIX", "demo_")
        .arg("like")
        .assert()
        .success();

    let header = kudos(&temp)
        .env("KUDOS_COOKIE_PREFIX", "demo_")
        .arg("cookies")
        .output()
        .unwrap()
        .stdout;
    let header = String::from_utf8(header).unwrap();
    assert!(header.contains("demo_likes=1"));
    assert!(!header.contains("lab6_"));
}

#[test]
fn config_reads_file_and_does_not_seed() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kudos.toml"), "notice_ms = 5000\n").unwrap();

    kudos(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("notice_ms        5000"))
        .stdout(predicate::str::contains("cookie_prefix    lab6_"));

    assert!(!temp.path().join("cookies.json").exists());
}

#[test]
fn bad_config_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kudos.toml"), "notice_ms = \"soon\"\n").unwrap();

    kudos(&temp)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn zero_cookie_lifetime_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kudos.toml"), "cookie_ttl_days = 0\n").unwrap();

    kudos(&temp)
        .arg("like")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cookie_ttl_days"));
    assert!(!temp.path().join("cookies.json").exists());
}

#[test]
fn corrupt_jar_reads_as_fresh() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cookies.json"), "{ not json").unwrap();

    kudos(&temp)
        .arg("like")
        .assert()
        .success()
        .stdout(predicate::str::contains("Like     1"));
}
