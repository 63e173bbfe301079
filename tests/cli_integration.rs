//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passwords are supplied through `--password` or piped stdin so no
//! interactive prompt is ever shown.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command for the passvault binary running inside `dir`,
/// isolated from any key in the caller's environment.
fn passvault(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passvault").expect("binary should exist");
    cmd.current_dir(dir.path()).env_remove("PASSVAULT_KEY");
    cmd
}

fn init(dir: &TempDir) {
    passvault(dir).arg("init").assert().success();
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted per-site credential store"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("store"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_creates_keyfile_and_database() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    tmp.child(".passvault/master.key").assert(predicate::path::exists());
    tmp.child(".passvault/passwords.db").assert(predicate::path::exists());
    assert_eq!(
        std::fs::metadata(tmp.child(".passvault/master.key").path())
            .unwrap()
            .len(),
        32
    );
}

#[test]
fn init_twice_refuses_to_replace_keyfile() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    let before = std::fs::read(tmp.child(".passvault/master.key").path()).unwrap();

    passvault(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    let after = std::fs::read(tmp.child(".passvault/master.key").path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn store_then_check_roundtrip() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    passvault(&tmp)
        .args(["store", "site1", "alice", "--password", "pw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password stored"));

    passvault(&tmp)
        .args(["check", "site1", "alice", "--password", "pw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password correct"));
}

#[test]
fn check_with_wrong_password_fails() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    passvault(&tmp)
        .args(["store", "site1", "alice", "--password", "pw1"])
        .assert()
        .success();

    passvault(&tmp)
        .args(["check", "site1", "alice", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password incorrect."));
}

#[test]
fn password_can_be_piped() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    passvault(&tmp)
        .args(["store", "site1", "alice"])
        .write_stdin("piped-pw\n")
        .assert()
        .success();

    passvault(&tmp)
        .args(["check", "site1", "alice"])
        .write_stdin("piped-pw\n")
        .assert()
        .success();
}

#[test]
fn empty_field_is_rejected() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    passvault(&tmp)
        .args(["store", "site1", "", "--password", "pw1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("username cannot be empty"));
}

#[test]
fn username_with_colon_is_rejected() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    passvault(&tmp)
        .args(["store", "site1", "a:b", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("username cannot contain ':'"));

    // Nothing was written, so the prefix user cannot verify against it.
    passvault(&tmp)
        .args(["check", "site1", "a", "--password", "b:pw"])
        .assert()
        .failure();
}

#[test]
fn store_before_init_fails() {
    let tmp = TempDir::new().unwrap();

    passvault(&tmp)
        .args(["store", "site1", "alice", "--password", "pw1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("passvault init"));
}

#[test]
fn key_from_environment_replaces_keyfile() {
    let tmp = TempDir::new().unwrap();
    // base64 of 32 bytes of 0x01.
    let key = "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=";

    passvault(&tmp)
        .env("PASSVAULT_KEY", key)
        .arg("init")
        .assert()
        .success();
    tmp.child(".passvault/master.key")
        .assert(predicate::path::missing());

    passvault(&tmp)
        .env("PASSVAULT_KEY", key)
        .args(["store", "site1", "alice", "--password", "pw1"])
        .assert()
        .success();

    passvault(&tmp)
        .env("PASSVAULT_KEY", key)
        .args(["check", "site1", "alice", "--password", "pw1"])
        .assert()
        .success();
}

#[test]
fn custom_vault_dir_is_respected() {
    let tmp = TempDir::new().unwrap();

    passvault(&tmp)
        .args(["init", "--vault-dir", "secrets"])
        .assert()
        .success();
    tmp.child("secrets/passwords.db")
        .assert(predicate::path::exists());
}

#[test]
fn generate_prints_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();

    passvault(&tmp)
        .args(["generate", "--length", "20"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.trim_end().len() == 20));
}

#[test]
fn generate_defaults_to_twelve_characters() {
    let tmp = TempDir::new().unwrap();

    passvault(&tmp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.trim_end().len() == 12));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();

    passvault(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}
