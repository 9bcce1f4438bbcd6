//! Full journal lifecycle driven through the binary

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::journ_cmd;

#[test]
fn test_full_lifecycle() {
    let temp = TempDir::new().unwrap();

    // Fresh journal
    journ_cmd().arg("init").arg(temp.path()).assert().success();

    // Register and log in as alice
    journ_cmd()
        .current_dir(temp.path())
        .args(["signup", "alice", "--password", "pw1"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .args(["login", "alice", "--password", "pw1"])
        .assert()
        .success();

    // Two entries
    journ_cmd()
        .current_dir(temp.path())
        .args(["add", "Day 1", "--message", "first day"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .args(["add", "Day 2", "--message", "second day"])
        .assert()
        .success();

    // Listed in the order they were written
    let output = journ_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("1. Day 1").unwrap() < stdout.find("2. Day 2").unwrap());

    // Both carry a full timestamp
    assert_eq!(stdout.matches(" (20").count(), 2);

    // Delete the first; only Day 2 remains, renumbered to 1
    journ_cmd()
        .current_dir(temp.path())
        .args(["delete", "1"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Day 2"))
        .stdout(predicate::str::contains("Day 1").not());

    // Remove the account; everything of alice's goes with it
    journ_cmd()
        .current_dir(temp.path())
        .args(["delete-account", "--yes"])
        .assert()
        .success();

    let entries_raw = fs::read_to_string(temp.path().join(".journ/entries.json")).unwrap();
    assert!(!entries_raw.contains("alice"));

    let accounts_raw = fs::read_to_string(temp.path().join(".journ/accounts.json")).unwrap();
    assert!(!accounts_raw.contains("alice"));
}

#[test]
fn test_two_users_full_isolation() {
    let temp = TempDir::new().unwrap();

    journ_cmd().arg("init").arg(temp.path()).assert().success();

    for (user, pw) in [("alice", "pw1"), ("bob", "pw2")] {
        journ_cmd()
            .current_dir(temp.path())
            .args(["signup", user, "--password", pw])
            .assert()
            .success();
    }

    // Alice writes two entries
    journ_cmd()
        .current_dir(temp.path())
        .args(["login", "alice", "--password", "pw1"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .args(["add", "Alice 1", "--message", "apples"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .args(["add", "Alice 2", "--message", "bananas"])
        .assert()
        .success();

    // Bob writes one and sees only his own
    journ_cmd()
        .current_dir(temp.path())
        .args(["login", "bob", "--password", "pw2"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .args(["add", "Bob 1", "--message", "apples too"])
        .assert()
        .success();

    journ_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob 1"))
        .stdout(predicate::str::contains("Alice").not());

    // Bob's search cannot reach alice's entries either
    journ_cmd()
        .current_dir(temp.path())
        .args(["search", "apples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob 1"))
        .stdout(predicate::str::contains("Alice 1").not());

    // Bob deleting his entry 1 leaves alice's store intact
    journ_cmd()
        .current_dir(temp.path())
        .args(["delete", "1"])
        .assert()
        .success();

    journ_cmd()
        .current_dir(temp.path())
        .args(["login", "alice", "--password", "pw1"])
        .assert()
        .success();
    journ_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice 1"))
        .stdout(predicate::str::contains("Alice 2"));
}
