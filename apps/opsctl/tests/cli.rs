use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_reset_command() {
    Command::cargo_bin("maison-opsctl")
        .expect("binary should exist")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn reset_refuses_without_acknowledgement() {
    Command::cargo_bin("maison-opsctl")
        .expect("binary should exist")
        .args(["reset", "--confirm", "ERASE EVERYTHING"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn reset_rejects_a_wrong_confirmation_before_any_network_call() {
    Command::cargo_bin("maison-opsctl")
        .expect("binary should exist")
        .args(["reset", "--confirm", "erase everything", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Confirmation literal does not match"));
}
