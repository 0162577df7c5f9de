//! Binary-level checks that need no terminal interaction.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_flags() {
    Command::cargo_bin("scaffold-picker")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--shell"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn version_is_printed() {
    Command::cargo_bin("scaffold-picker")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn positional_answers_are_rejected() {
    Command::cargo_bin("scaffold-picker")
        .unwrap()
        .args(["npm", "react"])
        .assert()
        .failure();
}

#[test]
fn without_a_terminal_the_run_fails_before_launching() {
    Command::cargo_bin("scaffold-picker")
        .unwrap()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error occurred while prompting"))
        .stdout(predicate::str::contains("+ ").not());
}
