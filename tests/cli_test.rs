use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_output_directory_flag() {
    Command::cargo_bin("queue-announcer")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--out-dir"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("queue-announcer")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
