use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

fn cli_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("satb"))
}

#[test]
fn realize_simple_cadence_outputs_four_voices_per_chord() {
    let mut cmd = cli_command();
    cmd.arg("realize")
        .arg("--progression")
        .args(["I", "IV", "V", "I"])
        .arg("--bass-notes")
        .args(["C3", "F3", "G3", "C3"])
        .arg("--key")
        .arg("C major");

    cmd.assert().success().stdout(contains("Realized 4 chord(s)").and(contains("Validation score")));
}

#[test]
fn realize_rejects_mismatched_lengths() {
    let mut cmd = cli_command();
    cmd.arg("realize")
        .arg("--progression")
        .args(["I", "V"])
        .arg("--bass-notes")
        .arg("C3")
        .arg("--key")
        .arg("C major");

    cmd.assert().failure();
}
