use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

fn cli_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("satb"))
}

#[test]
fn analyze_authentic_cadence_reports_a_candidate_progression() {
    let mut cmd = cli_command();
    cmd.arg("analyze")
        .arg("--bass-notes")
        .args(["C3", "F3", "G3", "C3"])
        .arg("--key")
        .arg("C major");

    cmd.assert().success().stdout(contains("Key: C major").and(contains("candidate progression")));
}

#[test]
fn analyze_emits_json_when_requested() {
    let mut cmd = cli_command();
    cmd.arg("--format")
        .arg("json")
        .arg("analyze")
        .arg("--bass-notes")
        .args(["C3", "F3", "G3", "C3"])
        .arg("--key")
        .arg("C major");

    cmd.assert().success().stdout(contains("\"progressions\""));
}

#[test]
fn analyze_rejects_missing_bass_notes() {
    let mut cmd = cli_command();
    cmd.arg("analyze").arg("--bass-notes");

    cmd.assert().failure();
}
