use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

#[test]
fn health_reports_healthy() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("satb"));
    cmd.arg("health");

    cmd.assert().success().stdout(contains("healthy"));
}
