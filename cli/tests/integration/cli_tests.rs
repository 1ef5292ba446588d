//! Argument handling of the real binary.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::FakeHost;

fn deploy() -> Command {
    Command::cargo_bin("minisiem-deploy").expect("minisiem-deploy binary should exist")
}

#[test]
fn test_no_args_prints_usage_and_fails() {
    let host = FakeHost::new();
    host.cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--install-service"));
    assert!(host.calls().is_empty());
    assert!(host.unit().is_none());
}

#[test]
fn test_help_flag_shows_actions() {
    deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--ensure-firewall"))
        .stdout(predicate::str::contains("--remove-service"));
}

#[test]
fn test_version_flag_shows_version() {
    deploy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("minisiem-deploy"));
}

#[test]
fn test_unknown_flag_prints_usage_and_fails() {
    let host = FakeHost::new();
    host.cmd()
        .arg("--install")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized option '--install'"))
        .stderr(predicate::str::contains("Usage:"));
    assert!(host.calls().is_empty());
}

#[test]
fn test_unknown_token_stops_processing_after_earlier_flags() {
    let host = FakeHost::new();
    host.cmd()
        .args(["--ensure-firewall", "bogus", "--install-service"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized option 'bogus'"));

    assert_eq!(
        host.calls(),
        vec!["runtime -m mini_siem.cli ensure-firewall"],
        "only the flag before the bad token ran"
    );
    assert!(host.unit().is_none());
}

#[test]
fn test_help_after_an_action_is_an_unrecognized_token() {
    let host = FakeHost::new();
    host.cmd()
        .args(["--ensure-firewall", "--help"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized option '--help'"))
        .stderr(predicate::str::contains("only recognized as the first argument"));

    assert_eq!(
        host.calls(),
        vec!["runtime -m mini_siem.cli ensure-firewall"]
    );
}

#[test]
fn test_invalid_config_fails_before_any_action() {
    let host = FakeHost::new();
    std::fs::write(&host.config_path, "service_name: ../escape\n").expect("config");
    host.cmd()
        .arg("--install-service")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid service name"));
    assert!(host.calls().is_empty());
}
