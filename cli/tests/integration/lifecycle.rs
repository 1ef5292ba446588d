//! End-to-end install / firewall / remove runs against a fake host.

#![allow(clippy::expect_used, deprecated)]

use predicates::prelude::*;

use crate::helpers::FakeHost;

#[test]
fn install_then_firewall_exits_zero_even_when_hook_fails() {
    let host = FakeHost::new();
    host.cmd()
        .args(["--install-service", "--ensure-firewall"])
        .env("FAKE_FIREWALL_EXIT", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed mini-siem.service"));

    let unit = host.unit().expect("unit written");
    assert!(unit.contains("SyslogIdentifier=mini-siem\n"));
    assert!(unit.contains("Restart=always\n"));
    assert!(unit.contains("RestartSec=3\n"));
    assert!(unit.contains(&format!(
        "ExecStart={} -m mini_siem\n",
        host.runtime.display()
    )));
    assert_eq!(
        host.calls(),
        vec![
            "systemctl daemon-reload",
            "runtime -m mini_siem.cli ensure-firewall",
        ]
    );
}

#[test]
fn install_twice_is_idempotent() {
    let host = FakeHost::new();
    host.cmd().arg("--install-service").assert().success();
    let first = host.unit().expect("unit");

    host.cmd()
        .arg("--install-service")
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
    let second = host.unit().expect("unit");

    assert_eq!(first, second);
    assert_eq!(
        host.calls(),
        vec!["systemctl daemon-reload", "systemctl daemon-reload"]
    );
}

#[test]
fn install_without_runtime_writes_nothing() {
    let host = FakeHost::without_runtime();
    host.cmd()
        .arg("--install-service")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("install dependencies first"));

    assert!(host.unit().is_none());
    assert!(host.calls().is_empty());
}

#[test]
fn firewall_failure_never_fails_the_run() {
    let host = FakeHost::new();
    host.cmd()
        .arg("--ensure-firewall")
        .env("FAKE_FIREWALL_EXIT", "3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Firewall bootstrap failed"));
}

#[test]
fn firewall_with_missing_runtime_is_still_best_effort() {
    let host = FakeHost::without_runtime();
    host.cmd().arg("--ensure-firewall").assert().success();
}

#[test]
fn remove_twice_exits_zero_and_leaves_no_unit() {
    let host = FakeHost::new();
    host.cmd().arg("--install-service").assert().success();
    assert!(host.unit().is_some());

    host.cmd()
        .arg("--remove-service")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed mini-siem.service"));
    host.cmd()
        .arg("--remove-service")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed mini-siem.service"));

    assert!(host.unit().is_none());
    assert_eq!(
        host.calls(),
        vec![
            "systemctl daemon-reload",
            "systemctl stop mini-siem.service",
            "systemctl disable mini-siem.service",
            "systemctl daemon-reload",
            "systemctl stop mini-siem.service",
            "systemctl disable mini-siem.service",
            "systemctl daemon-reload",
        ]
    );
}

#[test]
fn remove_on_never_installed_host_succeeds() {
    let host = FakeHost::without_runtime();
    host.cmd().arg("--remove-service").assert().success();
    assert!(host.unit().is_none());
    assert!(host.calls().contains(&"systemctl daemon-reload".to_string()));
}
