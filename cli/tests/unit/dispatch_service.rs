//! Tests for the command dispatcher.
//!
//! Verifies ordering, stop-at-invalid, and that only usage and install
//! precondition failures are fatal.

#![allow(clippy::expect_used)]

use minisiem_deploy::application::services::dispatch::{Host, dispatch};
use minisiem_deploy::domain::{Command, DeployError, ServiceLayout, decode};

use crate::helpers::{
    FakeFirewall, FakeServiceManager, MemoryFs, RecordingReporter, Reply, UNIT_PATH, layout,
};

fn host<'a>(
    sm: &'a FakeServiceManager,
    fs: &'a MemoryFs,
    fw: &'a FakeFirewall,
    reporter: &'a RecordingReporter,
    layout: &'a ServiceLayout,
) -> Host<'a, FakeServiceManager, MemoryFs, FakeFirewall, RecordingReporter> {
    Host {
        manager: sm,
        fs,
        firewall: fw,
        reporter,
        layout,
        show_progress: false,
    }
}

fn deploy_error(err: &anyhow::Error) -> &DeployError {
    err.downcast_ref::<DeployError>().expect("typed DeployError")
}

#[tokio::test]
async fn empty_command_list_is_usage_error_without_side_effects() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::healthy(),
        MemoryFs::with_runtime(),
        FakeFirewall::new(Reply::Ok),
        RecordingReporter::default(),
        layout(),
    );

    let err = dispatch(&[], &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect_err("empty input");

    assert!(deploy_error(&err).is_usage());
    assert!(sm.calls().is_empty());
    assert_eq!(fs.write_count(), 0);
    assert_eq!(fw.runs(), 0);
}

#[tokio::test]
async fn install_then_firewall_succeeds_even_if_hook_fails() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::healthy(),
        MemoryFs::with_runtime(),
        FakeFirewall::new(Reply::Fail),
        RecordingReporter::default(),
        layout(),
    );
    let commands = decode(&["--install-service", "--ensure-firewall"]);

    dispatch(&commands, &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect("hook failure must not fail the run");

    let unit = fs.file(UNIT_PATH).expect("unit written");
    assert!(unit.contains("SyslogIdentifier=mini-siem\n"));
    assert!(unit.contains("Restart=always\n"));
    assert!(unit.contains("RestartSec=3\n"));
    assert_eq!(fw.runs(), 1);
    assert_eq!(sm.calls(), vec!["daemon-reload"]);
}

#[tokio::test]
async fn invalid_token_stops_after_applying_earlier_flags() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::healthy(),
        MemoryFs::with_runtime(),
        FakeFirewall::new(Reply::Ok),
        RecordingReporter::default(),
        layout(),
    );
    let commands = decode(&["--ensure-firewall", "--oops", "--install-service"]);
    assert_eq!(commands.last(), Some(&Command::Invalid("--oops".to_string())));

    let err = dispatch(&commands, &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect_err("usage error");

    assert!(matches!(deploy_error(&err), DeployError::Usage(t) if t == "--oops"));
    assert_eq!(fw.runs(), 1, "flag before the invalid token ran");
    assert_eq!(fs.write_count(), 0, "flag after the invalid token did not run");
}

#[tokio::test]
async fn repeated_flags_all_run() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::healthy(),
        MemoryFs::with_runtime(),
        FakeFirewall::new(Reply::Ok),
        RecordingReporter::default(),
        layout(),
    );
    let commands = decode(&["--ensure-firewall", "--ensure-firewall", "--install-service"]);

    dispatch(&commands, &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect("dispatch");

    assert_eq!(fw.runs(), 2);
    assert_eq!(sm.count("daemon-reload"), 1);
}

#[tokio::test]
async fn missing_runtime_aborts_remaining_commands() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::healthy(),
        MemoryFs::default(),
        FakeFirewall::new(Reply::Ok),
        RecordingReporter::default(),
        layout(),
    );
    let commands = decode(&["--install-service", "--ensure-firewall"]);

    let err = dispatch(&commands, &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect_err("precondition failure");

    assert!(matches!(deploy_error(&err), DeployError::RuntimeMissing(_)));
    assert!(!deploy_error(&err).is_usage());
    assert_eq!(fw.runs(), 0);
    assert!(fs.file(UNIT_PATH).is_none());
}

#[tokio::test]
async fn install_then_remove_round_trip() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::healthy(),
        MemoryFs::with_runtime(),
        FakeFirewall::new(Reply::Ok),
        RecordingReporter::default(),
        layout(),
    );
    let commands = decode(&["--install-service", "--remove-service"]);

    dispatch(&commands, &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect("dispatch");

    assert!(fs.file(UNIT_PATH).is_none());
    assert_eq!(
        sm.calls(),
        vec![
            "daemon-reload",
            "stop mini-siem.service",
            "disable mini-siem.service",
            "daemon-reload",
        ]
    );
}

#[tokio::test]
async fn remove_failures_never_fail_dispatch() {
    let (sm, fs, fw, rep, lay) = (
        FakeServiceManager::scripted(Reply::SpawnError, Reply::SpawnError, Reply::SpawnError),
        MemoryFs::default().failing_removes(),
        FakeFirewall::new(Reply::Ok),
        RecordingReporter::default(),
        layout(),
    );

    dispatch(&[Command::Remove], &host(&sm, &fs, &fw, &rep, &lay))
        .await
        .expect("remove is best-effort");
}
