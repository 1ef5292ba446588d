//! Fake host layout for driving the real binary.

#![allow(dead_code, clippy::expect_used, deprecated)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp directory laid out like a host, with scripted stand-ins for
/// `systemctl` and the detector interpreter that log their arguments.
pub struct FakeHost {
    dir: TempDir,
    pub config_path: PathBuf,
    pub unit_dir: PathBuf,
    pub project_dir: PathBuf,
    pub runtime: PathBuf,
    log: PathBuf,
}

impl FakeHost {
    /// Host with the detector interpreter installed.
    pub fn new() -> Self {
        let host = Self::without_runtime();
        write_script(
            &host.runtime,
            &format!(
                "#!/bin/sh\necho \"runtime $*\" >> '{}'\nexit ${{FAKE_FIREWALL_EXIT:-0}}\n",
                host.log.display()
            ),
        );
        host
    }

    /// Host where dependencies were never installed.
    pub fn without_runtime() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        let unit_dir = root.join("systemd");
        let project_dir = root.join("project");
        let venv_bin = project_dir.join(".venv").join("bin");
        std::fs::create_dir_all(&unit_dir).expect("unit dir");
        std::fs::create_dir_all(&venv_bin).expect("venv dir");

        let log = root.join("calls.log");
        let systemctl = root.join("systemctl");
        let unit_file = unit_dir.join("mini-siem.service");
        write_script(
            &systemctl,
            &format!(
                "#!/bin/sh\n\
                 echo \"systemctl $*\" >> '{log}'\n\
                 case \"$1\" in\n\
                   stop|disable)\n\
                     [ -f '{unit}' ] || {{ echo \"Failed to $1 $2: Unit $2 not loaded.\" >&2; exit 5; }} ;;\n\
                 esac\n\
                 exit 0\n",
                log = log.display(),
                unit = unit_file.display(),
            ),
        );

        let config_path = root.join("deploy.yaml");
        std::fs::write(
            &config_path,
            format!(
                "project_dir: {}\nunit_dir: {}\nsystemctl: {}\ncommand_timeout_secs: 10\nfirewall_timeout_secs: 10\n",
                project_dir.display(),
                unit_dir.display(),
                systemctl.display(),
            ),
        )
        .expect("config");

        Self {
            runtime: venv_bin.join("python3"),
            dir,
            config_path,
            unit_dir,
            project_dir,
            log,
        }
    }

    pub fn unit_path(&self) -> PathBuf {
        self.unit_dir.join("mini-siem.service")
    }

    pub fn unit(&self) -> Option<String> {
        std::fs::read_to_string(self.unit_path()).ok()
    }

    /// Every fake-command invocation so far, in order.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("minisiem-deploy").expect("binary should exist");
        cmd.env("MINISIEM_DEPLOY_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("MINISIEM_QUIET")
            .env_remove("FAKE_FIREWALL_EXIT");
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, body).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
}
