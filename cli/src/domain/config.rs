//! Domain types and validators for deployment configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_SERVICE_NAME: &str = "mini-siem";
pub const DEFAULT_PROJECT_DIR: &str = "/opt/mini_siem";
pub const DEFAULT_PACKAGE: &str = "mini_siem";
pub const DEFAULT_UNIT_DIR: &str = "/etc/systemd/system";
pub const DEFAULT_SYSTEMCTL: &str = "systemctl";
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FIREWALL_TIMEOUT_SECS: u64 = 120;

/// Interpreter location relative to the project directory.
pub const VENV_INTERPRETER: &str = ".venv/bin/python3";

#[allow(clippy::expect_used)] // Patterns are compile-time constants
static SERVICE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9:_.@-]*$").expect("valid regex"));

#[allow(clippy::expect_used)]
static PACKAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").expect("valid regex")
});

// ── Config schema ────────────────────────────────────────────────────────────

/// Deployment settings stored in `/etc/mini_siem/deploy.yaml`.
///
/// Every field has a default, so a missing or empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Unit name without the `.service` suffix.
    pub service_name: String,
    /// Directory the detector runs from.
    pub project_dir: PathBuf,
    /// Interpreter override. Defaults to `<project_dir>/.venv/bin/python3`.
    pub runtime: Option<PathBuf>,
    /// Top-level detector package passed to `-m`.
    pub package: String,
    /// systemd system unit directory.
    pub unit_dir: PathBuf,
    /// Service manager control program.
    pub systemctl: String,
    /// Timeout for each service manager command.
    pub command_timeout_secs: u64,
    /// Timeout for the firewall bootstrap hook.
    pub firewall_timeout_secs: u64,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            project_dir: PathBuf::from(DEFAULT_PROJECT_DIR),
            runtime: None,
            package: DEFAULT_PACKAGE.to_string(),
            unit_dir: PathBuf::from(DEFAULT_UNIT_DIR),
            systemctl: DEFAULT_SYSTEMCTL.to_string(),
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            firewall_timeout_secs: DEFAULT_FIREWALL_TIMEOUT_SECS,
        }
    }
}

impl DeployConfig {
    /// Interpreter path, falling back to the project virtualenv.
    #[must_use]
    pub fn runtime_path(&self) -> PathBuf {
        self.runtime
            .clone()
            .unwrap_or_else(|| self.project_dir.join(VENV_INTERPRETER))
    }

    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    #[must_use]
    pub fn firewall_timeout(&self) -> Duration {
        Duration::from_secs(self.firewall_timeout_secs)
    }

    /// Check every field. The first failing field wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the offending field.
    pub fn validate(&self) -> Result<()> {
        validate_service_name(&self.service_name)?;
        validate_package(&self.package)?;
        require_absolute("project_dir", &self.project_dir)?;
        require_absolute("unit_dir", &self.unit_dir)?;
        if let Some(runtime) = &self.runtime {
            require_absolute("runtime", runtime)?;
        }
        if self.command_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("command_timeout_secs").into());
        }
        if self.firewall_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("firewall_timeout_secs").into());
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a unit name (without the `.service` suffix).
///
/// # Errors
///
/// Returns an error if the name contains characters systemd does not accept.
pub fn validate_service_name(name: &str) -> Result<()> {
    if !SERVICE_NAME_RE.is_match(name) {
        return Err(ConfigError::InvalidServiceName(name.to_string()).into());
    }
    Ok(())
}

/// Validates a dotted Python module path such as `mini_siem`.
///
/// # Errors
///
/// Returns an error if the value is not a dotted identifier path.
pub fn validate_package(package: &str) -> Result<()> {
    if !PACKAGE_RE.is_match(package) {
        return Err(ConfigError::InvalidPackage(package.to_string()).into());
    }
    Ok(())
}

fn require_absolute(key: &'static str, value: &std::path::Path) -> Result<()> {
    if !value.is_absolute() {
        return Err(ConfigError::RelativePath {
            key,
            value: value.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
