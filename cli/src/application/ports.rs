//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and never from `crate::infra`
//! or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{DeployConfig, ServiceLayout};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Run a program from `dir` with a custom timeout.
    ///
    /// # Errors
    ///
    /// Same as [`CommandRunner::run_with_timeout`].
    async fn run_in(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Service Manager Port ──────────────────────────────────────────────────────

/// Control operations against the host service manager.
///
/// Every method returns the raw command output; callers decide whether a
/// nonzero exit is fatal or best-effort.
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    /// Stop a unit if it is running.
    async fn stop(&self, unit: &str) -> Result<Output>;
    /// Disable a unit from starting at boot.
    async fn disable(&self, unit: &str) -> Result<Output>;
    /// Reload unit definitions from disk.
    async fn daemon_reload(&self) -> Result<Output>;
}

// ── Firewall Delegate Port ────────────────────────────────────────────────────

/// The detector's own firewall bootstrap entry point.
#[allow(async_fn_in_trait)]
pub trait FirewallDelegate {
    /// Run `ensure-firewall` for the service described by `layout`.
    async fn ensure_firewall(&self, layout: &ServiceLayout) -> Result<Output>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the host filesystem operations the actions need.
pub trait LocalFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Whether `path` is a regular file the current user may execute.
    fn is_executable(&self, path: &Path) -> bool;
    /// Read a file, returning `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than "not found".
    fn read_optional(&self, path: &Path) -> Result<Option<String>>;
    /// Replace the file at `path` with `content`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    /// Delete the file at `path`. Returns `false` if it was already absent.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than "not found".
    fn remove_file(&self, path: &Path) -> Result<bool>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the deployment configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<DeployConfig>;
    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
