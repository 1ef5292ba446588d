//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs` or `std::process`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Invocation errors ─────────────────────────────────────────────────────────

/// Errors that terminate the whole invocation.
///
/// Anything not listed here is either wrapped by `anyhow` context or is a
/// best-effort failure that never leaves its action.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("unrecognized option '{0}'")]
    Usage(String),

    #[error("no action given")]
    NoAction,

    #[error("runtime not found at {}; install dependencies first", .0.display())]
    RuntimeMissing(PathBuf),

    #[error("systemctl {action} failed: {detail}")]
    ServiceManager { action: &'static str, detail: String },
}

impl DeployError {
    /// Whether this error is an operator input mistake rather than a host failure.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::NoAction)
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating a `DeployConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid service name '{0}': must match ^[A-Za-z0-9][A-Za-z0-9:_.@-]*$")]
    InvalidServiceName(String),

    #[error("Invalid package '{0}': expected a dotted Python module path")]
    InvalidPackage(String),

    #[error("{key} must be an absolute path, got '{}'", .value.display())]
    RelativePath { key: &'static str, value: PathBuf },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}
