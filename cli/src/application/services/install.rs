//! Application service: unit installation use-case.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{LocalFs, ProgressReporter, ServiceManager};
use crate::domain::unit::content_digest;
use crate::domain::{DeployError, ServiceLayout, UnitDefinition};

/// What an install run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Where the unit was written.
    pub unit_path: PathBuf,
    /// SHA-256 of the written unit.
    pub digest: String,
    /// `false` when the file already held identical content.
    pub changed: bool,
}

/// Write the unit definition and reload the service manager.
///
/// The runtime interpreter is checked before anything is written. The unit
/// file is always fully rewritten and `daemon-reload` always runs once. The
/// service is neither enabled nor started.
///
/// # Errors
///
/// - [`DeployError::RuntimeMissing`] if the interpreter is absent or not
///   executable. Nothing is written in that case.
/// - An I/O error if the unit file cannot be written.
/// - [`DeployError::ServiceManager`] if `daemon-reload` fails.
pub async fn install_service(
    fs: &impl LocalFs,
    manager: &impl ServiceManager,
    layout: &ServiceLayout,
    reporter: &impl ProgressReporter,
) -> Result<InstallReport> {
    let runtime = layout.runtime();
    if !fs.is_executable(runtime) {
        return Err(DeployError::RuntimeMissing(runtime.to_path_buf()).into());
    }

    let unit_path = layout.unit_path();
    let content = UnitDefinition::for_layout(layout).render();
    let digest = content_digest(&content);

    // Only used to tell the operator whether anything changed.
    let previous = fs.read_optional(&unit_path).unwrap_or_else(|e| {
        tracing::debug!(error = %e, path = %unit_path.display(), "cannot read existing unit");
        None
    });
    let changed = previous.as_deref() != Some(content.as_str());

    reporter.step(&format!("Writing {}...", unit_path.display()));
    fs.write(&unit_path, &content)
        .with_context(|| format!("installing unit {}", unit_path.display()))?;
    tracing::debug!(path = %unit_path.display(), %digest, changed, "unit written");

    reporter.step("Reloading systemd configuration...");
    let output = manager
        .daemon_reload()
        .await
        .context("reloading service manager")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DeployError::ServiceManager {
            action: "daemon-reload",
            detail: stderr.trim().to_string(),
        }
        .into());
    }

    let short = digest.get(..12).unwrap_or(&digest);
    if changed {
        reporter.success(&format!("Installed {} (sha256 {short})", layout.unit_name()));
    } else {
        reporter.success(&format!(
            "{} already up to date (sha256 {short})",
            layout.unit_name()
        ));
    }
    reporter.step(&format!(
        "Enable and start it with: systemctl enable --now {}",
        layout.service_name()
    ));

    Ok(InstallReport {
        unit_path,
        digest,
        changed,
    })
}
