//! Resolved host paths and identifiers for the managed service.

use std::path::{Path, PathBuf};

use crate::domain::config::DeployConfig;

/// Everything an action needs to address the service on the host.
///
/// Built once per invocation from a validated [`DeployConfig`] and then only
/// borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLayout {
    service_name: String,
    project_dir: PathBuf,
    runtime: PathBuf,
    package: String,
    unit_dir: PathBuf,
}

impl ServiceLayout {
    #[must_use]
    pub fn from_config(cfg: &DeployConfig) -> Self {
        Self {
            service_name: cfg.service_name.clone(),
            project_dir: cfg.project_dir.clone(),
            runtime: cfg.runtime_path(),
            package: cfg.package.clone(),
            unit_dir: cfg.unit_dir.clone(),
        }
    }

    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Full unit name, e.g. `mini-siem.service`.
    #[must_use]
    pub fn unit_name(&self) -> String {
        format!("{}.service", self.service_name)
    }

    #[must_use]
    pub fn unit_path(&self) -> PathBuf {
        self.unit_dir.join(self.unit_name())
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    #[must_use]
    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    /// Arguments for the long-running detector: `-m <package>`.
    #[must_use]
    pub fn detector_args(&self) -> Vec<String> {
        vec!["-m".to_string(), self.package.clone()]
    }

    /// Arguments for the firewall hook: `-m <package>.cli ensure-firewall`.
    #[must_use]
    pub fn firewall_args(&self) -> Vec<String> {
        vec![
            "-m".to_string(),
            format!("{}.cli", self.package),
            "ensure-firewall".to_string(),
        ]
    }
}
