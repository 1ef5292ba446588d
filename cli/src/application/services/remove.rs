//! Application service: unit removal use-case.
//!
//! Every step is best-effort: a host where the service was never installed,
//! half installed or already removed must still come out clean.

use std::path::PathBuf;

use crate::application::ports::{LocalFs, ProgressReporter, ServiceManager};
use crate::domain::{BestEffort, ServiceLayout};

/// Per-step outcome of a remove run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReport {
    pub unit_path: PathBuf,
    pub stop: BestEffort,
    pub disable: BestEffort,
    pub delete: BestEffort,
    pub reload: BestEffort,
    /// Whether a unit file was present before the run.
    pub unit_file_existed: bool,
}

impl RemoveReport {
    /// Steps in execution order, labelled.
    #[must_use]
    pub fn steps(&self) -> [(&'static str, &BestEffort); 4] {
        [
            ("stop", &self.stop),
            ("disable", &self.disable),
            ("delete unit file", &self.delete),
            ("daemon-reload", &self.reload),
        ]
    }

    #[must_use]
    pub fn all_done(&self) -> bool {
        self.steps().iter().all(|(_, outcome)| outcome.is_done())
    }
}

/// Stop, disable and delete the unit, then reload the service manager.
///
/// Each step runs regardless of how the previous one went. Failures are
/// recorded in the returned report and reported as warnings, except a
/// stop/disable failure that only says systemd does not know the unit.
pub async fn remove_service(
    fs: &impl LocalFs,
    manager: &impl ServiceManager,
    layout: &ServiceLayout,
    reporter: &impl ProgressReporter,
) -> RemoveReport {
    let unit = layout.unit_name();
    let unit_path = layout.unit_path();
    let unit_file_existed = fs.exists(&unit_path);

    reporter.step(&format!("Stopping {unit}..."));
    let stop = BestEffort::from_output(manager.stop(&unit).await);

    reporter.step(&format!("Disabling {unit}..."));
    let disable = BestEffort::from_output(manager.disable(&unit).await);

    reporter.step(&format!("Deleting {}...", unit_path.display()));
    let delete = BestEffort::from_result(fs.remove_file(&unit_path));

    reporter.step("Reloading systemd configuration...");
    let reload = BestEffort::from_output(manager.daemon_reload().await);

    let report = RemoveReport {
        unit_path,
        stop,
        disable,
        delete,
        reload,
        unit_file_existed,
    };

    for (step, outcome) in report.steps() {
        if let BestEffort::Ignored(reason) = outcome {
            tracing::debug!(step, %reason, "remove step ignored");
            let expected = matches!(step, "stop" | "disable") && unit_unknown(reason);
            if !expected {
                reporter.warn(&format!("{step}: {reason} (ignored)"));
            }
        }
    }
    reporter.success(&format!("Removed {unit}"));
    report
}

/// Whether a systemctl failure only says the unit is not known to systemd.
///
/// `stop` reports "Unit ... not loaded."; `disable` reports "Unit file ...
/// does not exist.".
fn unit_unknown(reason: &str) -> bool {
    reason.contains("not loaded") || reason.contains("does not exist")
}
