//! Application service: firewall bootstrap use-case.
//!
//! The work itself belongs to the detector; this service only runs its hook
//! and never lets a failure escape as an error.

use crate::application::ports::{FirewallDelegate, ProgressReporter};
use crate::domain::{BestEffort, ServiceLayout};

const STEP_MESSAGE: &str = "Ensuring firewall prerequisites...";
const DONE_MESSAGE: &str = "Firewall prerequisites in place";

/// Run the detector's `ensure-firewall` hook.
///
/// A failing hook is reported as a warning and returned as
/// [`BestEffort::Ignored`]; the bootstrap runs again on every service start.
pub async fn ensure_firewall(
    delegate: &impl FirewallDelegate,
    layout: &ServiceLayout,
    reporter: &impl ProgressReporter,
) -> BestEffort {
    reporter.step(STEP_MESSAGE);
    let outcome = BestEffort::from_output(delegate.ensure_firewall(layout).await);
    report(&outcome, reporter);
    outcome
}

/// Same as [`ensure_firewall`], with a spinner while the hook runs.
pub async fn ensure_firewall_with_progress(
    delegate: &impl FirewallDelegate,
    layout: &ServiceLayout,
    reporter: &impl ProgressReporter,
    show_progress: bool,
) -> BestEffort {
    if !show_progress {
        return ensure_firewall(delegate, layout, reporter).await;
    }
    let pb = crate::output::progress::spinner(STEP_MESSAGE);
    let outcome = BestEffort::from_output(delegate.ensure_firewall(layout).await);
    match &outcome {
        BestEffort::Done => crate::output::progress::finish_ok(&pb, DONE_MESSAGE),
        BestEffort::Ignored(_) => {
            pb.finish_and_clear();
            report(&outcome, reporter);
        }
    }
    outcome
}

fn report(outcome: &BestEffort, reporter: &impl ProgressReporter) {
    match outcome {
        BestEffort::Done => reporter.success(DONE_MESSAGE),
        BestEffort::Ignored(reason) => {
            tracing::debug!(%reason, "firewall hook failed");
            reporter.warn(&format!(
                "Firewall bootstrap failed ({reason}); it is retried on every service start"
            ));
        }
    }
}
