//! Application service: runs decoded lifecycle commands in order.

use anyhow::Result;

use crate::application::ports::{FirewallDelegate, LocalFs, ProgressReporter, ServiceManager};
use crate::application::services::{firewall, install, remove};
use crate::domain::{Command, DeployError, ServiceLayout};

/// Handles to every host resource an action may touch.
///
/// Built once by the entry point; tests build it from in-memory fakes.
pub struct Host<'a, M, F, D, P> {
    pub manager: &'a M,
    pub fs: &'a F,
    pub firewall: &'a D,
    pub reporter: &'a P,
    pub layout: &'a ServiceLayout,
    /// Show a spinner for long-running steps.
    pub show_progress: bool,
}

/// Run `commands` left to right.
///
/// Every recognized command runs, duplicates included. An
/// [`Command::Invalid`] stops the run with a usage error; the commands before
/// it have already taken effect.
///
/// # Errors
///
/// - [`DeployError::NoAction`] if `commands` is empty. Nothing runs.
/// - [`DeployError::Usage`] when an invalid token is reached.
/// - Any fatal install error. Commands after it do not run.
pub async fn dispatch<M, F, D, P>(commands: &[Command], host: &Host<'_, M, F, D, P>) -> Result<()>
where
    M: ServiceManager,
    F: LocalFs,
    D: FirewallDelegate,
    P: ProgressReporter,
{
    if commands.is_empty() {
        return Err(DeployError::NoAction.into());
    }

    for command in commands {
        tracing::debug!(command = command.label(), "dispatching");
        match command {
            Command::EnsureFirewall => {
                let _ = firewall::ensure_firewall_with_progress(
                    host.firewall,
                    host.layout,
                    host.reporter,
                    host.show_progress,
                )
                .await;
            }
            Command::Install => {
                install::install_service(host.fs, host.manager, host.layout, host.reporter)
                    .await?;
            }
            Command::Remove => {
                let _ = remove::remove_service(host.fs, host.manager, host.layout, host.reporter)
                    .await;
            }
            Command::Invalid(token) => {
                return Err(DeployError::Usage(token.clone()).into());
            }
        }
    }
    Ok(())
}
