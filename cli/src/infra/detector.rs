//! Infrastructure implementation of the `FirewallDelegate` port.
//!
//! Runs the detector's own CLI: `<runtime> -m <package>.cli ensure-firewall`
//! from the project directory.

use std::process::Output;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, FirewallDelegate};
use crate::domain::ServiceLayout;

/// Subprocess adapter for the detector's `ensure-firewall` subcommand.
pub struct DetectorHook<R: CommandRunner> {
    runner: R,
    timeout: Duration,
}

impl<R: CommandRunner> DetectorHook<R> {
    pub fn new(runner: R, timeout: Duration) -> Self {
        Self { runner, timeout }
    }
}

impl<R: CommandRunner> FirewallDelegate for DetectorHook<R> {
    async fn ensure_firewall(&self, layout: &ServiceLayout) -> Result<Output> {
        let runtime = layout.runtime().to_string_lossy();
        let args = layout.firewall_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run_in(layout.project_dir(), &runtime, &args, self.timeout)
            .await
            .context("running detector ensure-firewall")
    }
}
