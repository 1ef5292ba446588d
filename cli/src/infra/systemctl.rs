//! Infrastructure implementation of the `ServiceManager` port.
//!
//! `Systemctl<R>` routes every service manager call through a
//! `CommandRunner`, so tests can inject a recording runner.

use std::process::Output;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, ServiceManager};

/// systemd adapter driving the `systemctl` binary.
pub struct Systemctl<R: CommandRunner> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> Systemctl<R> {
    /// Create an adapter that runs `program` (normally `systemctl`) through `runner`.
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    async fn systemctl(&self, args: &[&str]) -> Result<Output> {
        self.runner
            .run(&self.program, args)
            .await
            .with_context(|| format!("{} {}", self.program, args.join(" ")))
    }
}

impl<R: CommandRunner> ServiceManager for Systemctl<R> {
    async fn stop(&self, unit: &str) -> Result<Output> {
        self.systemctl(&["stop", unit]).await
    }

    async fn disable(&self, unit: &str) -> Result<Output> {
        self.systemctl(&["disable", unit]).await
    }

    async fn daemon_reload(&self) -> Result<Output> {
        self.systemctl(&["daemon-reload"]).await
    }
}
