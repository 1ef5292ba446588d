//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::application::ConfigStore as _;
use crate::application::services::dispatch::{Host, dispatch};
use crate::domain::{Command, DeployError, ServiceLayout, decode};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::detector::DetectorHook;
use crate::infra::fs::HostFs;
use crate::infra::systemctl::Systemctl;
use crate::output::{OutputContext, TerminalReporter};

const ACTIONS_HELP: &str = "\
Actions (run left to right, all of them):
  --ensure-firewall   Run the detector's firewall bootstrap (failures are ignored)
  --install-service   Write the systemd unit and reload systemd (does not enable or start it)
  --remove-service    Stop, disable and delete the unit, then reload systemd

--help and --version are only recognized as the first argument. Anywhere
else they are unrecognized and stop processing like any other unknown token.

Environment:
  MINISIEM_DEPLOY_CONFIG  Config file (default /etc/mini_siem/deploy.yaml)
  MINISIEM_LOG            Log filter for diagnostics on stderr (default warn)
  MINISIEM_QUIET          Suppress progress output
  NO_COLOR                Disable colored output";

/// Install, remove and bootstrap the Mini SIEM detector service
#[derive(Parser)]
#[command(
    name = "minisiem-deploy",
    version,
    arg_required_else_help = true,
    after_help = ACTIONS_HELP
)]
pub struct Cli {
    /// One or more of --ensure-firewall, --install-service, --remove-service
    #[arg(
        value_name = "ACTION",
        allow_hyphen_values = true,
        trailing_var_arg = true,
        num_args = 0..
    )]
    pub actions: Vec<String>,
}

impl Cli {
    /// Short usage text printed for invalid input.
    #[must_use]
    pub fn usage() -> String {
        let mut cmd = Self::command();
        format!("{}\n\n{ACTIONS_HELP}", cmd.render_usage())
    }

    /// Execute every requested action.
    ///
    /// # Errors
    ///
    /// Returns a usage error for empty or unrecognized input, or the first
    /// fatal action error.
    pub async fn run(self) -> Result<()> {
        let commands = decode(&self.actions);
        // Nothing valid to do: fail before touching config or the host.
        match commands.first() {
            None => return Err(DeployError::NoAction.into()),
            Some(Command::Invalid(token)) => return Err(DeployError::Usage(token.clone()).into()),
            Some(_) => {}
        }

        let config = YamlConfigStore.load()?;
        config.validate()?;
        let layout = ServiceLayout::from_config(&config);
        tracing::debug!(?layout, "resolved service layout");

        let ctx = OutputContext::from_env();
        let reporter = TerminalReporter::new(&ctx);
        let manager = Systemctl::new(
            config.systemctl.clone(),
            TokioCommandRunner::new(config.command_timeout()),
        );
        let firewall = DetectorHook::new(
            TokioCommandRunner::new(config.command_timeout()),
            config.firewall_timeout(),
        );
        let host = Host {
            manager: &manager,
            fs: &HostFs,
            firewall: &firewall,
            reporter: &reporter,
            layout: &layout,
            show_progress: ctx.show_progress(),
        };
        dispatch(&commands, &host).await
    }
}
