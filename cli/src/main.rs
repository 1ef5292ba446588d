//! Mini SIEM deploy: lifecycle orchestrator for the detector service

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minisiem_deploy::cli::Cli;
use minisiem_deploy::domain::DeployError;
use minisiem_deploy::output::OutputContext;

/// Log filter for diagnostic output on stderr.
const LOG_ENV: &str = "MINISIEM_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = cli.run().await {
        OutputContext::from_env().error(&format!("Error: {e:#}"));
        let usage = e
            .downcast_ref::<DeployError>()
            .is_some_and(DeployError::is_usage);
        if usage {
            eprintln!();
            eprintln!("{}", Cli::usage());
            std::process::exit(2);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
