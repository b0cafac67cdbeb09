// src/main.rs
use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use nagios_probes::{cli::Cli, config, probe};
use nagiosplugin::{Resource, Runner, ServiceState};
use std::fmt;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Setup failure, printed by the runner as `UNKNOWN: <cause chain>` on one line.
struct SetupError(anyhow::Error);

impl fmt::Debug for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // invalid arguments are UNKNOWN to the scheduler, not clap's usual 2
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ServiceState::Ok.exit_code(),
                _ => ServiceState::Unknown.exit_code(),
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    let outcome = run(cli).await.map_err(|e| {
        error!("{:#}", e);
        SetupError(e)
    });

    Runner::new()
        .on_error(|e| (ServiceState::Unknown, e))
        .safe_run(|| outcome)
        .print_and_exit()
}

async fn run(cli: Cli) -> Result<Resource> {
    let config = config::load_config(cli.config.as_deref())?;
    let check = cli
        .command
        .build_probe(&config)
        .context("Failed to set up probe")?;

    Ok(probe::execute(check.as_ref()).await)
}

// stdout carries the status line, so logs go to stderr
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "nagios_probes=debug"
    } else {
        "nagios_probes=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
