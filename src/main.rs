//! prharvest CLI entrypoint for pull request review exports.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use prharvest::{IntakeError, OperationMode, PrharvestConfig};
use tracing_subscriber::EnvFilter;

mod cli;

const LOG_ENV: &str = "PRHARVEST_LOG";
const DEFAULT_LOG_FILTER: &str = "prharvest=info";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), IntakeError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::PullRequestExport => cli::pull_request_export::run(&config).await,
        OperationMode::TeamRepositories => cli::team_repositories::run_listing(&config).await,
        OperationMode::TeamExport => cli::team_repositories::run_export(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PrharvestConfig, IntakeError> {
    PrharvestConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr subscriber filtered by `PRHARVEST_LOG`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
