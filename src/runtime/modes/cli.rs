//! CLI mode

use crate::cli::Commands;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::runtime::lifetime::startup::prepare_startup;
use crate::system::panic_handler::RunMode;

/// Run CLI mode
///
/// `config generate` runs without loading the configuration it is about to
/// write; every other command goes through startup first.
pub async fn run_cli(
    config_path: Option<&str>,
    base_url: Option<&str>,
    command: Commands,
) -> Result<(), CliError> {
    if matches!(command, Commands::Config { .. }) {
        return run_cli_command(command).await;
    }

    let _ctx = prepare_startup(config_path, base_url, RunMode::Cli)
        .map_err(|e| CliError::ConfigError(format!("{:#}", e)))?;
    run_cli_command(command).await
}
