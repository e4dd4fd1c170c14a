//! CLI interface module
//!
//! One-shot commands built on the same page model as the TUI.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::cli::{Commands, ConfigCommands};
use crate::client::{CatalogApi, ClientError, HttpCatalogClient};
use crate::config::get_config;
use crate::errors::ShopfrontError;
use crate::page::PageEvent;

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    RequestError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::RequestError(msg) => format!("Request error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ShopfrontError> for CliError {
    fn from(err: ShopfrontError) -> Self {
        match err {
            ShopfrontError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::RequestError(err.to_string())
    }
}

/// Wait for the next page event.
pub(crate) async fn next_event(
    events: &mut UnboundedReceiver<PageEvent>,
) -> Result<PageEvent, CliError> {
    events
        .recv()
        .await
        .ok_or_else(|| CliError::CommandError("page event channel closed".to_string()))
}

/// Run a CLI command from clap-parsed input against the configured backend
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // config generate 不需要访问 API
    if let Commands::Config { action } = cmd {
        return match action {
            ConfigCommands::Generate { output_path, force } => {
                commands::config_generate(output_path, force).await
            }
        };
    }

    let config = get_config();
    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::from_config(&config.api));
    run_with_api(cmd, api).await
}

/// Run a catalog command against any `CatalogApi`
pub async fn run_with_api(cmd: Commands, api: Arc<dyn CatalogApi>) -> Result<(), CliError> {
    match cmd {
        Commands::Popular { watch } => commands::show_popular(api, watch).await,
        Commands::Search { term } => {
            commands::search_products(api, &Commands::join_term(&term)).await
        }
        Commands::Like { product_id } => commands::like_product(api, &product_id).await,
        Commands::Config { .. } => Err(CliError::CommandError(
            "config commands do not use the catalog API".to_string(),
        )),
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started from the main entry point".to_string(),
        )),
    }
}
