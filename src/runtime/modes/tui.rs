//! TUI mode

use anyhow::{Context, Result};

use crate::page::PageSettings;
use crate::runtime::lifetime::startup::prepare_startup;
use crate::system::panic_handler::RunMode;

/// Run TUI mode
pub async fn run_tui(config_path: Option<&str>, base_url: Option<&str>) -> Result<()> {
    let ctx = prepare_startup(config_path, base_url, RunMode::Tui)?;
    let settings = PageSettings::from(&ctx.config.ui);
    crate::interfaces::tui::run_tui(ctx.api.clone(), settings)
        .await
        .context("TUI terminated abnormally")
}
