use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::client::{CatalogApi, HttpCatalogClient};
use crate::config::{StaticConfig, get_config, init_config};
use crate::system::logging::{LogTarget, init_logging};
use crate::system::panic_handler::{RunMode, install_panic_hook};

/// Everything a run mode needs once startup is done.
pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    pub api: Arc<dyn CatalogApi>,
    /// Flushes buffered log lines when dropped
    _log_guard: WorkerGuard,
}

/// 启动前准备：.env、配置、日志、panic hook 和 API 客户端
pub fn prepare_startup(
    config_path: Option<&str>,
    base_url: Option<&str>,
    mode: RunMode,
) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    dotenvy::dotenv().ok();

    let config =
        StaticConfig::load(config_path, base_url).context("Failed to load configuration")?;
    init_config(config);
    let config = get_config();

    // TUI 模式下终端归界面所有，日志只写文件
    let target = match mode {
        RunMode::Tui => LogTarget::FileOnly,
        RunMode::Cli => LogTarget::Auto,
    };
    let log_guard = init_logging(&config.logging, target).context("Failed to initialize logging")?;
    install_panic_hook(mode);

    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::from_config(&config.api));
    info!("Using catalog API at {} ({})", config.api.base_url, api.name());
    debug!(
        "Startup finished in {:.2}ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(StartupContext {
        config,
        api,
        _log_guard: log_guard,
    })
}
