//! Logging system initialization
//!
//! Sets up the tracing subscriber from the `[logging]` config section.

use std::path::Path;

use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, ShopfrontError};

/// Log file used in TUI mode when none is configured (stdout belongs to the UI).
pub const DEFAULT_TUI_LOG_FILE: &str = "shopfront.log";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Configured file, or stderr if none
    Auto,
    /// Configured file, or [`DEFAULT_TUI_LOG_FILE`]
    FileOnly,
}

/// Initialize logging system based on configuration
///
/// **Note**: call once during startup, after the configuration is loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &LoggingConfig,
    target: LogTarget,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = match (config.file.as_deref(), target) {
        (Some(f), _) if !f.is_empty() => Some(f.to_string()),
        (_, LogTarget::FileOnly) => Some(DEFAULT_TUI_LOG_FILE.to_string()),
        _ => None,
    };

    let writer: Box<dyn std::io::Write + Send + Sync> = match file.as_deref() {
        Some(log_file) if config.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_TUI_LOG_FILE);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    ShopfrontError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        // stdout 留给命令输出
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ShopfrontError::config(format!("invalid logging.level: {}", e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(file.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| ShopfrontError::config(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
