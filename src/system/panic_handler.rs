//! Panic handler module
//!
//! Writes every panic to `crash.log`. In TUI mode the terminal is restored
//! first so the message is readable.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Utc;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

const CRASH_LOG: &str = "crash.log";

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        if mode == RunMode::Tui {
            #[cfg(feature = "tui")]
            ratatui::restore();
        }

        eprintln!("shopfront crashed: {} ({})", message, location);
        eprintln!("Details were written to {}", CRASH_LOG);
    }));
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(CRASH_LOG)?;
    writeln!(file, "==== {} ====", timestamp)?;
    writeln!(file, "panic: {}", message)?;
    writeln!(file, "at: {}", location)?;
    writeln!(file, "{}", backtrace)?;
    Ok(())
}
