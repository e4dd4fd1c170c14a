use clap::Parser;
use colored::Colorize;

use shopfront::cli::Cli;
use shopfront::runtime::modes::{self, Mode};

#[tokio::main]
async fn main() {
    let Cli {
        config,
        base_url,
        command,
    } = Cli::parse();

    match modes::detect_mode(command.as_ref()) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(config.as_deref(), base_url.as_deref()).await {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = command else {
                return;
            };
            if let Err(e) = modes::run_cli(config.as_deref(), base_url.as_deref(), command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!(
                "{}",
                "No command given and the TUI feature is disabled, see --help".yellow()
            );
            std::process::exit(2);
        }
    }
}
