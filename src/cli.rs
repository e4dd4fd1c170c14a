//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shopfront using clap's derive macros.

use clap::{Parser, Subcommand};

/// Shopfront - terminal client for the product catalog
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(version)]
#[command(about = "Browse, search and like products of a catalog API", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override api.base_url
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Show the popular products slideshow
    Popular {
        /// Keep rotating on the slideshow interval until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// Search products (lists everything without a term)
    Search {
        /// Search term, words are joined with spaces
        #[arg(num_args = 0..)]
        term: Vec<String>,
    },

    /// Like a product
    Like {
        /// Product id
        product_id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite of an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Joined search term for `search`
    pub fn join_term(words: &[String]) -> String {
        words.join(" ").trim().to_string()
    }
}
