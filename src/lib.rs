//! Shopfront - terminal storefront client for a product catalog API
//!
//! Shows a rotating slideshow of popular products, a searchable product
//! list and lets the user like products. All state lives in a [`page::Page`]
//! that the TUI and the CLI commands drive.
//!
//! # Features
//! - **cli**: one-shot subcommands (`popular`, `search`, `like`, `config`)
//! - **tui**: interactive terminal interface (default mode)
//!
//! # Architecture
//! - `client`: catalog HTTP API (`CatalogApi` trait, `ureq` implementation)
//! - `models`: wire types
//! - `page`: display regions and the requests that fill them
//! - `interfaces`: user interfaces (CLI, TUI)
//! - `config`: configuration management
//! - `runtime`: startup and execution modes
//! - `system`: logging and panic handling

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod page;
pub mod runtime;
pub mod system;
