//! User interfaces over the page model

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
