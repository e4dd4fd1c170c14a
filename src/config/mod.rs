//! Static configuration (TOML file + `SHOPFRONT__*` environment)

mod r#impl;
mod structs;

pub use r#impl::{get_config, init_config};
pub use structs::*;
