//! CLI command implementations

mod config_gen;
mod like;
mod popular;
mod render;
mod search;

pub use config_gen::config_generate;
pub use like::like_product;
pub use popular::show_popular;
pub use render::{product_item_lines, slide_lines};
pub use search::search_products;
