//! Wire types of the catalog API

mod like;
mod product;

pub use like::{ApiErrorBody, LikeRequest, LikeResponse};
pub use product::Product;
