//! Like command

use std::sync::Arc;

use colored::Colorize;
use tracing::error;

use crate::client::CatalogApi;
use crate::interfaces::cli::CliError;

pub async fn like_product(api: Arc<dyn CatalogApi>, product_id: &str) -> Result<(), CliError> {
    let response = api.like(product_id).await.map_err(|e| {
        error!("Error liking product {}: {}", product_id, e);
        CliError::from(e)
    })?;

    match response.new_likes_text() {
        Some(likes) => println!(
            "{} Liked {}: {} likes",
            "✓".bold().green(),
            product_id.cyan(),
            likes.green()
        ),
        None => println!(
            "{} {}",
            "ℹ".bold().blue(),
            response
                .message
                .as_deref()
                .unwrap_or("Like registered")
        ),
    }
    Ok(())
}
