//! Display text shared by the page regions

pub const NO_POPULAR_PRODUCTS: &str = "No popular products found.";
pub const POPULAR_PRODUCTS_ERROR: &str = "Error loading popular products. Please try again later.";
pub const NO_PRODUCTS_FOUND: &str = "No products found. Try a different search term.";
pub const PRODUCTS_ERROR: &str = "Error loading products. Please try again later.";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_LIKES: &str = "No likes found";
pub const LOADING: &str = "Loading...";

/// Price with exactly two decimals followed by the currency symbol.
///
/// Rounds the binary `f64` value, so `1.005` (stored as `1.00499…`) gives
/// `"1.00"`.
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    format!("{:.2}{}", price, currency_symbol)
}

/// Slideshow like line; a missing count shows as `0`.
pub fn slide_likes(likes: Option<u64>) -> String {
    format!("{} likes", likes.unwrap_or(0))
}

/// Product list counter; a missing count shows the placeholder.
pub fn list_like_count(likes: Option<u64>) -> String {
    likes
        .map(|n| n.to_string())
        .unwrap_or_else(|| NO_LIKES.to_string())
}

/// List counter with the `likes` unit. Only numeric counters get the unit,
/// the placeholder and `N/A` are shown as is.
pub fn like_count_label(like_count: &str) -> String {
    if !like_count.is_empty() && like_count.chars().all(|c| c.is_ascii_digit()) {
        format!("{} likes", like_count)
    } else {
        like_count.to_string()
    }
}
