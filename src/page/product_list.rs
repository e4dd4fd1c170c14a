//! Searchable product list region

use tracing::{debug, error, warn};

use super::format::{self, NO_DESCRIPTION, NO_PRODUCTS_FOUND, PRODUCTS_ERROR};
use super::{Page, PageEvent};
use crate::client::{ClientError, RequestHandle, RequestId};
use crate::models::Product;

/// One rendered `.product-item`. The image is the like target.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductItemView {
    pub product_id: String,
    pub image: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub like_count: String,
    /// Like icon is in its scaled-up state
    pub pulsing: bool,
}

impl ProductItemView {
    pub fn new(product: &Product, currency_symbol: &str) -> Self {
        Self {
            product_id: product.id.clone(),
            image: product.image.clone(),
            name: product.name.clone(),
            description: product.description().unwrap_or(NO_DESCRIPTION).to_string(),
            price: format::format_price(product.price, currency_symbol),
            like_count: format::list_like_count(product.like_count()),
            pulsing: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListState {
    Loading,
    Message(&'static str),
    Items(Vec<ProductItemView>),
}

#[derive(Debug)]
pub struct ProductListRegion {
    state: ProductListState,
}

impl Default for ProductListRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListRegion {
    pub fn new() -> Self {
        Self {
            state: ProductListState::Loading,
        }
    }

    pub fn state(&self) -> &ProductListState {
        &self.state
    }

    /// Replace the region content with the search response.
    pub fn on_loaded(&mut self, result: Result<Vec<Product>, ClientError>, currency_symbol: &str) {
        self.state = match result {
            Ok(products) if products.is_empty() => ProductListState::Message(NO_PRODUCTS_FOUND),
            Ok(products) => ProductListState::Items(
                products
                    .iter()
                    .map(|p| ProductItemView::new(p, currency_symbol))
                    .collect(),
            ),
            Err(e) => {
                error!("Error fetching products: {}", e);
                ProductListState::Message(PRODUCTS_ERROR)
            }
        };
    }

    pub fn items(&self) -> &[ProductItemView] {
        match &self.state {
            ProductListState::Items(items) => items,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match &self.state {
            ProductListState::Loading => Some(format::LOADING),
            ProductListState::Message(msg) => Some(*msg),
            ProductListState::Items(_) => None,
        }
    }

    pub(super) fn item_mut(&mut self, product_id: &str) -> Option<&mut ProductItemView> {
        match &mut self.state {
            ProductListState::Items(items) => {
                items.iter_mut().find(|item| item.product_id == product_id)
            }
            _ => None,
        }
    }
}

impl Page {
    /// Search the catalog and render the result into the product list.
    ///
    /// An empty (or blank) term lists everything. With
    /// `cancel_stale_searches` the previous in-flight search is cancelled
    /// and its late response ignored; otherwise the last response to arrive
    /// wins.
    pub fn load_products(&mut self, search_term: &str) -> Option<RequestHandle> {
        if self.product_list.is_none() {
            warn!("No product-list region, skipping search");
            return None;
        }

        if self.settings.cancel_stale_searches
            && let Some(previous) = self.latest_search.take()
            && !previous.is_finished()
        {
            debug!("Cancelling superseded search {}", previous.id().value());
            previous.cancel();
        }

        let id = RequestId::next();
        let term = search_term.trim().to_string();
        let api = self.api.clone();
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let result = api.search(&term).await;
            let _ = events.send(PageEvent::ProductsLoaded {
                request: id,
                result,
            });
        });

        let handle = RequestHandle::new(id, task.abort_handle());
        self.latest_search = Some(handle.clone());
        Some(handle)
    }

    /// Search with the current search bar text (the search button).
    pub fn submit_search(&mut self) -> Option<RequestHandle> {
        let term = self.search_bar.trim().to_string();
        self.load_products(&term)
    }

    pub(super) fn apply_products(
        &mut self,
        request: RequestId,
        result: Result<Vec<Product>, ClientError>,
    ) {
        if self.settings.cancel_stale_searches
            && self
                .latest_search
                .as_ref()
                .is_some_and(|latest| latest.id() != request)
        {
            debug!("Discarding stale search response {}", request.value());
            return;
        }

        let currency = self.settings.currency_symbol.clone();
        if let Some(region) = self.product_list.as_mut() {
            region.on_loaded(result, &currency);
        }
    }
}
