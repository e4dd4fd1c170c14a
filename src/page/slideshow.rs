//! Popular products slideshow region

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error};

use super::format::{self, NO_POPULAR_PRODUCTS, POPULAR_PRODUCTS_ERROR};
use super::{Page, PageEvent};
use crate::client::{CatalogApi, ClientError};
use crate::models::Product;

/// One rendered slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub product_id: String,
    pub image: String,
    pub name: String,
    pub price: String,
    pub likes: String,
}

impl SlideView {
    pub fn new(product: &Product, currency_symbol: &str) -> Self {
        Self {
            product_id: product.id.clone(),
            image: product.image.clone(),
            name: product.name.clone(),
            price: format::format_price(product.price, currency_symbol),
            likes: format::slide_likes(product.like_count()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideshowState {
    Loading,
    Message(&'static str),
    Rotating { products: Vec<Product>, current: usize },
}

#[derive(Debug)]
pub struct SlideshowRegion {
    state: SlideshowState,
}

impl Default for SlideshowRegion {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideshowRegion {
    pub fn new() -> Self {
        Self {
            state: SlideshowState::Loading,
        }
    }

    pub fn state(&self) -> &SlideshowState {
        &self.state
    }

    /// Apply the popular products response. Returns `true` when rotation
    /// starts and a ticker is needed.
    pub fn on_loaded(&mut self, result: Result<Vec<Product>, ClientError>) -> bool {
        match result {
            Ok(products) if products.is_empty() => {
                self.state = SlideshowState::Message(NO_POPULAR_PRODUCTS);
                false
            }
            Ok(products) => {
                debug!("Slideshow rotating over {} products", products.len());
                self.state = SlideshowState::Rotating {
                    products,
                    current: 0,
                };
                true
            }
            Err(e) => {
                error!("Error fetching popular products: {}", e);
                self.state = SlideshowState::Message(POPULAR_PRODUCTS_ERROR);
                false
            }
        }
    }

    /// Move to the next product, wrapping after the last one.
    pub fn advance(&mut self) {
        if let SlideshowState::Rotating { products, current } = &mut self.state {
            *current = (*current + 1) % products.len();
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            SlideshowState::Rotating { current, .. } => Some(*current),
            _ => None,
        }
    }

    pub fn current_slide(&self, currency_symbol: &str) -> Option<SlideView> {
        match &self.state {
            SlideshowState::Rotating { products, current } => products
                .get(*current)
                .map(|p| SlideView::new(p, currency_symbol)),
            _ => None,
        }
    }

    /// Static text shown instead of a slide (loading, empty, error).
    pub fn message(&self) -> Option<&'static str> {
        match &self.state {
            SlideshowState::Loading => Some(format::LOADING),
            SlideshowState::Message(msg) => Some(*msg),
            SlideshowState::Rotating { .. } => None,
        }
    }
}

impl Page {
    /// Request `/popular-products` for the slideshow region.
    pub fn load_popular_products(&mut self) {
        let Some(region) = self.slideshow.as_mut() else {
            debug!("No slideshow region, skipping popular products");
            return;
        };
        *region = SlideshowRegion::new();

        let api: Arc<dyn CatalogApi> = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.popular_products().await;
            let _ = events.send(PageEvent::PopularProductsLoaded(result));
        });
    }

    pub(super) fn apply_popular_products(&mut self, result: Result<Vec<Product>, ClientError>) {
        let Some(region) = self.slideshow.as_mut() else {
            return;
        };
        if region.on_loaded(result) {
            if let Some(old) = self.slide_ticker.take() {
                old.abort();
            }
            self.slide_ticker = Some(spawn_slide_ticker(
                self.events.clone(),
                self.settings.slide_interval,
            ));
        }
    }

    pub(super) fn apply_slide_tick(&mut self) {
        if let Some(region) = self.slideshow.as_mut() {
            region.advance();
        }
    }
}

/// Emit `SlideTick` every `period`, first tick one period from now.
/// Stops on its own once the page (receiver) is gone.
fn spawn_slide_ticker(events: UnboundedSender<PageEvent>, period: Duration) -> AbortHandle {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if events.send(PageEvent::SlideTick).is_err() {
                break;
            }
        }
    })
    .abort_handle()
}
