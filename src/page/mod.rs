//! Page model: display regions plus the requests that fill them
//!
//! The page is the single owner of everything on screen. Network calls run
//! as background tasks and report back through [`PageEvent`]s; the owner
//! (TUI loop, CLI command or test) feeds them to [`Page::apply`] in arrival
//! order, one at a time.
//!
//! ```text
//! Page::load_* ──spawn──→ CatalogApi ──PageEvent──→ channel ──→ Page::apply
//! ```

pub mod format;
mod likes;
mod product_list;
mod slideshow;

pub use product_list::{ProductItemView, ProductListRegion, ProductListState};
pub use slideshow::{SlideView, SlideshowRegion, SlideshowState};

use std::sync::Arc;
use std::time::Duration;

use strum::{AsRefStr, Display, EnumIter};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;
use tracing::debug;

use crate::client::{CatalogApi, ClientError, RequestHandle, RequestId};
use crate::config::UiConfig;
use crate::models::{LikeResponse, Product};

/// Region identifiers, named after the page element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum RegionId {
    Slideshow,
    SearchButton,
    SearchBar,
    ProductList,
}

/// Which regions exist on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    regions: Vec<RegionId>,
}

impl PageLayout {
    pub fn new(regions: impl IntoIterator<Item = RegionId>) -> Self {
        let mut regions: Vec<RegionId> = regions.into_iter().collect();
        regions.dedup();
        Self { regions }
    }

    /// Homepage: slideshow only
    pub fn homepage() -> Self {
        Self::new([RegionId::Slideshow])
    }

    /// Products page: search controls and list
    pub fn products() -> Self {
        Self::new([
            RegionId::SearchButton,
            RegionId::SearchBar,
            RegionId::ProductList,
        ])
    }

    /// Every region (the TUI shows both pages)
    pub fn storefront() -> Self {
        use strum::IntoEnumIterator;
        Self::new(RegionId::iter())
    }

    pub fn contains(&self, region: RegionId) -> bool {
        self.regions.contains(&region)
    }

    pub fn has_search_controls(&self) -> bool {
        self.contains(RegionId::SearchButton) && self.contains(RegionId::SearchBar)
    }
}

/// Timings and formatting used by the page.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub slide_interval: Duration,
    pub like_pulse: Duration,
    pub currency_symbol: String,
    pub cancel_stale_searches: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for PageSettings {
    fn from(ui: &UiConfig) -> Self {
        Self {
            slide_interval: Duration::from_millis(ui.slide_interval_ms),
            like_pulse: Duration::from_millis(ui.like_pulse_ms),
            currency_symbol: ui.currency_symbol.clone(),
            cancel_stale_searches: ui.cancel_stale_searches,
        }
    }
}

/// Continuation delivered to the page when background work finishes.
#[derive(Debug)]
pub enum PageEvent {
    PopularProductsLoaded(Result<Vec<Product>, ClientError>),
    ProductsLoaded {
        request: RequestId,
        result: Result<Vec<Product>, ClientError>,
    },
    LikeCompleted {
        product_id: String,
        result: Result<LikeResponse, ClientError>,
    },
    SlideTick,
    PulseEnded {
        product_id: String,
    },
}

pub struct Page {
    api: Arc<dyn CatalogApi>,
    settings: PageSettings,
    layout: PageLayout,
    events: UnboundedSender<PageEvent>,
    slideshow: Option<SlideshowRegion>,
    product_list: Option<ProductListRegion>,
    search_bar: String,
    slide_ticker: Option<AbortHandle>,
    latest_search: Option<RequestHandle>,
}

impl Page {
    /// Create a page and the receiver its events arrive on.
    pub fn new(
        api: Arc<dyn CatalogApi>,
        settings: PageSettings,
        layout: PageLayout,
    ) -> (Self, UnboundedReceiver<PageEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let page = Self {
            slideshow: layout
                .contains(RegionId::Slideshow)
                .then(SlideshowRegion::new),
            product_list: layout
                .contains(RegionId::ProductList)
                .then(ProductListRegion::new),
            api,
            settings,
            layout,
            events,
            search_bar: String::new(),
            slide_ticker: None,
            latest_search: None,
        };
        (page, rx)
    }

    /// Initial loads, run once when the page is ready: the slideshow if it
    /// exists, and an unfiltered product list if the search controls exist.
    pub fn on_load(&mut self) {
        debug!("Page loaded with {:?} (api: {})", self.layout, self.api.name());
        if self.layout.contains(RegionId::Slideshow) {
            self.load_popular_products();
        }
        if self.layout.has_search_controls() {
            self.load_products("");
        }
    }

    /// Apply one continuation.
    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::PopularProductsLoaded(result) => self.apply_popular_products(result),
            PageEvent::ProductsLoaded { request, result } => self.apply_products(request, result),
            PageEvent::LikeCompleted { product_id, result } => self.apply_like(product_id, result),
            PageEvent::SlideTick => self.apply_slide_tick(),
            PageEvent::PulseEnded { product_id } => self.apply_pulse_end(&product_id),
        }
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn slideshow(&self) -> Option<&SlideshowRegion> {
        self.slideshow.as_ref()
    }

    pub fn product_list(&self) -> Option<&ProductListRegion> {
        self.product_list.as_ref()
    }

    pub fn current_slide(&self) -> Option<SlideView> {
        self.slideshow
            .as_ref()?
            .current_slide(&self.settings.currency_symbol)
    }

    pub fn search_bar(&self) -> &str {
        &self.search_bar
    }

    pub fn search_bar_mut(&mut self) -> &mut String {
        &mut self.search_bar
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(ticker) = self.slide_ticker.take() {
            ticker.abort();
        }
    }
}
