//! Page behaviour tests
//!
//! Drive a `Page` against an in-memory catalog and apply its events the way
//! the TUI loop does. Timing tests run on a paused clock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

use common::{FakeCatalog, liked, product, server_error};
use shopfront::client::RequestId;
use shopfront::page::format::{
    NO_LIKES, NO_POPULAR_PRODUCTS, NO_PRODUCTS_FOUND, POPULAR_PRODUCTS_ERROR, PRODUCTS_ERROR,
};
use shopfront::page::{Page, PageEvent, PageLayout, PageSettings};

// =============================================================================
// Helpers
// =============================================================================

fn settings(cancel_stale_searches: bool) -> PageSettings {
    PageSettings {
        cancel_stale_searches,
        ..PageSettings::default()
    }
}

fn open(
    catalog: FakeCatalog,
    layout: PageLayout,
    settings: PageSettings,
) -> (Page, UnboundedReceiver<PageEvent>, Arc<FakeCatalog>) {
    let catalog = Arc::new(catalog);
    let (page, rx) = Page::new(catalog.clone(), settings, layout);
    (page, rx, catalog)
}

async fn step(page: &mut Page, rx: &mut UnboundedReceiver<PageEvent>) {
    let event = rx.recv().await.expect("page event channel closed");
    page.apply(event);
}

/// No event arrives within `wait` (paused clock, so this is instant).
async fn assert_quiet(rx: &mut UnboundedReceiver<PageEvent>, wait: Duration) {
    let res = tokio::time::timeout(wait, rx.recv()).await;
    assert!(res.is_err(), "unexpected event: {:?}", res);
}

fn slide_name(page: &Page) -> String {
    page.current_slide().expect("no slide shown").name
}

// =============================================================================
// Slideshow
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_slideshow_rotates_every_interval_and_wraps() {
    let catalog = FakeCatalog::new().with_popular(Ok(vec![
        product("a", "A", 1.0, None),
        product("b", "B", 2.0, None),
        product("c", "C", 3.0, None),
    ]));
    let (mut page, mut rx, _) = open(catalog, PageLayout::homepage(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    assert_eq!(slide_name(&page), "A");

    let start = Instant::now();
    for expected in ["B", "C", "A"] {
        step(&mut page, &mut rx).await;
        assert_eq!(slide_name(&page), expected);
    }
    assert_eq!(start.elapsed(), Duration::from_millis(9000));
}

#[tokio::test(start_paused = true)]
async fn test_slide_shows_price_and_likes() {
    let catalog = FakeCatalog::new().with_popular(Ok(vec![
        product("a", "A", 9.5, Some(3)),
        product("b", "B", 1.0, None),
    ]));
    let (mut page, mut rx, _) = open(catalog, PageLayout::homepage(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    let slide = page.current_slide().unwrap();
    assert_eq!(slide.price, "9.50€");
    assert_eq!(slide.likes, "3 likes");
    assert_eq!(slide.image, "a.jpg");

    step(&mut page, &mut rx).await;
    assert_eq!(page.current_slide().unwrap().likes, "0 likes");
}

#[tokio::test(start_paused = true)]
async fn test_single_product_stays_shown() {
    let catalog = FakeCatalog::new().with_popular(Ok(vec![product("a", "A", 1.0, None)]));
    let (mut page, mut rx, _) = open(catalog, PageLayout::homepage(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    step(&mut page, &mut rx).await;
    assert_eq!(slide_name(&page), "A");
}

#[tokio::test(start_paused = true)]
async fn test_empty_popular_list_shows_message_without_timer() {
    let catalog = FakeCatalog::new().with_popular(Ok(vec![]));
    let (mut page, mut rx, _) = open(catalog, PageLayout::homepage(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    assert!(page.current_slide().is_none());
    assert_eq!(page.slideshow().unwrap().message(), Some(NO_POPULAR_PRODUCTS));
    assert_quiet(&mut rx, Duration::from_secs(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_popular_error_shows_message_without_timer() {
    let catalog = FakeCatalog::new().with_popular(Err(server_error()));
    let (mut page, mut rx, _) = open(catalog, PageLayout::homepage(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    assert_eq!(
        page.slideshow().unwrap().message(),
        Some(POPULAR_PRODUCTS_ERROR)
    );
    assert_quiet(&mut rx, Duration::from_secs(10)).await;
}

#[tokio::test]
async fn test_products_page_does_not_request_popular() {
    let catalog = FakeCatalog::new().with_products(vec![product("a", "A", 1.0, None)]);
    let (mut page, mut rx, catalog) =
        open(catalog, PageLayout::products(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    assert!(page.slideshow().is_none());
    assert!(page.current_slide().is_none());
    assert_eq!(catalog.searches(), vec![""]);
}

// =============================================================================
// Product list
// =============================================================================

#[tokio::test]
async fn test_initial_load_lists_everything_in_order() {
    let mut described = product("p1", "Kettle", 24.0, Some(5));
    described.description = None;
    let catalog = FakeCatalog::new().with_products(vec![
        described,
        product("p2", "Mug", 19.99, None),
    ]);
    let (mut page, mut rx, catalog) =
        open(catalog, PageLayout::products(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;

    let items = page.product_list().unwrap().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Kettle");
    assert_eq!(items[0].description, "No description available");
    assert_eq!(items[0].price, "24.00€");
    assert_eq!(items[0].like_count, "5");
    assert_eq!(items[1].name, "Mug");
    assert_eq!(items[1].price, "19.99€");
    assert_eq!(items[1].like_count, NO_LIKES);
    assert_eq!(catalog.searches(), vec![""]);
}

#[tokio::test]
async fn test_search_renders_items_in_response_order() {
    let catalog = FakeCatalog::new().with_search(
        "shoe",
        Ok(vec![
            product("z", "Zebra Shoe", 60.0, None),
            product("a", "Alpine Shoe", 80.0, Some(1)),
        ]),
    );
    let (mut page, mut rx, catalog) =
        open(catalog, PageLayout::products(), PageSettings::default());

    page.load_products("shoe");
    step(&mut page, &mut rx).await;

    let names: Vec<&str> = page
        .product_list()
        .unwrap()
        .items()
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zebra Shoe", "Alpine Shoe"]);
    assert_eq!(catalog.searches(), vec!["shoe"]);
}

#[tokio::test]
async fn test_submit_search_uses_trimmed_search_bar() {
    let catalog = FakeCatalog::new().with_search(
        "trail shoe",
        Ok(vec![product("s1", "Trail Shoe", 89.0, Some(2))]),
    );
    let (mut page, mut rx, catalog) =
        open(catalog, PageLayout::products(), PageSettings::default());

    page.search_bar_mut().push_str("  trail shoe ");
    assert!(page.submit_search().is_some());
    step(&mut page, &mut rx).await;

    assert_eq!(catalog.searches(), vec!["trail shoe"]);
    assert_eq!(page.product_list().unwrap().items()[0].name, "Trail Shoe");
}

#[tokio::test]
async fn test_no_results_and_errors_replace_the_list() {
    let catalog = FakeCatalog::new()
        .with_products(vec![product("a", "A", 1.0, None)])
        .with_search("zzz", Ok(vec![]))
        .with_search("boom", Err(server_error()));
    let (mut page, mut rx, _) = open(catalog, PageLayout::products(), PageSettings::default());

    page.on_load();
    step(&mut page, &mut rx).await;
    assert_eq!(page.product_list().unwrap().items().len(), 1);

    page.load_products("zzz");
    step(&mut page, &mut rx).await;
    let list = page.product_list().unwrap();
    assert!(list.items().is_empty());
    assert_eq!(list.message(), Some(NO_PRODUCTS_FOUND));

    page.load_products("boom");
    step(&mut page, &mut rx).await;
    assert_eq!(page.product_list().unwrap().message(), Some(PRODUCTS_ERROR));
}

#[tokio::test]
async fn test_search_without_list_region_is_skipped() {
    let (mut page, _rx, catalog) =
        open(FakeCatalog::new(), PageLayout::homepage(), PageSettings::default());
    assert!(page.load_products("mug").is_none());
    tokio::task::yield_now().await;
    assert!(catalog.searches().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_superseded_search_is_cancelled() {
    let catalog = FakeCatalog::new()
        .with_search("slow", Ok(vec![product("s", "Slow", 1.0, None)]))
        .with_search("fast", Ok(vec![product("f", "Fast", 1.0, None)]))
        .with_search_delay("slow", Duration::from_secs(1));
    let (mut page, mut rx, _) = open(catalog, PageLayout::products(), settings(true));

    let slow = page.load_products("slow").unwrap();
    tokio::task::yield_now().await;
    page.load_products("fast");

    step(&mut page, &mut rx).await;
    assert_eq!(page.product_list().unwrap().items()[0].name, "Fast");

    assert_quiet(&mut rx, Duration::from_secs(5)).await;
    assert!(slow.is_finished());
    assert_eq!(page.product_list().unwrap().items()[0].name, "Fast");
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let catalog = FakeCatalog::new().with_products(vec![product("a", "A", 1.0, None)]);
    let (mut page, mut rx, _) = open(catalog, PageLayout::products(), settings(true));

    page.load_products("");
    step(&mut page, &mut rx).await;

    page.apply(PageEvent::ProductsLoaded {
        request: RequestId::next(),
        result: Ok(vec![]),
    });
    assert_eq!(page.product_list().unwrap().items()[0].name, "A");
}

#[tokio::test(start_paused = true)]
async fn test_last_arrival_wins_without_cancellation() {
    let catalog = FakeCatalog::new()
        .with_search("slow", Ok(vec![product("s", "Slow", 1.0, None)]))
        .with_search("fast", Ok(vec![product("f", "Fast", 1.0, None)]))
        .with_search_delay("slow", Duration::from_secs(1));
    let (mut page, mut rx, _) = open(catalog, PageLayout::products(), settings(false));

    page.load_products("slow");
    page.load_products("fast");

    step(&mut page, &mut rx).await;
    assert_eq!(page.product_list().unwrap().items()[0].name, "Fast");
    step(&mut page, &mut rx).await;
    assert_eq!(page.product_list().unwrap().items()[0].name, "Slow");
}

// =============================================================================
// Likes
// =============================================================================

async fn listed_page(
    catalog: FakeCatalog,
) -> (Page, UnboundedReceiver<PageEvent>, Arc<FakeCatalog>) {
    let catalog = catalog.with_products(vec![
        product("p1", "Kettle", 24.0, Some(4)),
        product("p2", "Mug", 9.0, None),
    ]);
    let (mut page, mut rx, catalog) =
        open(catalog, PageLayout::products(), PageSettings::default());
    page.on_load();
    step(&mut page, &mut rx).await;
    (page, rx, catalog)
}

fn item_likes(page: &Page, id: &str) -> (String, bool) {
    let item = page
        .product_list()
        .unwrap()
        .items()
        .iter()
        .find(|i| i.product_id == id)
        .unwrap();
    (item.like_count.clone(), item.pulsing)
}

#[tokio::test(start_paused = true)]
async fn test_like_updates_counter_and_pulses() {
    let (mut page, mut rx, catalog) =
        listed_page(FakeCatalog::new().with_like(Ok(liked(json!(5))))).await;

    page.like_product("p1");
    step(&mut page, &mut rx).await;
    assert_eq!(catalog.liked_ids(), vec!["p1"]);
    assert_eq!(item_likes(&page, "p1"), ("5".to_string(), true));
    assert_eq!(item_likes(&page, "p2"), (NO_LIKES.to_string(), false));

    let start = Instant::now();
    step(&mut page, &mut rx).await;
    assert_eq!(start.elapsed(), Duration::from_millis(300));
    assert_eq!(item_likes(&page, "p1"), ("5".to_string(), false));
}

#[tokio::test(start_paused = true)]
async fn test_like_without_count_leaves_counter() {
    let response = shopfront::models::LikeResponse {
        message: Some("Like registered but count not modified".to_string()),
        ..Default::default()
    };
    let (mut page, mut rx, _) = listed_page(FakeCatalog::new().with_like(Ok(response))).await;

    page.like_product("p1");
    step(&mut page, &mut rx).await;
    assert_eq!(item_likes(&page, "p1"), ("4".to_string(), false));
    assert_quiet(&mut rx, Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_zero_count_is_ignored() {
    let (mut page, mut rx, _) =
        listed_page(FakeCatalog::new().with_like(Ok(liked(json!(0))))).await;

    page.like_product("p2");
    step(&mut page, &mut rx).await;
    assert_eq!(item_likes(&page, "p2"), (NO_LIKES.to_string(), false));
}

#[tokio::test(start_paused = true)]
async fn test_failed_like_changes_nothing() {
    let (mut page, mut rx, _) =
        listed_page(FakeCatalog::new().with_like(Err(server_error()))).await;

    page.like_product("p1");
    step(&mut page, &mut rx).await;
    assert_eq!(item_likes(&page, "p1"), ("4".to_string(), false));
    assert_quiet(&mut rx, Duration::from_secs(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_na_count_is_displayed_verbatim() {
    let (mut page, mut rx, _) =
        listed_page(FakeCatalog::new().with_like(Ok(liked(json!("N/A"))))).await;

    page.like_product("p2");
    step(&mut page, &mut rx).await;
    assert_eq!(item_likes(&page, "p2"), ("N/A".to_string(), true));
}

#[tokio::test(start_paused = true)]
async fn test_like_for_unlisted_product_is_dropped() {
    let (mut page, mut rx, _) =
        listed_page(FakeCatalog::new().with_like(Ok(liked(json!(9))))).await;

    page.like_product("gone");
    step(&mut page, &mut rx).await;
    assert_eq!(item_likes(&page, "p1"), ("4".to_string(), false));
    assert_quiet(&mut rx, Duration::from_secs(1)).await;
}
