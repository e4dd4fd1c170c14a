//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use shopfront::client::{CatalogApi, ClientError};
use shopfront::models::{LikeResponse, Product};

pub fn product(id: &str, name: &str, price: f64, likes: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(format!("About {}", name)),
        price,
        image: format!("{}.jpg", id),
        likes,
    }
}

pub fn liked(new_likes: serde_json::Value) -> LikeResponse {
    LikeResponse {
        message: Some("Product liked successfully".to_string()),
        product_id: None,
        new_likes: Some(new_likes),
        error: None,
    }
}

pub fn server_error() -> ClientError {
    ClientError::Status {
        status: 500,
        message: Some("Internal server error".to_string()),
    }
}

// =============================================================================
// In-memory catalog
// =============================================================================

/// Catalog with canned answers. Records every search term and liked id.
pub struct FakeCatalog {
    popular: Result<Vec<Product>, ClientError>,
    products: Vec<Product>,
    search_overrides: HashMap<String, Result<Vec<Product>, ClientError>>,
    search_delays: HashMap<String, Duration>,
    like_result: Result<LikeResponse, ClientError>,
    pub searches: Mutex<Vec<String>>,
    pub likes: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            popular: Ok(vec![]),
            products: vec![],
            search_overrides: HashMap::new(),
            search_delays: HashMap::new(),
            like_result: Ok(liked(json!(1))),
            searches: Mutex::new(vec![]),
            likes: Mutex::new(vec![]),
        }
    }

    pub fn with_popular(mut self, result: Result<Vec<Product>, ClientError>) -> Self {
        self.popular = result;
        self
    }

    /// Products returned for any search without an override
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_search(mut self, term: &str, result: Result<Vec<Product>, ClientError>) -> Self {
        self.search_overrides.insert(term.to_string(), result);
        self
    }

    pub fn with_search_delay(mut self, term: &str, delay: Duration) -> Self {
        self.search_delays.insert(term.to_string(), delay);
        self
    }

    pub fn with_like(mut self, result: Result<LikeResponse, ClientError>) -> Self {
        self.like_result = result;
        self
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn liked_ids(&self) -> Vec<String> {
        self.likes.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn popular_products(&self) -> Result<Vec<Product>, ClientError> {
        self.popular.clone()
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, ClientError> {
        self.searches.lock().unwrap().push(term.to_string());
        if let Some(delay) = self.search_delays.get(term) {
            tokio::time::sleep(*delay).await;
        }
        self.search_overrides
            .get(term)
            .cloned()
            .unwrap_or_else(|| Ok(self.products.clone()))
    }

    async fn like(&self, product_id: &str) -> Result<LikeResponse, ClientError> {
        self.likes.lock().unwrap().push(product_id.to_string());
        self.like_result.clone()
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
