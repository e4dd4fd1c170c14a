//! Catalog API client layer
//!
//! `CatalogApi` is the seam between the page and the remote catalog:
//! the HTTP implementation talks to the real backend, tests plug in fakes.
//!
//! # Failure taxonomy
//!
//! - `Status` → non-2xx response (message from the `{"error"}` body if any)
//! - `Transport` → connect / IO / timeout
//! - `Decode` → body is not JSON or has the wrong shape
//! - `Cancelled` → request superseded before it finished
//! - `Task` → the background task died
//!
//! Callers collapse all of them into one static message per component.

mod http;
mod request;

pub use http::HttpCatalogClient;
pub use request::{RequestHandle, RequestId};

use std::fmt;

use async_trait::async_trait;

use crate::models::{LikeResponse, Product};

pub const POPULAR_PRODUCTS_PATH: &str = "/popular-products";
pub const SEARCH_PATH: &str = "/search";
pub const LIKE_PATH: &str = "/like";

// ============ ClientError ============

/// Errors from the catalog client
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Server answered with a non-success status
    Status { status: u16, message: Option<String> },
    /// Connection, IO or timeout failure
    Transport(String),
    /// Response body could not be decoded
    Decode(String),
    /// Request was cancelled by its handle
    Cancelled,
    /// Background task failed to complete
    Task(String),
}

impl ClientError {
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Status { .. } => "C001",
            ClientError::Transport(_) => "C002",
            ClientError::Decode(_) => "C003",
            ClientError::Cancelled => "C004",
            ClientError::Task(_) => "C005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Status { .. } => "Bad Status",
            ClientError::Transport(_) => "Transport Error",
            ClientError::Decode(_) => "Decode Error",
            ClientError::Cancelled => "Cancelled",
            ClientError::Task(_) => "Task Error",
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Status {
                status,
                message: Some(message),
            } => write!(
                f,
                "Network response was not ok (HTTP {}): {}",
                status, message
            ),
            ClientError::Status {
                status,
                message: None,
            } => write!(f, "Network response was not ok (HTTP {})", status),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ClientError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            ClientError::Cancelled => write!(f, "Request cancelled"),
            ClientError::Task(msg) => write!(f, "Request task failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

// ============ CatalogApi ============

/// Remote catalog operations consumed by the page.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /popular-products`
    async fn popular_products(&self) -> Result<Vec<Product>, ClientError>;

    /// `GET /search` or `GET /search?query=<term>`
    async fn search(&self, term: &str) -> Result<Vec<Product>, ClientError>;

    /// `POST /like` with `{"product_id": ...}`
    async fn like(&self, product_id: &str) -> Result<LikeResponse, ClientError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Path and query for a search request.
///
/// The term is trimmed; an empty term searches everything. Non-empty terms
/// are percent-encoded as a query component.
pub fn search_path(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        SEARCH_PATH.to_string()
    } else {
        format!("{}?query={}", SEARCH_PATH, urlencoding::encode(term))
    }
}
