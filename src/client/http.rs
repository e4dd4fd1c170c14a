//! HTTP catalog client
//!
//! ureq is synchronous; every request runs inside `spawn_blocking` so the
//! async side never blocks.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use ureq::Agent;
use ureq::http::Response;

use super::{CatalogApi, ClientError, LIKE_PATH, POPULAR_PRODUCTS_PATH, search_path};
use crate::config::ApiConfig;
use crate::models::{ApiErrorBody, LikeRequest, LikeResponse, Product};

/// Catalog client backed by a ureq `Agent` (Send + Sync, cheap to clone).
#[derive(Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    agent: Agent,
}

impl HttpCatalogClient {
    /// `timeout` of `None` keeps the transport defaults.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(timeout)
            // 非 2xx 也要读取 body 中的 {"error": ...}
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json_sync<T: DeserializeOwned>(agent: &Agent, url: &str) -> Result<T, ClientError> {
        trace!("GET {}", url);
        let resp = agent
            .get(url)
            .call()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::read_json(url, resp)
    }

    fn post_json_sync<B: Serialize, T: DeserializeOwned>(
        agent: &Agent,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        trace!("POST {}", url);
        let resp = agent
            .post(url)
            .send_json(body)
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::read_json(url, resp)
    }

    fn read_json<T: DeserializeOwned>(
        url: &str,
        resp: Response<ureq::Body>,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let mut body = resp.into_body();

        if !status.is_success() {
            // 后端错误格式: {"error": "..."}，解析失败时忽略
            let message = body
                .read_to_string()
                .ok()
                .and_then(|text| serde_json::from_str::<ApiErrorBody>(&text).ok())
                .map(|b| b.error);
            debug!("{} answered HTTP {} ({:?})", url, status.as_u16(), message);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        body.read_json::<T>()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Run a blocking request on the blocking pool.
    async fn blocking<T, F>(f: F) -> Result<T, ClientError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, ClientError> + Send + 'static,
    {
        tokio::task::spawn_blocking(f)
            .await
            .unwrap_or_else(|e| Err(ClientError::Task(e.to_string())))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn popular_products(&self) -> Result<Vec<Product>, ClientError> {
        let agent = self.agent.clone();
        let url = self.url(POPULAR_PRODUCTS_PATH);
        Self::blocking(move || Self::get_json_sync(&agent, &url)).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, ClientError> {
        let agent = self.agent.clone();
        let url = self.url(&search_path(term));
        Self::blocking(move || Self::get_json_sync(&agent, &url)).await
    }

    async fn like(&self, product_id: &str) -> Result<LikeResponse, ClientError> {
        let agent = self.agent.clone();
        let url = self.url(LIKE_PATH);
        let body = LikeRequest::new(product_id);
        Self::blocking(move || Self::post_json_sync(&agent, &url, &body)).await
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
