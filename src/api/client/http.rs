//! HTTP client implementation
//!
//! This module provides the reqwest-backed client that issues requests to the
//! migration service.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::MigrationApi;
use crate::models::{ClientId, ClientRecord, MigrationOutcome};

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the migration service, `/api` prefix included.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration rooted at `base_url`.
    ///
    /// A trailing slash is stripped so operation paths can always be joined
    /// with a leading one.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be issued or completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// API client for the migration service
///
/// Cloning is cheap: the underlying connection pool is shared, and the
/// configuration is immutable, so clones can issue requests concurrently from
/// any number of tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Arc<ReqwestClient>,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = ReqwestClient::builder()
            .default_headers(headers)
            .build()
            .expect("failed to build reqwest client");

        Self {
            http_client: Arc::new(http_client),
            config,
        }
    }

    /// GET `path` and decode the response body into `T`.
    ///
    /// Decoding into [`serde_json::Value`] yields the body unchanged.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path).await
    }

    /// POST to `path` (no request body) and decode the response body into `T`.
    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::POST, path).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Issue one request and decode the JSON response body.
    ///
    /// No retries and no recovery: the transport's own outcome is surfaced to
    /// the caller as-is.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = self.url(path);
        debug!(%method, %url, "issuing request");

        let response = self.http_client.request(method, &url).send().await?;
        let status = response.status();
        debug!(%status, %url, "response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json().await.map_err(ClientError::Decode)
    }
}

#[async_trait::async_trait]
impl MigrationApi for HttpClient {
    async fn legacy_clients(&self) -> Result<Vec<ClientRecord>, ClientError> {
        self.get("/legacy-clients").await
    }

    async fn new_clients(&self) -> Result<Vec<ClientRecord>, ClientError> {
        self.get("/new-clients").await
    }

    async fn migrate_client(&self, id: &ClientId) -> Result<MigrationOutcome, ClientError> {
        self.post(&format!("/migrate/{id}")).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
