//! Outbound HTTP access to the Amap REST API.
//!
//! [`AmapClient`] owns the credential and attaches it to every request.
//! The actual wire call goes through the [`HttpFetch`] trait so the
//! reqwest-backed implementation can be swapped for canned responses.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use super::config::{AmapConfig, ApiKey};

/// A failure below the provider protocol: DNS, connect, timeout, non-2xx,
/// or a body that is not JSON.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed or the response was unusable.
    #[error("{0}")]
    Request(String),

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl FetchError {
    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        // The URL carries the key as a query parameter.
        let err = err.without_url();

        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        if timed_out && !message.contains("timed out") {
            message.push_str(": operation timed out");
        }

        Self::Request(message)
    }
}

/// Issue a GET with query parameters and decode the JSON body.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError>;
}

/// [`HttpFetch`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    /// Build a client whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Build(e.without_url().to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

/// Credential-carrying entry point for all provider calls.
///
/// Cheap to clone; every tool route holds its own copy.
#[derive(Clone)]
pub struct AmapClient {
    api_key: ApiKey,
    fetcher: Arc<dyn HttpFetch>,
}

impl AmapClient {
    /// Create the production client from configuration.
    pub fn new(config: &AmapConfig) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetch::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_fetcher(config.api_key.clone(), Arc::new(fetcher)))
    }

    /// Create a client over any fetch implementation.
    pub fn with_fetcher(api_key: ApiKey, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self { api_key, fetcher }
    }

    /// GET `endpoint` with `params`, prefixed by the `key` parameter.
    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, FetchError> {
        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 1);
        query.push(("key", self.api_key.expose().to_string()));
        query.extend(params);

        debug!(
            "GET {} with params {:?}",
            endpoint,
            query.iter().skip(1).map(|(k, _)| *k).collect::<Vec<_>>()
        );

        self.fetcher.get_json(endpoint, &query).await
    }
}

impl std::fmt::Debug for AmapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmapClient")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}
