//! Canned provider responses for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::core::client::{AmapClient, FetchError, HttpFetch};
use crate::core::config::{ApiKey, Config};
use crate::core::server::McpServer;

/// One recorded GET.
#[derive(Debug, Clone)]
pub struct Call {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// [`HttpFetch`] that answers every request with the same canned result.
pub struct FakeFetch {
    response: Result<Value, String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeFetch {
    pub fn ok(body: Value) -> Self {
        Self {
            response: Ok(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetch for FakeFetch {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(Call {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        self.response.clone().map_err(FetchError::request)
    }
}

pub fn test_client(fetch: FakeFetch) -> (AmapClient, Arc<FakeFetch>) {
    let fetch = Arc::new(fetch);
    let client = AmapClient::with_fetcher(ApiKey::new("test-key").unwrap(), fetch.clone());
    (client, fetch)
}

pub fn test_server(fetch: FakeFetch) -> (McpServer, Arc<FakeFetch>) {
    let (client, fetch) = test_client(fetch);
    let config = Config::new(ApiKey::new("test-key").unwrap());
    (McpServer::with_client(config, client), fetch)
}
