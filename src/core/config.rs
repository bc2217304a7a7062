//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from the process environment (and an
//! optional `.env` file). The Amap API key is mandatory: without it no
//! `Config` can be built and the server never starts.

use std::fmt;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Environment variable holding the Amap web-service key.
pub const API_KEY_VAR: &str = "AMAP_MAPS_API_KEY";

/// Default bound on a single outbound provider request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Amap provider access.
    pub amap: AmapConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Settings for talking to the Amap REST API.
#[derive(Debug, Clone)]
pub struct AmapConfig {
    /// Key attached to every request as the `key` query parameter.
    pub api_key: ApiKey,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// The provider credential.
///
/// Guaranteed non-empty. Deliberately not `Serialize`, and its `Debug`
/// output is redacted, so it cannot leak through logs or tool results.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key, rejecting empty or whitespace-only values.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Error::config(format!("{API_KEY_VAR} must not be empty")));
        }
        Ok(Self(raw))
    }

    /// The key as sent on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl Config {
    /// Create a configuration with default settings around the given key.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            server: ServerConfig {
                name: "amap-maps".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            amap: AmapConfig {
                api_key,
                timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured if present.
    /// Fails when `AMAP_MAPS_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_transport(None)
    }

    /// Like [`Config::from_env`], but `transport` (when given) replaces
    /// `MCP_TRANSPORT`, which is then not read at all.
    pub fn from_env_with_transport(transport: Option<&str>) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup_with_transport(|name| std::env::var(name).ok(), transport)
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_transport(lookup, None)
    }

    fn from_lookup_with_transport<F>(lookup: F, transport: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_key = lookup(API_KEY_VAR)
            .ok_or_else(|| Error::config(format!("{API_KEY_VAR} environment variable is required")))?;
        let mut config = Self::new(ApiKey::new(raw_key)?);

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(raw) = lookup("MCP_REQUEST_TIMEOUT_SECS") {
            config.amap.timeout_secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(Error::config(format!(
                        "MCP_REQUEST_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                    )));
                }
            };
        }

        config.transport = match transport {
            Some(name) => TransportConfig::named(name, &lookup)?,
            None => TransportConfig::from_lookup(&lookup)?,
        };

        Ok(config)
    }
}
