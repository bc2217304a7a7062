//! Error types and handling for the MCP server.
//!
//! Only startup and plumbing failures live here. Failures of a single tool
//! invocation never surface as `Error`: they are folded into the tool's
//! `{"error": ...}` result instead.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// The provider HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] super::client::FetchError),

    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::config("AMAP_MAPS_API_KEY is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: AMAP_MAPS_API_KEY is not set"
        );
    }

    #[test]
    fn test_tool_error_converts() {
        let err: Error = crate::domains::tools::ToolError::not_found("maps_nowhere").into();
        assert!(matches!(err, Error::Tool(_)));
        assert!(err.to_string().contains("maps_nowhere"));
    }
}
