//! Amap MCP Server Library
//!
//! Exposes the Amap (Gaode) maps REST API as Model Context Protocol tools:
//! geocoding, reverse geocoding, IP location, weather, route planning,
//! distance measurement and POI search.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the provider HTTP client, the
//!   MCP server handler and the transports
//! - **domains::tools**: the tool catalog, one file per Amap endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use amap_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{AmapClient, Config, Error, McpServer, Result};
