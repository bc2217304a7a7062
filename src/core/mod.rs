//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, error handling, the provider HTTP client, server lifecycle
//! management, and transport layer abstractions.

pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use client::{AmapClient, FetchError, HttpFetch};
pub use config::{ApiKey, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
