//! Domains module containing the server's business logic.
//!
//! The server exposes a single capability family, tools, each one a thin
//! wrapper over an Amap REST endpoint.

pub mod tools;
