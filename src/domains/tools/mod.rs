//! Tools domain module.
//!
//! Every capability of this server is a tool wrapping one Amap REST endpoint.
//!
//! ## Architecture
//!
//! - `definitions/maps/` - one file per tool, plus the shared pipeline in `common.rs`
//! - `router.rs` - ToolRouter builder for the stdio transport
//! - `registry.rs` - tool catalog and HTTP dispatch
//! - `error.rs` - dispatch errors
//!
//! ## Adding a New Tool
//!
//! 1. Create a file in `definitions/maps/` implementing [`definitions::MapsTool`]
//! 2. Export it in `definitions/maps/mod.rs` and `definitions/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`
//! 4. Register it in `registry.rs` (names, metadata and HTTP dispatch)

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
