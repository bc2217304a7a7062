//! MCP server implementation and lifecycle management.
//!
//! [`McpServer`] is the rmcp `ServerHandler`. It only serves tools; the
//! catalog is assembled in `domains/tools/router.rs` and every route holds a
//! clone of the shared [`AmapClient`].

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::client::AmapClient;
use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Instructions advertised to clients during the handshake.
pub const SERVER_INSTRUCTIONS: &str = "Amap (Gaode) maps tools: geocoding, reverse geocoding, \
     IP location, weather, route planning (walking, driving, bicycling, transit), distance \
     measurement and POI search. Coordinates are 'longitude,latitude' strings. Every tool \
     returns either a result object or {\"error\": \"...\"}.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Credential-carrying provider client shared by all tools.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: AmapClient,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, building the provider HTTP client.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let client = AmapClient::new(&config.amap)?;
        Ok(Self::with_client(config, client))
    }

    /// Create a server over an existing provider client.
    pub fn with_client(config: Config, client: AmapClient) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Names of every registered tool.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolRegistry::tool_names()
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        ToolRegistry::new(self.client.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiKey;
    use crate::domains::tools::definitions::maps::testing::{FakeFetch, test_server};
    use rmcp::{ServiceError, ServiceExt};
    use serde_json::json;

    fn arguments(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn test_new_builds_real_client() {
        let config = Config::new(ApiKey::new("abc").unwrap());
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.name(), "amap-maps");
        assert_eq!(server.list_tools().len(), 12);
    }

    #[test]
    fn test_info_advertises_tools_only() {
        let config = Config::new(ApiKey::new("abc").unwrap());
        let server = McpServer::new(config).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[tokio::test]
    async fn test_tool_calls_over_rmcp_session() -> anyhow::Result<()> {
        // One body serves both a shaped weather result and an empty POI lookup.
        let body = json!({
            "status": "1",
            "forecasts": [{ "city": "上海市", "casts": [{ "date": "2024-05-01" }] }],
            "pois": []
        });
        let (server, fetch) = test_server(FakeFetch::ok(body));

        let (server_transport, client_transport) = tokio::io::duplex(4096);
        let server_handle = tokio::spawn(async move {
            server.serve(server_transport).await?.waiting().await?;
            anyhow::Ok(())
        });
        let client = ().serve(client_transport).await?;

        let tools = client.list_all_tools().await?;
        assert_eq!(tools.len(), 12);

        let shaped = client
            .call_tool(CallToolRequestParam {
                name: "maps_weather".into(),
                arguments: arguments(json!({ "city": "上海" })),
            })
            .await?;
        assert_eq!(shaped.is_error, Some(false));
        assert_eq!(
            shaped.structured_content,
            Some(json!({ "city": "上海市", "forecasts": [{ "date": "2024-05-01" }] }))
        );
        let text = shaped
            .content
            .first()
            .and_then(|content| content.raw.as_text())
            .map(|text| text.text.clone())
            .expect("text content");
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text)?["city"], "上海市");

        let missing = client
            .call_tool(CallToolRequestParam {
                name: "maps_search_detail".into(),
                arguments: arguments(json!({ "id": "B000000000" })),
            })
            .await?;
        assert_eq!(missing.is_error, Some(true));
        assert_eq!(
            missing.structured_content,
            Some(json!({ "error": "No POI found" }))
        );

        let malformed = client
            .call_tool(CallToolRequestParam {
                name: "maps_geo".into(),
                arguments: arguments(json!({ "address": 42 })),
            })
            .await;
        match malformed {
            Err(ServiceError::McpError(err)) => assert_eq!(err.code, ErrorCode::INVALID_PARAMS),
            other => panic!("expected invalid params, got {:?}", other),
        }

        assert_eq!(fetch.calls().len(), 2);

        client.cancel().await?;
        server_handle.await??;
        Ok(())
    }
}
