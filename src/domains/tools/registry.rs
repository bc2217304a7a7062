//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The catalog of tool names and metadata
//! - HTTP dispatch for tool calls (when http feature is enabled)

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::maps::common::to_tool;
#[cfg(feature = "http")]
use super::definitions::maps::common::http_handler;
use super::definitions::{
    MapsAroundSearchTool, MapsBicyclingTool, MapsDirectionDrivingTool,
    MapsDirectionTransitIntegratedTool, MapsDirectionWalkingTool, MapsDistanceTool, MapsGeoTool,
    MapsIpLocationTool, MapsRegeocodeTool, MapsSearchDetailTool, MapsTextSearchTool, MapsTool,
    MapsWeatherTool,
};
use crate::core::client::AmapClient;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry over one shared provider client.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: AmapClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: AmapClient) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            MapsRegeocodeTool::NAME,
            MapsGeoTool::NAME,
            MapsIpLocationTool::NAME,
            MapsWeatherTool::NAME,
            MapsBicyclingTool::NAME,
            MapsDirectionWalkingTool::NAME,
            MapsDirectionDrivingTool::NAME,
            MapsDirectionTransitIntegratedTool::NAME,
            MapsDistanceTool::NAME,
            MapsTextSearchTool::NAME,
            MapsAroundSearchTool::NAME,
            MapsSearchDetailTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<MapsRegeocodeTool>(),
            to_tool::<MapsGeoTool>(),
            to_tool::<MapsIpLocationTool>(),
            to_tool::<MapsWeatherTool>(),
            to_tool::<MapsBicyclingTool>(),
            to_tool::<MapsDirectionWalkingTool>(),
            to_tool::<MapsDirectionDrivingTool>(),
            to_tool::<MapsDirectionTransitIntegratedTool>(),
            to_tool::<MapsDistanceTool>(),
            to_tool::<MapsTextSearchTool>(),
            to_tool::<MapsAroundSearchTool>(),
            to_tool::<MapsSearchDetailTool>(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let client = &self.client;
        match name {
            MapsRegeocodeTool::NAME => http_handler::<MapsRegeocodeTool>(arguments, client).await,
            MapsGeoTool::NAME => http_handler::<MapsGeoTool>(arguments, client).await,
            MapsIpLocationTool::NAME => http_handler::<MapsIpLocationTool>(arguments, client).await,
            MapsWeatherTool::NAME => http_handler::<MapsWeatherTool>(arguments, client).await,
            MapsBicyclingTool::NAME => http_handler::<MapsBicyclingTool>(arguments, client).await,
            MapsDirectionWalkingTool::NAME => {
                http_handler::<MapsDirectionWalkingTool>(arguments, client).await
            }
            MapsDirectionDrivingTool::NAME => {
                http_handler::<MapsDirectionDrivingTool>(arguments, client).await
            }
            MapsDirectionTransitIntegratedTool::NAME => {
                http_handler::<MapsDirectionTransitIntegratedTool>(arguments, client).await
            }
            MapsDistanceTool::NAME => http_handler::<MapsDistanceTool>(arguments, client).await,
            MapsTextSearchTool::NAME => http_handler::<MapsTextSearchTool>(arguments, client).await,
            MapsAroundSearchTool::NAME => {
                http_handler::<MapsAroundSearchTool>(arguments, client).await
            }
            MapsSearchDetailTool::NAME => {
                http_handler::<MapsSearchDetailTool>(arguments, client).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 12);
        for expected in [
            "maps_regeocode",
            "maps_geo",
            "maps_ip_location",
            "maps_weather",
            "maps_bicycling",
            "maps_direction_walking",
            "maps_direction_driving",
            "maps_direction_transit_integrated",
            "maps_distance",
            "maps_text_search",
            "maps_around_search",
            "maps_search_detail",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_all_tools_have_object_schemas() {
        for tool in ToolRegistry::get_all_tools() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{}",
                tool.name
            );
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_required_parameters_advertised() {
        let tools = ToolRegistry::get_all_tools();
        let transit = tools
            .iter()
            .find(|t| t.name == "maps_direction_transit_integrated")
            .unwrap();
        let required = transit.input_schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);

        let around = tools
            .iter()
            .find(|t| t.name == "maps_around_search")
            .unwrap();
        let required = around.input_schema["required"].as_array().unwrap();
        assert_eq!(required, &vec![serde_json::json!("location")]);
    }

    #[cfg(feature = "http")]
    mod http {
        use super::*;
        use crate::domains::tools::definitions::maps::testing::{FakeFetch, test_client};
        use serde_json::json;
        use tokio_test::{assert_err, assert_ok};

        #[tokio::test]
        async fn test_registry_call_weather() {
            let body = json!({
                "status": "1",
                "forecasts": [{ "city": "杭州市", "casts": [] }]
            });
            let (client, fetch) = test_client(FakeFetch::ok(body));
            let registry = ToolRegistry::new(client);

            let result = assert_ok!(
                registry
                    .call_tool("maps_weather", json!({ "city": "杭州" }))
                    .await
            );
            assert_eq!(result["isError"], false);
            assert_eq!(
                result["structuredContent"],
                json!({ "city": "杭州市", "forecasts": [] })
            );
            assert_eq!(fetch.calls().len(), 1);
        }

        #[tokio::test]
        async fn test_registry_call_unknown() {
            let (client, fetch) = test_client(FakeFetch::ok(json!({})));
            let registry = ToolRegistry::new(client);
            let err = assert_err!(registry.call_tool("maps_teleport", json!({})).await);
            assert!(matches!(err, ToolError::NotFound(_)));
            assert!(fetch.calls().is_empty());
        }

        #[tokio::test]
        async fn test_registry_call_missing_argument() {
            let (client, fetch) = test_client(FakeFetch::ok(json!({})));
            let registry = ToolRegistry::new(client);
            let err = assert_err!(
                registry
                    .call_tool("maps_geo", json!({ "city": "北京" }))
                    .await
            );
            assert!(matches!(err, ToolError::InvalidArguments(_)));
            assert!(fetch.calls().is_empty());
        }
    }
}
