//! Tool Router - builds the rmcp ToolRouter for the stdio transport.
//!
//! Each route owns a clone of the provider client; the clone is cheap since
//! the underlying fetcher sits behind an `Arc`.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::maps::common::create_route;
use super::definitions::{
    MapsAroundSearchTool, MapsBicyclingTool, MapsDirectionDrivingTool,
    MapsDirectionTransitIntegratedTool, MapsDirectionWalkingTool, MapsDistanceTool, MapsGeoTool,
    MapsIpLocationTool, MapsRegeocodeTool, MapsSearchDetailTool, MapsTextSearchTool,
    MapsWeatherTool,
};
use crate::core::client::AmapClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: AmapClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<MapsRegeocodeTool, S>(client.clone()))
        .with_route(create_route::<MapsGeoTool, S>(client.clone()))
        .with_route(create_route::<MapsIpLocationTool, S>(client.clone()))
        .with_route(create_route::<MapsWeatherTool, S>(client.clone()))
        .with_route(create_route::<MapsBicyclingTool, S>(client.clone()))
        .with_route(create_route::<MapsDirectionWalkingTool, S>(client.clone()))
        .with_route(create_route::<MapsDirectionDrivingTool, S>(client.clone()))
        .with_route(create_route::<MapsDirectionTransitIntegratedTool, S>(client.clone()))
        .with_route(create_route::<MapsDistanceTool, S>(client.clone()))
        .with_route(create_route::<MapsTextSearchTool, S>(client.clone()))
        .with_route(create_route::<MapsAroundSearchTool, S>(client.clone()))
        .with_route(create_route::<MapsSearchDetailTool, S>(client))
}
