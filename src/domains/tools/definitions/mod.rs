//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file under `maps/`.

pub mod maps;

pub use maps::{
    MapsAroundSearchTool, MapsBicyclingTool, MapsDirectionDrivingTool,
    MapsDirectionTransitIntegratedTool, MapsDirectionWalkingTool, MapsDistanceTool, MapsGeoTool,
    MapsIpLocationTool, MapsRegeocodeTool, MapsSearchDetailTool, MapsTextSearchTool, MapsTool,
    MapsWeatherTool,
};
