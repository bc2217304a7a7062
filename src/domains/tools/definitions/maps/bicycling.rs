//! Bicycling route planning (v4 API).
//!
//! This is the only tool on the v4 endpoint family, which signals success
//! with `errcode == 0` and wraps the route under `data`.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool, SuccessStatus, shape_paths};
use super::json::Lenient;

/// Origin and destination of a route.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsRouteParams {
    #[schemars(description = "Start coordinate as 'longitude,latitude'")]
    pub origin: String,

    #[schemars(description = "End coordinate as 'longitude,latitude'")]
    pub destination: String,
}

impl MapsRouteParams {
    pub(super) fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MapsBicyclingTool;

impl MapsTool for MapsBicyclingTool {
    type Params = MapsRouteParams;

    const NAME: &'static str = "maps_bicycling";
    const DESCRIPTION: &'static str = "Plan a bicycling route between two coordinates, taking \
         overpasses, one-way streets and closures into account. Supports routes up to 500 km.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v4/direction/bicycling";
    const OPERATION: &'static str = "Direction bicycling";
    const STATUS: SuccessStatus = SuccessStatus::ErrcodeZero;

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        params.query()
    }

    fn shape(body: &Value) -> MapsOutcome {
        let data = body.at("data");
        MapsOutcome::Shaped(json!({
            "data": {
                "origin": data.leaf("origin"),
                "destination": data.leaf("destination"),
                "paths": shape_paths(data.items("paths"), false),
            }
        }))
    }
}
