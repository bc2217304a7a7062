//! Driving route planning.

use serde_json::{Value, json};

use super::bicycling::MapsRouteParams;
use super::common::{MapsOutcome, MapsTool, shape_paths};
use super::json::Lenient;

#[derive(Debug, Clone, Copy)]
pub struct MapsDirectionDrivingTool;

impl MapsTool for MapsDirectionDrivingTool {
    type Params = MapsRouteParams;

    const NAME: &'static str = "maps_direction_driving";
    const DESCRIPTION: &'static str = "Plan a passenger-car driving route between two \
         coordinates. Each returned path includes its polyline.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/direction/driving";
    const OPERATION: &'static str = "Direction Driving";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        params.query()
    }

    fn shape(body: &Value) -> MapsOutcome {
        let route = body.at("route");
        MapsOutcome::Shaped(json!({
            "route": {
                "origin": route.leaf("origin"),
                "destination": route.leaf("destination"),
                "paths": shape_paths(route.items("paths"), true),
            }
        }))
    }
}
