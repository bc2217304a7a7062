//! Walking route planning.

use serde_json::{Value, json};

use super::bicycling::MapsRouteParams;
use super::common::{MapsOutcome, MapsTool, shape_paths};
use super::json::Lenient;

#[derive(Debug, Clone, Copy)]
pub struct MapsDirectionWalkingTool;

impl MapsTool for MapsDirectionWalkingTool {
    type Params = MapsRouteParams;

    const NAME: &'static str = "maps_direction_walking";
    const DESCRIPTION: &'static str = "Plan a walking route between two coordinates. The provider \
         supports walking routes of up to 100 km.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/direction/walking";
    const OPERATION: &'static str = "Direction Walking";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        params.query()
    }

    fn shape(body: &Value) -> MapsOutcome {
        let route = body.at("route");
        MapsOutcome::Shaped(json!({
            "route": {
                "origin": route.leaf("origin"),
                "destination": route.leaf("destination"),
                "paths": shape_paths(route.items("paths"), false),
            }
        }))
    }
}
