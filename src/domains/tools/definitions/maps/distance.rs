//! Distance measurement from one or more origins to a destination.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

fn default_distance_type() -> String {
    "1".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsDistanceParams {
    #[schemars(
        description = "One or more start coordinates separated by '|', e.g. '120.1,30.2|120.3,30.4'"
    )]
    pub origins: String,

    #[schemars(description = "End coordinate as 'longitude,latitude'")]
    pub destination: String,

    /// Measurement mode.
    #[serde(rename = "type", default = "default_distance_type")]
    #[schemars(
        description = "0 for straight-line distance, 1 for driving distance (default), 3 for walking distance"
    )]
    pub distance_type: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsDistanceTool;

impl MapsTool for MapsDistanceTool {
    type Params = MapsDistanceParams;

    const NAME: &'static str = "maps_distance";
    const DESCRIPTION: &'static str = "Measure the distance between origins and a destination. \
         Supports driving, walking and straight-line distance.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/distance";
    const OPERATION: &'static str = "Direction Distance";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        vec![
            ("origins", params.origins.clone()),
            ("destination", params.destination.clone()),
            ("type", params.distance_type.clone()),
        ]
    }

    fn shape(body: &Value) -> MapsOutcome {
        let results: Vec<Value> = body
            .items("results")
            .iter()
            .map(|r| {
                json!({
                    "origin_id": r.leaf("origin_id"),
                    "dest_id": r.leaf("dest_id"),
                    "distance": r.leaf("distance"),
                    "duration": r.leaf("duration"),
                })
            })
            .collect();

        MapsOutcome::Shaped(json!({ "results": results }))
    }
}
