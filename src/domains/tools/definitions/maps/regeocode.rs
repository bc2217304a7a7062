//! Reverse geocoding: coordinate to administrative divisions.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

/// Parameters for reverse geocoding.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsRegeocodeParams {
    /// Coordinate to resolve.
    #[schemars(description = "Amap coordinate as 'longitude,latitude'")]
    pub location: String,
}

/// Resolve a coordinate to province, city and district.
#[derive(Debug, Clone, Copy)]
pub struct MapsRegeocodeTool;

impl MapsTool for MapsRegeocodeTool {
    type Params = MapsRegeocodeParams;

    const NAME: &'static str = "maps_regeocode";
    const DESCRIPTION: &'static str = "Convert an Amap 'longitude,latitude' coordinate into \
         administrative division information (province, city, district).";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/geocode/regeo";
    const OPERATION: &'static str = "RGeocoding";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        vec![("location", params.location.clone())]
    }

    fn shape(body: &Value) -> MapsOutcome {
        let component = body.at("regeocode").at("addressComponent");
        MapsOutcome::Shaped(json!({
            "province": component.leaf("province"),
            "city": component.leaf("city"),
            "district": component.leaf("district"),
        }))
    }
}
