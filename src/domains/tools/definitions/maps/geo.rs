//! Geocoding: structured address or landmark name to coordinates.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

/// Parameters for geocoding.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsGeoParams {
    /// Address to resolve.
    #[schemars(description = "Structured address, landmark or building name")]
    pub address: String,

    /// Optional city restriction.
    #[schemars(description = "City name or adcode to restrict the search (optional)")]
    #[serde(default)]
    pub city: Option<String>,
}

/// Convert an address into coordinates.
#[derive(Debug, Clone, Copy)]
pub struct MapsGeoTool;

impl MapsTool for MapsGeoTool {
    type Params = MapsGeoParams;

    const NAME: &'static str = "maps_geo";
    const DESCRIPTION: &'static str = "Convert a structured address into Amap coordinates. Also \
         resolves landmarks, scenic spots and building names. Returns every candidate match.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/geocode/geo";
    const OPERATION: &'static str = "Geocoding";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        let mut query = vec![("address", params.address.clone())];
        if let Some(city) = params.city.as_ref().filter(|c| !c.is_empty()) {
            query.push(("city", city.clone()));
        }
        query
    }

    fn shape(body: &Value) -> MapsOutcome {
        let results: Vec<Value> = body
            .items("geocodes")
            .iter()
            .map(|geo| {
                json!({
                    "country": geo.leaf("country"),
                    "province": geo.leaf("province"),
                    "city": geo.leaf("city"),
                    "citycode": geo.leaf("citycode"),
                    "district": geo.leaf("district"),
                    "street": geo.leaf("street"),
                    "number": geo.leaf("number"),
                    "adcode": geo.leaf("adcode"),
                    "location": geo.leaf("location"),
                    "level": geo.leaf("level"),
                })
            })
            .collect();

        MapsOutcome::Shaped(json!({ "return": results }))
    }
}
