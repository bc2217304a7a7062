//! POI search within a radius of a coordinate.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool, shape_pois};
use super::json::Lenient;

fn default_radius() -> String {
    "1000".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsAroundSearchParams {
    #[schemars(description = "Center coordinate as 'longitude,latitude'")]
    pub location: String,

    #[serde(default = "default_radius")]
    #[schemars(description = "Search radius in meters (default 1000)")]
    pub radius: String,

    #[serde(default)]
    #[schemars(description = "Search keywords")]
    pub keywords: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsAroundSearchTool;

impl MapsTool for MapsAroundSearchTool {
    type Params = MapsAroundSearchParams;

    const NAME: &'static str = "maps_around_search";
    const DESCRIPTION: &'static str =
        "Search points of interest matching keywords within a radius around a coordinate.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/place/around";
    const OPERATION: &'static str = "Around Search";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        vec![
            ("location", params.location.clone()),
            ("radius", params.radius.clone()),
            ("keywords", params.keywords.clone()),
        ]
    }

    fn shape(body: &Value) -> MapsOutcome {
        MapsOutcome::Shaped(json!({ "pois": shape_pois(body.items("pois")) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::maps::common::execute;
    use crate::domains::tools::definitions::maps::testing::{FakeFetch, test_client};

    #[tokio::test]
    async fn test_around_search_defaults_and_shape() {
        let body = json!({
            "status": "1",
            "pois": [{
                "id": "B0FFG0Q2NM",
                "name": "星巴克(望京SOHO店)",
                "address": "望京街10号",
                "typecode": "050500",
                "distance": "120"
            }]
        });
        let (client, fetch) = test_client(FakeFetch::ok(body));
        let params: MapsAroundSearchParams =
            serde_json::from_value(json!({ "location": "116.480983,39.989628" })).unwrap();

        let result = execute::<MapsAroundSearchTool>(&client, &params).await.into_json();
        assert_eq!(
            result,
            json!({ "pois": [{
                "id": "B0FFG0Q2NM",
                "name": "星巴克(望京SOHO店)",
                "address": "望京街10号",
                "typecode": "050500"
            }]})
        );

        let call = &fetch.calls()[0];
        assert_eq!(call.param("radius"), Some("1000"));
        assert_eq!(call.param("keywords"), Some(""));
    }

    #[tokio::test]
    async fn test_around_search_transport_failure() {
        let (client, _) = test_client(FakeFetch::failing("connection reset"));
        let params = MapsAroundSearchParams {
            location: "116.480983,39.989628".to_string(),
            radius: "500".to_string(),
            keywords: "咖啡".to_string(),
        };
        let result = execute::<MapsAroundSearchTool>(&client, &params).await.into_json();
        assert_eq!(result, json!({ "error": "Request failed: connection reset" }));
    }
}
