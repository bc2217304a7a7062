//! Keyword POI search.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool, shape_pois};
use super::json::Lenient;

fn default_citylimit() -> String {
    "false".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsTextSearchParams {
    #[schemars(description = "Search keywords")]
    pub keywords: String,

    #[serde(default)]
    #[schemars(description = "City to search in (name or adcode)")]
    pub city: String,

    #[serde(default = "default_citylimit")]
    #[schemars(description = "'true' to return only results inside the given city")]
    pub citylimit: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsTextSearchTool;

impl MapsTool for MapsTextSearchTool {
    type Params = MapsTextSearchParams;

    const NAME: &'static str = "maps_text_search";
    const DESCRIPTION: &'static str =
        "Search points of interest by keyword, optionally restricted to a city.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/place/text";
    const OPERATION: &'static str = "Text Search";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        // Empty city is sent as-is; the provider treats it as nationwide.
        vec![
            ("keywords", params.keywords.clone()),
            ("city", params.city.clone()),
            ("citylimit", params.citylimit.clone()),
        ]
    }

    fn shape(body: &Value) -> MapsOutcome {
        let suggestion = body.at("suggestion");
        let cities: Vec<Value> = suggestion
            .items("cities")
            .iter()
            .map(|city| json!({ "name": city.leaf("name") }))
            .collect();

        MapsOutcome::Shaped(json!({
            "suggestion": {
                "keywords": suggestion.leaf("keywords"),
                "cities": cities,
            },
            "pois": shape_pois(body.items("pois")),
        }))
    }
}
