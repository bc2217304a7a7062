//! POI detail lookup by id.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsSearchDetailParams {
    #[schemars(description = "POI id returned by a keyword or around search")]
    pub id: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsSearchDetailTool;

impl MapsTool for MapsSearchDetailTool {
    type Params = MapsSearchDetailParams;

    const NAME: &'static str = "maps_search_detail";
    const DESCRIPTION: &'static str =
        "Get details for a POI id obtained from maps_text_search or maps_around_search.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/place/detail";
    const OPERATION: &'static str = "Get poi detail";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        vec![("id", params.id.clone())]
    }

    fn shape(body: &Value) -> MapsOutcome {
        let Some(poi) = body.items("pois").first() else {
            return MapsOutcome::failed("No POI found");
        };

        let mut detail = json!({
            "id": poi.leaf("id"),
            "name": poi.leaf("name"),
            "location": poi.leaf("location"),
            "address": poi.leaf("address"),
            "business_area": poi.leaf("business_area"),
            "city": poi.leaf("cityname"),
            "type": poi.leaf("type"),
            "alias": poi.leaf("alias"),
        });

        // biz_ext keys overwrite base fields on collision.
        if let (Some(base), Some(ext)) = (detail.as_object_mut(), poi.at("biz_ext").as_object()) {
            base.extend(ext.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        MapsOutcome::Shaped(detail)
    }
}
