//! Weather forecast for a city.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

/// Parameters for the weather lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsWeatherParams {
    #[schemars(description = "City name or standard adcode")]
    pub city: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsWeatherTool;

impl MapsTool for MapsWeatherTool {
    type Params = MapsWeatherParams;

    const NAME: &'static str = "maps_weather";
    const DESCRIPTION: &'static str =
        "Query the multi-day weather forecast for a city by name or standard adcode.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/weather/weatherInfo";
    const OPERATION: &'static str = "Get weather";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        // "all" selects forecasts rather than live conditions.
        vec![("city", params.city.clone()), ("extensions", "all".to_string())]
    }

    fn shape(body: &Value) -> MapsOutcome {
        let Some(forecast) = body.items("forecasts").first() else {
            return MapsOutcome::failed("No forecast data available");
        };

        MapsOutcome::Shaped(json!({
            "city": forecast.leaf("city"),
            "forecasts": forecast.list("casts"),
        }))
    }
}
