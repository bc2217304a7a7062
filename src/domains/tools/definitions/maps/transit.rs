//! Integrated public transit planning (bus, subway, rail, walking legs).
//!
//! Each transit plan is a list of segments; a segment may contain any of a
//! walking leg, bus lines, a subway entrance/exit and a railway leg. Missing
//! parts keep their shape with defaulted leaves so callers can index safely.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsTransitParams {
    #[schemars(description = "Start coordinate as 'longitude,latitude'")]
    pub origin: String,

    #[schemars(description = "End coordinate as 'longitude,latitude'")]
    pub destination: String,

    #[schemars(description = "Origin city name or adcode")]
    pub city: String,

    #[schemars(description = "Destination city name or adcode")]
    pub cityd: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsDirectionTransitIntegratedTool;

impl MapsTool for MapsDirectionTransitIntegratedTool {
    type Params = MapsTransitParams;

    const NAME: &'static str = "maps_direction_transit_integrated";
    const DESCRIPTION: &'static str = "Plan a public transit commute (bus, subway, train) between \
         two coordinates. Origin and destination cities are required; cross-city routes are \
         supported.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/direction/transit/integrated";
    const OPERATION: &'static str = "Direction Transit Integrated";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        vec![
            ("origin", params.origin.clone()),
            ("destination", params.destination.clone()),
            ("city", params.city.clone()),
            ("cityd", params.cityd.clone()),
        ]
    }

    fn shape(body: &Value) -> MapsOutcome {
        let route = body.at("route");
        let transits: Vec<Value> = route.items("transits").iter().map(shape_transit).collect();

        MapsOutcome::Shaped(json!({
            "route": {
                "origin": route.leaf("origin"),
                "destination": route.leaf("destination"),
                "distance": route.leaf("distance"),
                "transits": transits,
            }
        }))
    }
}

fn shape_transit(transit: &Value) -> Value {
    let segments: Vec<Value> = transit.items("segments").iter().map(shape_segment).collect();
    json!({
        "duration": transit.leaf("duration"),
        "walking_distance": transit.leaf("walking_distance"),
        "segments": segments,
    })
}

fn shape_segment(segment: &Value) -> Value {
    let walking = segment.at("walking");
    let steps: Vec<Value> = walking
        .items("steps")
        .iter()
        .map(|step| {
            json!({
                "instruction": step.leaf("instruction"),
                "road": step.leaf("road"),
                "distance": step.leaf("distance"),
                "action": step.leaf("action"),
                "assistant_action": step.leaf("assistant_action"),
            })
        })
        .collect();

    let buslines: Vec<Value> = segment
        .at("bus")
        .items("buslines")
        .iter()
        .map(shape_busline)
        .collect();

    let railway = segment.at("railway");

    json!({
        "walking": {
            "origin": walking.leaf("origin"),
            "destination": walking.leaf("destination"),
            "distance": walking.leaf("distance"),
            "duration": walking.leaf("duration"),
            "steps": steps,
        },
        "bus": { "buslines": buslines },
        "entrance": { "name": segment.at("entrance").leaf("name") },
        "exit": { "name": segment.at("exit").leaf("name") },
        "railway": {
            "name": railway.leaf("name"),
            "trip": railway.leaf("trip"),
        },
    })
}

fn shape_busline(line: &Value) -> Value {
    let via_stops: Vec<Value> = line
        .items("via_stops")
        .iter()
        .map(|stop| json!({ "name": stop.leaf("name") }))
        .collect();

    json!({
        "name": line.leaf("name"),
        "departure_stop": { "name": line.at("departure_stop").leaf("name") },
        "arrival_stop": { "name": line.at("arrival_stop").leaf("name") },
        "distance": line.leaf("distance"),
        "duration": line.leaf("duration"),
        "via_stops": via_stops,
    })
}
