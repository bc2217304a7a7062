//! Amap REST tools.
//!
//! One file per tool. Each file supplies only the parameters, endpoint and
//! response shaping; the request pipeline lives in [`common`].

pub mod common;
pub mod json;

pub mod around_search;
pub mod bicycling;
pub mod distance;
pub mod driving;
pub mod geo;
pub mod ip_location;
pub mod regeocode;
pub mod search_detail;
pub mod text_search;
pub mod transit;
pub mod walking;
pub mod weather;

#[cfg(test)]
pub(crate) mod testing;

pub use around_search::{MapsAroundSearchParams, MapsAroundSearchTool};
pub use bicycling::{MapsBicyclingTool, MapsRouteParams};
pub use common::{MapsOutcome, MapsTool, SuccessStatus};
pub use distance::{MapsDistanceParams, MapsDistanceTool};
pub use driving::MapsDirectionDrivingTool;
pub use geo::{MapsGeoParams, MapsGeoTool};
pub use ip_location::{MapsIpLocationParams, MapsIpLocationTool};
pub use regeocode::{MapsRegeocodeParams, MapsRegeocodeTool};
pub use search_detail::{MapsSearchDetailParams, MapsSearchDetailTool};
pub use text_search::{MapsTextSearchParams, MapsTextSearchTool};
pub use transit::{MapsDirectionTransitIntegratedTool, MapsTransitParams};
pub use walking::MapsDirectionWalkingTool;
pub use weather::{MapsWeatherParams, MapsWeatherTool};
