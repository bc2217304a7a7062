//! IP address location.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::{MapsOutcome, MapsTool};
use super::json::Lenient;

/// Parameters for IP location.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MapsIpLocationParams {
    #[schemars(description = "IPv4 address to locate")]
    pub ip: String,
}

#[derive(Debug, Clone, Copy)]
pub struct MapsIpLocationTool;

impl MapsTool for MapsIpLocationTool {
    type Params = MapsIpLocationParams;

    const NAME: &'static str = "maps_ip_location";
    const DESCRIPTION: &'static str =
        "Locate an IP address, returning its province, city, adcode and bounding rectangle.";
    const ENDPOINT: &'static str = "https://restapi.amap.com/v3/ip";
    const OPERATION: &'static str = "IP Location";

    fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
        vec![("ip", params.ip.clone())]
    }

    fn shape(body: &Value) -> MapsOutcome {
        MapsOutcome::Shaped(json!({
            "province": body.leaf("province"),
            "city": body.leaf("city"),
            "adcode": body.leaf("adcode"),
            "rectangle": body.leaf("rectangle"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::maps::common::execute;
    use crate::domains::tools::definitions::maps::testing::{FakeFetch, test_client};

    #[test]
    fn test_ip_shape() {
        let body = json!({
            "status": "1",
            "info": "OK",
            "infocode": "10000",
            "province": "北京市",
            "city": "北京市",
            "adcode": "110000",
            "rectangle": "116.0119343,39.66127144;116.7829835,40.2164962"
        });
        assert_eq!(
            MapsIpLocationTool::shape(&body).into_json(),
            json!({
                "province": "北京市",
                "city": "北京市",
                "adcode": "110000",
                "rectangle": "116.0119343,39.66127144;116.7829835,40.2164962"
            })
        );
    }

    #[tokio::test]
    async fn test_ip_transport_failure() {
        let (client, _) = test_client(FakeFetch::failing("error sending request"));
        let params = MapsIpLocationParams {
            ip: "114.247.50.2".to_string(),
        };
        let result = execute::<MapsIpLocationTool>(&client, &params).await.into_json();
        assert_eq!(result, json!({ "error": "Request failed: error sending request" }));
    }
}
