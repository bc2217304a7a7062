//! Shared request/response skeleton for the Amap tools.
//!
//! Every tool is the same pipeline: build query parameters, GET one fixed
//! endpoint, check the provider status, shape the body. A tool only supplies
//! the variable parts through [`MapsTool`]; [`execute`], [`create_route`] and
//! [`http_handler`] do the rest for all of them.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::json::Lenient;
use crate::core::client::AmapClient;
use crate::domains::tools::ToolError;

/// How an endpoint reports success.
///
/// Two Amap API generations coexist and signal success differently; each
/// tool names its own convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessStatus {
    /// `"status": "1"` (v3 endpoints).
    StatusOne,
    /// `"errcode": 0` (v4 endpoints).
    ErrcodeZero,
}

impl SuccessStatus {
    /// Whether `body` reports success under this convention.
    pub fn accepts(self, body: &Value) -> bool {
        match self {
            Self::StatusOne => body.get("status").and_then(Value::as_str) == Some("1"),
            Self::ErrcodeZero => body.get("errcode").and_then(Value::as_i64) == Some(0),
        }
    }
}

/// Result of one tool invocation: a shaped object or an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum MapsOutcome {
    Shaped(Value),
    Failed(String),
}

impl MapsOutcome {
    /// Create a failed outcome.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The caller-facing object: the shaped value or `{"error": msg}`.
    pub fn into_json(self) -> Value {
        match self {
            Self::Shaped(value) => value,
            Self::Failed(msg) => json!({ "error": msg }),
        }
    }

    /// Wrap as an MCP result carrying the object as text and structured content.
    pub fn into_call_tool_result(self) -> CallToolResult {
        let is_error = self.is_error();
        let value = self.into_json();
        CallToolResult {
            content: vec![Content::text(value.to_string())],
            structured_content: Some(value),
            is_error: Some(is_error),
            meta: None,
        }
    }
}

/// The variable parts of one Amap tool.
pub trait MapsTool: Send + Sync + 'static {
    /// Caller-supplied arguments.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Fixed provider URL.
    const ENDPOINT: &'static str;

    /// Label used in `"<label> failed: ..."` messages.
    const OPERATION: &'static str;

    const STATUS: SuccessStatus = SuccessStatus::StatusOne;

    /// Query parameters for this call, excluding the key.
    fn query(params: &Self::Params) -> Vec<(&'static str, String)>;

    /// Reshape a successful provider body.
    fn shape(body: &Value) -> MapsOutcome;
}

/// Run one invocation of `T` end to end. Never fails: every problem is
/// folded into [`MapsOutcome::Failed`].
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: MapsTool>(client: &AmapClient, params: &T::Params) -> MapsOutcome {
    info!("Calling {}", T::ENDPOINT);

    let body = match client.get(T::ENDPOINT, T::query(params)).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Request failed: {}", e);
            return MapsOutcome::failed(format!("Request failed: {e}"));
        }
    };

    if !T::STATUS.accepts(&body) {
        let reason = failure_reason(&body);
        warn!("Provider rejected call: {}", reason);
        return MapsOutcome::failed(format!("{} failed: {}", T::OPERATION, reason));
    }

    T::shape(&body)
}

/// Prefer the human-readable `info`, then `infocode`.
pub fn failure_reason(body: &Value) -> String {
    ["info", "infocode"]
        .iter()
        .filter_map(|key| match body.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .next()
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: MapsTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO transport.
pub fn create_route<T, S>(client: AmapClient) -> ToolRoute<S>
where
    T: MapsTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            let params: T::Params = serde_json::from_value(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

            Ok(execute::<T>(&client, &params).await.into_call_tool_result())
        }
        .boxed()
    })
}

/// HTTP handler for `T` (for HTTP transport).
pub async fn http_handler<T: MapsTool>(
    arguments: Value,
    client: &AmapClient,
) -> Result<Value, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {e}", T::NAME)))?;

    let result = execute::<T>(client, &params).await.into_call_tool_result();

    Ok(json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false),
        "structuredContent": result.structured_content,
    }))
}

// ============================================================================
// Shaping helpers shared by several tools
// ============================================================================

/// Route paths for walking, driving and bicycling.
///
/// `with_polyline` adds the provider's `path` field (driving only).
pub fn shape_paths(paths: &[Value], with_polyline: bool) -> Value {
    let shaped = paths
        .iter()
        .map(|path| {
            let steps: Vec<Value> = path
                .items("steps")
                .iter()
                .map(|step| {
                    json!({
                        "instruction": step.leaf("instruction"),
                        "road": step.leaf("road"),
                        "distance": step.leaf("distance"),
                        "orientation": step.leaf("orientation"),
                        "duration": step.leaf("duration"),
                    })
                })
                .collect();

            let mut shaped = json!({
                "distance": path.leaf("distance"),
                "duration": path.leaf("duration"),
                "steps": steps,
            });
            if with_polyline {
                shaped["path"] = path.leaf("path");
            }
            shaped
        })
        .collect();
    Value::Array(shaped)
}

/// POI summaries for the search tools.
pub fn shape_pois(pois: &[Value]) -> Value {
    pois.iter()
        .map(|poi| {
            json!({
                "id": poi.leaf("id"),
                "name": poi.leaf("name"),
                "address": poi.leaf("address"),
                "typecode": poi.leaf("typecode"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::maps::testing::{FakeFetch, test_client};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct EchoParams {
        q: String,
    }

    struct EchoTool;

    impl MapsTool for EchoTool {
        type Params = EchoParams;
        const NAME: &'static str = "maps_echo";
        const DESCRIPTION: &'static str = "echo";
        const ENDPOINT: &'static str = "https://restapi.amap.com/v3/echo";
        const OPERATION: &'static str = "Echo";

        fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
            vec![("q", params.q.clone())]
        }

        fn shape(body: &Value) -> MapsOutcome {
            MapsOutcome::Shaped(json!({ "value": body.leaf("value") }))
        }
    }

    struct EchoV4Tool;

    impl MapsTool for EchoV4Tool {
        type Params = EchoParams;
        const NAME: &'static str = "maps_echo_v4";
        const DESCRIPTION: &'static str = "echo";
        const ENDPOINT: &'static str = "https://restapi.amap.com/v4/echo";
        const OPERATION: &'static str = "Echo v4";
        const STATUS: SuccessStatus = SuccessStatus::ErrcodeZero;

        fn query(params: &Self::Params) -> Vec<(&'static str, String)> {
            vec![("q", params.q.clone())]
        }

        fn shape(_body: &Value) -> MapsOutcome {
            MapsOutcome::Shaped(json!({ "ok": true }))
        }
    }

    fn params() -> EchoParams {
        EchoParams { q: "x".to_string() }
    }

    #[test]
    fn test_status_conventions() {
        assert!(SuccessStatus::StatusOne.accepts(&json!({ "status": "1" })));
        assert!(!SuccessStatus::StatusOne.accepts(&json!({ "status": "0" })));
        assert!(!SuccessStatus::StatusOne.accepts(&json!({ "status": 1 })));
        assert!(!SuccessStatus::StatusOne.accepts(&json!({})));
        assert!(SuccessStatus::ErrcodeZero.accepts(&json!({ "errcode": 0 })));
        assert!(!SuccessStatus::ErrcodeZero.accepts(&json!({ "errcode": 30001 })));
        assert!(!SuccessStatus::ErrcodeZero.accepts(&json!({ "status": "1" })));
    }

    #[test]
    fn test_failure_reason_preference() {
        assert_eq!(
            failure_reason(&json!({ "info": "INVALID_USER_KEY", "infocode": "10001" })),
            "INVALID_USER_KEY"
        );
        assert_eq!(failure_reason(&json!({ "info": "", "infocode": "10001" })), "10001");
        assert_eq!(failure_reason(&json!({ "infocode": 30001 })), "30001");
        assert_eq!(failure_reason(&json!({})), "unknown error");
    }

    #[tokio::test]
    async fn test_execute_success() {
        let (client, fetch) = test_client(FakeFetch::ok(json!({ "status": "1", "value": 7 })));
        let outcome = execute::<EchoTool>(&client, &params()).await;
        assert_eq!(outcome, MapsOutcome::Shaped(json!({ "value": 7 })));

        let calls = fetch.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, EchoTool::ENDPOINT);
        assert_eq!(calls[0].param("key"), Some("test-key"));
        assert_eq!(calls[0].param("q"), Some("x"));
    }

    #[tokio::test]
    async fn test_execute_provider_rejection() {
        let (client, _) = test_client(FakeFetch::ok(
            json!({ "status": "0", "info": "INVALID_USER_KEY", "infocode": "10001" }),
        ));
        let outcome = execute::<EchoTool>(&client, &params()).await;
        assert_eq!(
            outcome.into_json(),
            json!({ "error": "Echo failed: INVALID_USER_KEY" })
        );
    }

    #[tokio::test]
    async fn test_execute_errcode_rejection() {
        let (client, _) = test_client(FakeFetch::ok(
            json!({ "errcode": 30001, "errmsg": "x", "infocode": "30001" }),
        ));
        let outcome = execute::<EchoV4Tool>(&client, &params()).await;
        assert_eq!(outcome.into_json(), json!({ "error": "Echo v4 failed: 30001" }));
    }

    #[tokio::test]
    async fn test_execute_transport_failure() {
        let (client, _) = test_client(FakeFetch::failing("operation timed out"));
        let outcome = execute::<EchoTool>(&client, &params()).await;
        assert_eq!(
            outcome.into_json(),
            json!({ "error": "Request failed: operation timed out" })
        );
    }

    #[tokio::test]
    async fn test_execute_is_idempotent() {
        let (client, _) = test_client(FakeFetch::ok(json!({ "status": "1", "value": "a" })));
        let first = execute::<EchoTool>(&client, &params()).await.into_json();
        let second = execute::<EchoTool>(&client, &params()).await.into_json();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_call_tool_result_flags_errors() {
        let ok = MapsOutcome::Shaped(json!({ "a": 1 })).into_call_tool_result();
        assert_eq!(ok.is_error, Some(false));
        assert_eq!(ok.structured_content, Some(json!({ "a": 1 })));

        let err = MapsOutcome::failed("No POI found").into_call_tool_result();
        assert_eq!(err.is_error, Some(true));
        assert_eq!(err.structured_content, Some(json!({ "error": "No POI found" })));
    }

    #[tokio::test]
    async fn test_http_handler_rejects_bad_arguments() {
        let (client, fetch) = test_client(FakeFetch::ok(json!({ "status": "1" })));
        let result = http_handler::<EchoTool>(json!({ "q": 5 }), &client).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert!(fetch.calls().is_empty());
    }

    #[tokio::test]
    async fn test_http_handler_wraps_result() {
        let (client, _) = test_client(FakeFetch::ok(json!({ "status": "1", "value": "v" })));
        let result = http_handler::<EchoTool>(json!({ "q": "x" }), &client)
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"], json!({ "value": "v" }));
    }

    #[test]
    fn test_shape_paths_with_and_without_polyline() {
        let paths = vec![json!({
            "distance": "120",
            "duration": "90",
            "path": "116.1,39.9;116.2,39.9",
            "steps": [{ "instruction": "向东步行120米", "road": [], "distance": "120" }]
        })];

        let plain = shape_paths(&paths, false);
        assert!(plain[0].get("path").is_none());
        assert_eq!(plain[0]["steps"][0]["road"], json!([]));
        assert_eq!(plain[0]["steps"][0]["orientation"], json!(""));

        let driving = shape_paths(&paths, true);
        assert_eq!(driving[0]["path"], "116.1,39.9;116.2,39.9");
    }
}
