//! MCP protocol types and message handling.
//!
//! The wire format follows the MCP stdio convention: one JSON object per
//! line, a `method`/`params`/`id` request shape, and flat response
//! payloads. Responses carry the method payload directly (no `result`
//! envelope); the request `id`, when present, is merged into the payload
//! by the request loop after dispatch. Errors are `{"error": {code,
//! message}}` objects. No `jsonrpc` version field is enforced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming JSON-RPC request.
///
/// `method` and `params` default when absent so that a structurally valid
/// JSON object never turns into a parse error; only malformed JSON does.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Value,
    pub id: Option<Value>,
}

/// Tool definition served from `tools/list` and the manifest.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of a `tools/call` invocation.
///
/// `isError` is serialized only on failure paths; success results omit the
/// key entirely rather than carrying `false`.
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content item in a tool result.
#[derive(Debug, Serialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    /// Successful result carrying one text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: None,
        }
    }

    /// Failed result carrying one text item and `isError: true`.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                content_type: "text".to_string(),
                text: text.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// JSON-RPC error codes used on this wire.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Build a protocol-level error payload (no id; the loop merges it).
pub fn error_payload(code: i32, message: impl Into<String>) -> Value {
    serde_json::json!({
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Input schema for the pod network info tool.
pub fn pod_network_info_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "namespace": {
                "type": "string",
                "description": "Kubernetes namespace where the pod is located"
            },
            "pod_name": {
                "type": "string",
                "description": "Name of the pod to get network information for"
            }
        },
        "required": ["namespace", "pod_name"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_missing_method_and_params() {
        let request: JsonRpcRequest = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(request.method, "");
        assert_eq!(request.params, Value::Null);
        assert_eq!(request.id, Some(json!(3)));
    }

    #[test]
    fn success_result_omits_is_error_key() {
        let result = ToolResult::text("report");
        let value = serde_json::to_value(&result).unwrap();

        assert!(value.get("isError").is_none());
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "report");
    }

    #[test]
    fn error_result_sets_is_error_true() {
        let result = ToolResult::error("Error: something");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["content"][0]["text"], "Error: something");
    }

    #[test]
    fn error_payload_carries_code_and_message() {
        let payload = error_payload(error_codes::METHOD_NOT_FOUND, "Method not found: x");

        assert_eq!(payload["error"]["code"], json!(-32601));
        assert_eq!(payload["error"]["message"], "Method not found: x");
        assert!(payload.get("id").is_none());
    }

    #[test]
    fn pod_network_schema_requires_both_parameters() {
        let schema = pod_network_info_schema();
        assert_eq!(schema["type"], "object");

        let properties = schema["properties"].as_object().expect("properties object");
        for key in ["namespace", "pod_name"] {
            let prop = properties
                .get(key)
                .unwrap_or_else(|| panic!("{key} property missing"))
                .as_object()
                .expect("property object");
            assert_eq!(prop.get("type"), Some(&json!("string")));
        }

        let required = schema["required"].as_array().expect("required array");
        assert_eq!(required, &vec![json!("namespace"), json!("pod_name")]);
    }
}
