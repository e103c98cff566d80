//! Tool registry and invocation for the MCP server.
//!
//! One tool is registered: `get_pod_network_info`. The registry is an
//! immutable table built once at startup; dispatch only ever reads it.
//!
//! Validation failures and upstream failures are both reported as tool
//! results with `isError: true` rather than JSON-RPC errors: the call
//! mechanism worked, the operation did not.

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::warn;

use alb_mcp_server::AlbClient;

use crate::mcp::formatters::format_network_info;
use crate::mcp::protocol::{pod_network_info_schema, ToolDescriptor, ToolResult};

/// Name of the single registered tool.
pub const POD_NETWORK_INFO: &str = "get_pod_network_info";

static TOOLS: Lazy<Vec<ToolDescriptor>> = Lazy::new(|| {
    vec![ToolDescriptor {
        name: POD_NETWORK_INFO.to_string(),
        description: "Get detailed network information for a Kubernetes pod including \
                      ENI details, security groups, and routing rules"
            .to_string(),
        input_schema: pod_network_info_schema(),
    }]
});

/// The static tool table.
pub fn descriptors() -> &'static [ToolDescriptor] {
    &TOOLS
}

/// Non-empty string argument lookup.
fn string_argument<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Execute a `tools/call` request.
///
/// `params` is the raw request params object; the tool name and arguments
/// are looked up loosely so that malformed shapes degrade into in-band
/// tool errors instead of protocol errors. No HTTP request is made unless
/// the tool name and both arguments validate.
pub async fn execute_call(params: &Value, client: &AlbClient) -> ToolResult {
    let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
    if name != POD_NETWORK_INFO {
        warn!("rejecting call for unknown tool '{name}'");
        return ToolResult::error(format!("Error: Unknown tool '{name}'"));
    }

    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
    let (namespace, pod_name) = match (
        string_argument(&arguments, "namespace"),
        string_argument(&arguments, "pod_name"),
    ) {
        (Some(namespace), Some(pod_name)) => (namespace, pod_name),
        _ => {
            return ToolResult::error(
                "Error: Both 'namespace' and 'pod_name' parameters are required",
            );
        }
    };

    match client.pod_network_info(namespace, pod_name).await {
        Ok(data) => ToolResult::text(format_network_info(&data)),
        Err(err) => ToolResult::error(format!("Error: {err}")),
    }
}
