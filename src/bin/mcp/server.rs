//! MCP JSON-RPC server: stdio request loop and method dispatch.
//!
//! Strictly sequential: one request line is fully handled, including the
//! blocking upstream call, before the next line is read. Responses are
//! flat payload objects; the request id, when present, is merged in after
//! dispatch so handlers never deal with ids. Per-request failures are
//! reported in-band and never stop the loop; only stdin/stdout failures
//! are fatal.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use alb_mcp_server::AlbClient;

use crate::mcp::protocol::{error_codes, error_payload, JsonRpcRequest};
use crate::mcp::tools;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = env!("CARGO_PKG_NAME");
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server handling line-delimited JSON-RPC over stdin/stdout.
pub struct McpServer {
    client: AlbClient,
}

impl McpServer {
    /// Create a server around a collector client.
    pub fn new(client: AlbClient) -> Self {
        Self { client }
    }

    /// Run the request loop until EOF or interrupt.
    pub async fn run(&self) -> anyhow::Result<()> {
        info!("MCP JSON-RPC server ready for requests");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();
        let mut line = String::new();

        loop {
            line.clear();

            let read = tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupt received, shutting down");
                    break;
                }
                read = reader.read_line(&mut line) => read,
            };

            match read {
                Ok(0) => {
                    debug!("EOF reached, shutting down");
                    break;
                }
                Ok(_) => {
                    let request_line = line.trim();
                    // Blank lines are not requests and produce no output.
                    if request_line.is_empty() {
                        continue;
                    }

                    let response = self.process_line(request_line).await;
                    let rendered = serde_json::to_string(&response)?;
                    stdout.write_all(rendered.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
                Err(e) => {
                    error!("error reading from stdin: {e}");
                    return Err(e.into());
                }
            }
        }

        info!("MCP server shutdown complete");
        Ok(())
    }

    /// Handle one non-blank request line, producing exactly one response.
    pub(crate) async fn process_line(&self, line: &str) -> Value {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                // The id cannot be recovered from a line that failed to
                // parse, so parse errors are the one variant without one.
                error!("invalid JSON received: {e}");
                return error_payload(error_codes::PARSE_ERROR, "Parse error");
            }
        };

        debug!("handling method: {}", request.method);

        let mut response = match self.dispatch(&request).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("error processing request: {e}");
                error_payload(error_codes::INTERNAL_ERROR, format!("Internal error: {e}"))
            }
        };

        if let (Some(object), Some(id)) = (response.as_object_mut(), request.id) {
            object.insert("id".to_string(), id);
        }

        response
    }

    /// Route a method to its handler. Pure in (method, params); the id is
    /// handled by the caller.
    async fn dispatch(&self, request: &JsonRpcRequest) -> anyhow::Result<Value> {
        match request.method.as_str() {
            "initialize" => Ok(initialize_payload()),
            "tools/list" => Ok(serde_json::json!({ "tools": tools::descriptors() })),
            "tools/call" => {
                let result = tools::execute_call(&request.params, &self.client).await;
                Ok(serde_json::to_value(result)?)
            }
            other => Ok(error_payload(
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            )),
        }
    }
}

/// Fixed capability/version/identity document for `initialize`.
fn initialize_payload() -> Value {
    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alb_mcp_server::ServerConfig;
    use serde_json::json;
    use url::Url;

    fn server() -> McpServer {
        let config = ServerConfig::new(Url::parse("http://127.0.0.1:1").unwrap());
        McpServer::new(AlbClient::new(config).unwrap())
    }

    #[tokio::test]
    async fn malformed_line_yields_parse_error_without_id() {
        let response = server().process_line("{not json").await;

        assert_eq!(response["error"]["code"], json!(-32700));
        assert_eq!(response["error"]["message"], "Parse error");
        assert!(response.get("id").is_none());
    }

    #[tokio::test]
    async fn unknown_method_yields_method_not_found_with_id() {
        let response = server()
            .process_line(r#"{"method": "resources/list", "id": 42}"#)
            .await;

        assert_eq!(response["error"]["code"], json!(-32601));
        assert_eq!(response["error"]["message"], "Method not found: resources/list");
        assert_eq!(response["id"], json!(42));
    }

    #[tokio::test]
    async fn initialize_reports_identity_and_echoes_id() {
        let response = server()
            .process_line(r#"{"method": "initialize", "id": "init-1"}"#)
            .await;

        assert_eq!(response["protocolVersion"], "2024-11-05");
        assert_eq!(response["capabilities"]["tools"], json!({}));
        assert_eq!(response["serverInfo"]["name"], "alb-mcp-server");
        assert_eq!(response["serverInfo"]["version"], "1.0.0");
        assert_eq!(response["id"], json!("init-1"));
    }

    #[tokio::test]
    async fn initialize_ignores_params_and_is_reproducible() {
        let server = server();
        let with_params = server
            .process_line(r#"{"method": "initialize", "params": {"clientInfo": {"name": "x"}}}"#)
            .await;
        let without_params = server.process_line(r#"{"method": "initialize"}"#).await;

        assert_eq!(with_params, without_params);
        assert!(with_params.get("id").is_none());
    }

    #[tokio::test]
    async fn tools_list_serves_the_static_registry() {
        let response = server()
            .process_line(r#"{"method": "tools/list", "id": 7}"#)
            .await;

        let tool_list = response["tools"].as_array().expect("tools array");
        assert_eq!(tool_list.len(), 1);
        assert_eq!(tool_list[0]["name"], "get_pod_network_info");
        assert!(tool_list[0]["inputSchema"].is_object());
        assert_eq!(response["id"], json!(7));
    }

    #[tokio::test]
    async fn tools_call_response_echoes_id_on_tool_errors() {
        let response = server()
            .process_line(r#"{"method": "tools/call", "params": {"name": "nope"}, "id": 9}"#)
            .await;

        assert_eq!(response["isError"], json!(true));
        assert_eq!(
            response["content"][0]["text"],
            "Error: Unknown tool 'nope'"
        );
        assert_eq!(response["id"], json!(9));
    }

    #[tokio::test]
    async fn id_is_preserved_in_type_and_value() {
        let server = server();

        let numeric = server.process_line(r#"{"method": "tools/list", "id": 42}"#).await;
        assert_eq!(numeric["id"], json!(42));

        let string = server.process_line(r#"{"method": "tools/list", "id": "42"}"#).await;
        assert_eq!(string["id"], json!("42"));

        let nested = server
            .process_line(r#"{"method": "tools/list", "id": [1, "a"]}"#)
            .await;
        assert_eq!(nested["id"], json!([1, "a"]));
    }
}
