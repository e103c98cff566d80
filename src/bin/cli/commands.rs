//! Command execution logic for the alb-mcp binary.

use std::time::Duration;

use alb_mcp_server::{AlbClient, ServerConfig};

use crate::cli::args::{McpManifestArgs, McpStdioArgs};
use crate::mcp::server::McpServer;
use crate::mcp::tools;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the MCP server over stdio.
pub async fn mcp_stdio_command(args: McpStdioArgs) -> anyhow::Result<()> {
    eprintln!("Starting MCP stdio server for {}", args.server_url);

    let config = ServerConfig::new(args.server_url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let client = AlbClient::new(config)?;

    McpServer::new(client).run().await
}

/// Generate MCP manifest JSON.
pub async fn mcp_manifest_command(args: McpManifestArgs) -> anyhow::Result<()> {
    let tool_entries: Vec<serde_json::Value> = tools::descriptors()
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name.clone(),
                "description": tool.description.clone(),
                "parameters": tool.input_schema.clone(),
            })
        })
        .collect();

    let manifest = serde_json::json!({
        "name": "alb-mcp-server",
        "version": VERSION,
        "description": "Kubernetes pod network diagnostics over MCP",
        "capabilities": {
            "tools": tool_entries,
        },
        "server": {
            "command": "alb-mcp",
            "args": ["mcp-stdio"]
        }
    });

    let rendered = serde_json::to_string_pretty(&manifest)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!("MCP manifest saved to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
