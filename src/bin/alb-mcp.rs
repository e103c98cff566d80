//! alb-mcp — MCP stdio server for Kubernetes pod network diagnostics.
//!
//! Bridges the ALB VPC-CNI collector into any MCP-capable client: JSON-RPC
//! requests arrive one per line on stdin, responses leave one per line on
//! stdout, and everything diagnostic goes to stderr.

use clap::Parser;

mod cli;
mod mcp;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Stderr writer keeps logs off the protocol stream.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::McpStdio(args) => {
            cli::mcp_stdio_command(args).await?;
        }
        Commands::McpManifest(args) => {
            cli::mcp_manifest_command(args).await?;
        }
    }

    Ok(())
}
