//! CLI argument structures for the alb-mcp binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

use alb_mcp_server::core::config::DEFAULT_TIMEOUT_SECS;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kubernetes pod network diagnostics over MCP
#[derive(Parser)]
#[command(name = "alb-mcp")]
#[command(version = VERSION)]
#[command(about = "Expose ALB VPC-CNI pod network diagnostics as an MCP tool")]
#[command(long_about = "
Serve Kubernetes pod network diagnostics (ENI details, security groups,
routing rules) to MCP clients over stdin/stdout.

Common Usage:

  # Start the stdio server against a collector endpoint
  alb-mcp mcp-stdio --server-url http://collector:8080

  # Same, with the endpoint taken from the environment
  ALB_MCP_SERVER_URL=http://collector:8080 alb-mcp mcp-stdio

  # Generate the MCP manifest JSON for client registration
  alb-mcp mcp-manifest
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server over stdio
    #[command(name = "mcp-stdio")]
    McpStdio(McpStdioArgs),

    /// Generate MCP manifest JSON
    #[command(name = "mcp-manifest")]
    McpManifest(McpManifestArgs),
}

#[derive(Args)]
pub struct McpStdioArgs {
    /// Base URL of the ALB collector endpoint
    #[arg(long, env = "ALB_MCP_SERVER_URL")]
    pub server_url: Url,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[derive(Args)]
pub struct McpManifestArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mcp_stdio_requires_a_server_url() {
        let result = Cli::try_parse_from(["alb-mcp", "mcp-stdio"]);
        assert!(result.is_err());
    }

    #[test]
    fn mcp_stdio_accepts_url_and_timeout() {
        let cli = Cli::try_parse_from([
            "alb-mcp",
            "mcp-stdio",
            "--server-url",
            "http://collector:8080",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::McpStdio(args) => {
                assert_eq!(args.server_url.as_str(), "http://collector:8080/");
                assert_eq!(args.timeout_secs, 5);
            }
            _ => panic!("expected mcp-stdio command"),
        }
    }

    #[test]
    fn mcp_stdio_rejects_invalid_url() {
        let result =
            Cli::try_parse_from(["alb-mcp", "mcp-stdio", "--server-url", "not a url"]);
        assert!(result.is_err());
    }
}
