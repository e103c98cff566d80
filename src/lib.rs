//! # alb-mcp-server
//!
//! Library crate backing the `alb-mcp` binary: an MCP (Model Context
//! Protocol) stdio server that exposes Kubernetes pod network diagnostics
//! collected by the ALB VPC-CNI agent.
//!
//! The binary speaks line-delimited JSON-RPC over stdin/stdout and turns
//! `tools/call` requests into a single HTTP GET against the collector
//! endpoint. This crate holds the pieces that do not depend on the wire
//! protocol:
//!
//! - configuration for the upstream endpoint ([`core::config`])
//! - the error taxonomy ([`core::errors`])
//! - the HTTP client for the collector ([`upstream`])
//!
//! Logs go to stderr so they never interleave with protocol output.

#![warn(missing_docs)]

pub mod core {
    //! Core configuration and error types.

    pub mod config;
    pub mod errors;
}

pub mod upstream;

pub use crate::core::config::ServerConfig;
pub use crate::core::errors::{AlbError, Result};
pub use crate::upstream::AlbClient;
