//! MCP (Model Context Protocol) JSON-RPC server implementation.
//!
//! Exposes the pod network diagnostics query as a single MCP tool over
//! line-delimited JSON-RPC on stdin/stdout.

pub mod formatters;
pub mod protocol;
pub mod server;
pub mod tools;
