//! Error types for the alb-mcp-server library.
//!
//! The error taxonomy is deliberately small: everything that can go wrong
//! while talking to the collector (connection refused, DNS failure,
//! timeout, non-2xx status, non-JSON body) collapses into a single
//! [`AlbError::Upstream`] variant, because the protocol reports all of
//! those identically to the caller. Configuration problems get their own
//! variant so startup failures read differently from request failures.

use thiserror::Error;

/// Main result type for alb-mcp-server operations.
pub type Result<T> = std::result::Result<T, AlbError>;

/// Error type for all alb-mcp-server operations.
#[derive(Error, Debug)]
pub enum AlbError {
    /// Upstream collector query failures of any kind.
    ///
    /// The Display text is part of the tool-call contract: the invoker
    /// surfaces it verbatim (prefixed with `Error: `) in the tool result.
    #[error("Failed to query ALB MCP server: {detail}")]
    Upstream {
        /// Human-readable failure detail (status line, transport error, ...)
        detail: String,
    },

    /// Configuration errors (bad base URL, client construction failure).
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
    },
}

impl AlbError {
    /// Create an upstream failure from any displayable cause.
    pub fn upstream(detail: impl std::fmt::Display) -> Self {
        Self::Upstream {
            detail: detail.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_carries_query_failure_prefix() {
        let err = AlbError::upstream("connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to query ALB MCP server: connection refused"
        );
    }

    #[test]
    fn config_display_names_the_field_free_message() {
        let err = AlbError::config("invalid base URL");
        assert_eq!(err.to_string(), "Configuration error: invalid base URL");
    }
}
