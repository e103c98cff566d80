//! Configuration for the upstream collector endpoint.
//!
//! The base URL has no usable default; it is deployment-specific and must
//! be supplied via the CLI flag or the `ALB_MCP_SERVER_URL` environment
//! variable. The timeout defaults to 30 seconds and bounds every upstream
//! request.

use std::time::Duration;

use url::Url;

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one `alb-mcp` server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the ALB collector, e.g. `http://10.0.0.1:8080`.
    pub base_url: Url,
    /// Bound on every upstream HTTP request.
    pub timeout: Duration,
}

impl ServerConfig {
    /// Create a configuration with the default 30 second timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the upstream request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
