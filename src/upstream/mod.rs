//! HTTP client for the ALB VPC-CNI collector.
//!
//! One query is supported: pod network info, looked up by namespace and
//! pod name. The collector is treated as an opaque JSON-returning
//! endpoint; the response body is kept as a loose [`serde_json::Value`]
//! tree so the formatter can tolerate missing or oddly-typed fields.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::config::ServerConfig;
use crate::core::errors::{AlbError, Result};

/// Client for the collector's pod network endpoint.
#[derive(Debug, Clone)]
pub struct AlbClient {
    http: reqwest::Client,
    config: ServerConfig,
}

impl AlbClient {
    /// Build a client from the given configuration.
    ///
    /// The configured timeout applies to every request the client makes,
    /// connection setup included.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AlbError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// URL of the pod network query for a namespace/pod pair.
    pub fn pod_network_url(&self, namespace: &str, pod_name: &str) -> String {
        format!(
            "{}/mcp/network/pod/{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            namespace,
            pod_name
        )
    }

    /// Fetch network info for a specific pod from the collector.
    ///
    /// Every failure mode (transport error, timeout, non-2xx status,
    /// non-JSON body) maps to [`AlbError::Upstream`]; callers report them
    /// all the same way.
    pub async fn pod_network_info(&self, namespace: &str, pod_name: &str) -> Result<Value> {
        let url = self.pod_network_url(namespace, pod_name);
        debug!("querying ALB endpoint: {url}");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!("upstream request failed: {e}");
            AlbError::upstream(e)
        })?;

        let response = response.error_for_status().map_err(|e| {
            warn!("upstream returned error status: {e}");
            AlbError::upstream(e)
        })?;

        let data: Value = response.json().await.map_err(|e| {
            warn!("upstream body was not valid JSON: {e}");
            AlbError::upstream(e)
        })?;

        info!("retrieved network info for pod {namespace}/{pod_name}");
        Ok(data)
    }
}
