//! API client for the benchmark server.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::model::{BenchmarkRequest, BenchmarkResult};

/// Something that can run one benchmark remotely.
#[async_trait]
pub trait BenchmarkApi: Send + Sync {
    /// Issue one request and decode its result.
    async fn run_benchmark(
        &self,
        request: &BenchmarkRequest,
    ) -> Result<BenchmarkResult, TransportError>;
}

/// HTTP client for the benchmark endpoint.
///
/// No timeout is configured: the client waits until the network layer
/// resolves or fails.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    endpoint: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.server_url.clone(), config.endpoint.clone())
    }

    /// Resolved benchmark URL
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}

#[async_trait]
impl BenchmarkApi for ApiClient {
    async fn run_benchmark(
        &self,
        request: &BenchmarkRequest,
    ) -> Result<BenchmarkResult, TransportError> {
        let url = self.url();
        debug!(%url, n = request.n, x = request.x, "POST benchmark");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Benchmark server returned an error status");
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        BenchmarkResult::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new("http://localhost:8080", "/api/benchmark");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.url(), "http://localhost:8080/api/benchmark");
    }

    #[test]
    fn test_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/", "/api/benchmark");
        assert_eq!(client.url(), "http://localhost:8080/api/benchmark");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::default();
        let client = ApiClient::from_config(&config);
        assert_eq!(client.url(), "http://localhost:8080/api/benchmark");
    }
}
