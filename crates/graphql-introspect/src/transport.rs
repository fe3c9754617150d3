//! Network boundary: posting a request body to a GraphQL endpoint.

use crate::types::GraphQLRequest;
use crate::FetchError;
use graphql_config::EndpointConfig;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

/// Default timeout for requests (30 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Something that can post a GraphQL request and hand back the raw body.
///
/// Decoding is left to the caller so that "not JSON" and "JSON of the wrong
/// shape" can be told apart.
pub trait Transport {
    fn post(
        &self,
        request: &GraphQLRequest,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// [`Transport`] backed by `reqwest`, posting JSON to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    headers: HashMap<String, String>,
}

impl HttpTransport {
    /// Creates a transport with the default timeouts and no extra headers
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_options(
            endpoint,
            HashMap::new(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Creates a transport from an endpoint configuration
    pub fn from_config(config: &EndpointConfig) -> Result<Self, FetchError> {
        Self::with_options(
            config.endpoint.clone(),
            config.headers.clone(),
            config.timeout(),
            config.connect_timeout(),
        )
    }

    fn with_options(
        endpoint: impl Into<String>,
        headers: HashMap<String, String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            headers,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn post(&self, request: &GraphQLRequest) -> Result<String, FetchError> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "HTTP error response");
            return Err(FetchError::Http(status.as_u16(), body));
        }

        Ok(body)
    }
}
