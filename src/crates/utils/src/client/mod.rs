//! Outbound HTTP client.
//!
//! Requests are sent exactly once; there is no retry policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use utils::client::{ClientConfig, HttpClient};
//!
//! let config = ClientConfig::new()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("oncall-skill/0.1");
//!
//! let client = HttpClient::new(config)?;
//! ```

use crate::error::{Result, UtilsError};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for the outbound HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// User agent string.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Headers added to every request.
    #[serde(skip)]
    pub default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    pub fn new() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: None,
            default_headers: Vec::new(),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a default header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

/// HTTP client that stamps default headers on every request.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| UtilsError::ClientError(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Start a GET request with the default headers applied.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Start a request with the given method and the default headers applied.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key, value);
        }

        req
    }

    /// Send a prepared request once.
    ///
    /// Non-2xx responses are returned as-is; only transport failures are errors.
    pub async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let response = req.send().await?;
        debug!(status = %response.status(), url = %response.url(), "HTTP response");
        Ok(response)
    }
}

/// Helper for building `Authorization` header values.
pub struct AuthHelper;

impl AuthHelper {
    /// OAuth bearer token, as issued through account linking.
    pub fn bearer_token(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// PagerDuty REST API key.
    pub fn api_token(token: &str) -> String {
        format!("Token token={}", token)
    }
}
