//! Client configuration.

use serde::{Deserialize, Serialize};
use utils::ClientConfig;

/// Default API root.
pub const DEFAULT_API_ROOT: &str = "https://api.pagerduty.com";

/// Media type selecting REST API v2.
pub const ACCEPT_V2: &str = "application/vnd.pagerduty+json;version=2.0";

/// Configuration for [`crate::PagerDutyClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerDutyConfig {
    /// Base URL for the API, without a trailing path.
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Transport settings.
    #[serde(default)]
    pub http: ClientConfig,
}

impl PagerDutyConfig {
    /// Create a configuration pointing at `api_root`.
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            http: ClientConfig::default(),
        }
    }

    /// Replace the transport settings.
    pub fn with_http(mut self, http: ClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Absolute URL for an API path such as `/oncalls`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_root.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for PagerDutyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ROOT)
    }
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}
