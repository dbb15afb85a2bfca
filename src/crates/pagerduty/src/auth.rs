//! Per-request credentials.

use std::fmt;
use utils::AuthHelper;

/// Secret used to authorize one caller's API calls.
///
/// Never stored on the client; callers hand it to every [`crate::OnCallApi`]
/// method.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// OAuth access token from account linking.
    OAuth(String),
    /// REST API key.
    ApiKey(String),
}

impl Credentials {
    /// Credentials for an OAuth access token.
    pub fn oauth(token: impl Into<String>) -> Self {
        Credentials::OAuth(token.into())
    }

    /// Credentials for a REST API key.
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(key.into())
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        match self {
            Credentials::OAuth(token) => AuthHelper::bearer_token(token),
            Credentials::ApiKey(key) => AuthHelper::api_token(key),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::OAuth(_) => f.write_str("Credentials::OAuth(<redacted>)"),
            Credentials::ApiKey(_) => f.write_str("Credentials::ApiKey(<redacted>)"),
        }
    }
}
