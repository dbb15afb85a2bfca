//! Per-request state.

use crate::error::{Result, SkillError};
use crate::platform::RequestEnvelope;
use chrono_tz::Tz;
use pagerduty::Credentials;

/// Everything about the caller that one request needs.
///
/// Built fresh for each inbound envelope and passed down explicitly; the
/// caller's token is never stored anywhere that outlives the request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub locale: String,
    /// Zone used to interpret date slots.
    pub time_zone: Tz,
    credentials: Option<Credentials>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, time_zone: Tz, credentials: Option<Credentials>) -> Self {
        Self {
            request_id: request_id.into(),
            locale: "en-US".to_string(),
            time_zone,
            credentials,
        }
    }

    pub fn from_envelope(envelope: &RequestEnvelope, time_zone: Tz) -> Self {
        let request = &envelope.request;
        Self {
            request_id: request.request_id.clone().unwrap_or_else(|| "unknown".to_string()),
            locale: request.locale.clone().unwrap_or_else(|| "en-US".to_string()),
            time_zone,
            credentials: envelope.access_token().map(Credentials::oauth),
        }
    }

    /// Use `fallback` when the envelope carried no token of its own.
    pub fn or_credentials(mut self, fallback: Option<&Credentials>) -> Self {
        if self.credentials.is_none() {
            self.credentials = fallback.cloned();
        }
        self
    }

    /// Credentials for PagerDuty calls, if the account is linked.
    pub fn credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or(SkillError::AccountNotLinked)
    }
}
