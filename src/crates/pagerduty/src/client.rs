//! HTTP implementation of [`OnCallApi`].

use crate::api::OnCallApi;
use crate::auth::Credentials;
use crate::config::{PagerDutyConfig, ACCEPT_V2};
use crate::error::{PagerDutyError, Result};
use crate::models::{OnCall, OnCallList, OnCallQuery, User, UserEnvelope, UserPage};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use utils::HttpClient;

/// PagerDuty REST API client.
#[derive(Debug, Clone)]
pub struct PagerDutyClient {
    config: PagerDutyConfig,
    http: HttpClient,
}

impl PagerDutyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PagerDutyConfig) -> Result<Self> {
        let http_config = config.http.clone().with_header(ACCEPT.as_str(), ACCEPT_V2);
        let http = HttpClient::new(http_config)?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &PagerDutyConfig {
        &self.config
    }

    /// GET `path` and decode the JSON body.
    ///
    /// Non-2xx responses are logged with their body and returned as errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.config.url(path);
        debug!(url = %url, ?params, "PagerDuty request");

        let request = self
            .http
            .get(&url)
            .query(params)
            .header(AUTHORIZATION, credentials.authorization());

        let response = self.http.send(request).await.map_err(|e| {
            error!(url = %url, error = %e, "PagerDuty request failed");
            PagerDutyError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "PagerDuty returned an error");

            return Err(if status.as_u16() == 401 {
                PagerDutyError::Unauthorized(body)
            } else {
                PagerDutyError::Api {
                    status: status.as_u16(),
                    body,
                }
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PagerDutyError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl OnCallApi for PagerDutyClient {
    async fn current_user(&self, credentials: &Credentials) -> Result<User> {
        let envelope: UserEnvelope = self.get_json(credentials, "/users/me", &[]).await?;
        Ok(envelope.user)
    }

    async fn search_users(
        &self,
        credentials: &Credentials,
        query: &str,
        limit: u32,
    ) -> Result<UserPage> {
        let params = [("query", query.to_string()), ("limit", limit.to_string())];
        self.get_json(credentials, "/users", &params).await
    }

    async fn list_oncalls(
        &self,
        credentials: &Credentials,
        query: &OnCallQuery,
    ) -> Result<Vec<OnCall>> {
        let list: OnCallList = self
            .get_json(credentials, "/oncalls", &query.to_params())
            .await?;
        Ok(list.oncalls)
    }
}
