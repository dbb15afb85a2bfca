//! The API seam.

use crate::auth::Credentials;
use crate::error::Result;
use crate::models::{OnCall, OnCallQuery, User, UserPage};
use async_trait::async_trait;

/// Read-only on-call lookups against PagerDuty.
///
/// Implemented over HTTP by [`crate::PagerDutyClient`]; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait OnCallApi: Send + Sync {
    /// The user the credentials belong to.
    async fn current_user(&self, credentials: &Credentials) -> Result<User>;

    /// Free-text user search returning at most `limit` users.
    async fn search_users(
        &self,
        credentials: &Credentials,
        query: &str,
        limit: u32,
    ) -> Result<UserPage>;

    /// On-call entries for one user, in the order PagerDuty returns them.
    async fn list_oncalls(
        &self,
        credentials: &Credentials,
        query: &OnCallQuery,
    ) -> Result<Vec<OnCall>>;
}
