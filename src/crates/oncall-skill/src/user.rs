//! Resolving the spoken user into a PagerDuty account.

use crate::context::RequestContext;
use crate::error::{Result, SkillError};
use pagerduty::{OnCallApi, User};
use tracing::{debug, info};

/// Words that mean the caller.
const SELF_WORDS: &[&str] = &["i", "me", "myself"];

/// Who the question is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserReference {
    Myself,
    Named(String),
}

impl UserReference {
    /// Interpret the raw user slot.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw.map(str::trim).filter(|value| !value.is_empty());
        match raw {
            None => Err(SkillError::NoUserSpecified),
            Some(value) if SELF_WORDS.iter().any(|word| value.eq_ignore_ascii_case(word)) => {
                Ok(UserReference::Myself)
            }
            Some(value) => Ok(UserReference::Named(value.to_string())),
        }
    }
}

/// The resolved account the answer is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub user: User,
    /// Whether the account belongs to the caller.
    pub is_caller: bool,
}

impl Subject {
    /// Name to speak, or `None` when the answer is addressed as "you".
    pub fn spoken_name(&self) -> Option<&str> {
        if self.is_caller {
            None
        } else {
            Some(&self.user.name)
        }
    }
}

/// Look up the account behind `reference`.
///
/// The caller is always resolved through the profile endpoint; names go
/// through a search capped at `limit` results.
pub async fn resolve_user(
    api: &dyn OnCallApi,
    ctx: &RequestContext,
    reference: &UserReference,
    limit: u32,
) -> Result<Subject> {
    let credentials = ctx.credentials()?;

    match reference {
        UserReference::Myself => {
            let user = api.current_user(credentials).await?;
            debug!(request_id = %ctx.request_id, user_id = %user.id, "Resolved caller");
            Ok(Subject {
                user,
                is_caller: true,
            })
        }
        UserReference::Named(query) => {
            let page = api.search_users(credentials, query, limit).await?;
            info!(
                request_id = %ctx.request_id,
                query = %query,
                matches = page.users.len(),
                more = page.more,
                "User search"
            );

            if page.more {
                return Err(SkillError::TooManyMatches {
                    query: query.clone(),
                });
            }

            let mut users = page.users;
            match users.len() {
                0 => Err(SkillError::UserNotFound {
                    query: query.clone(),
                }),
                1 => Ok(Subject {
                    user: users.remove(0),
                    is_caller: false,
                }),
                _ => Err(SkillError::AmbiguousUser {
                    query: query.clone(),
                    candidates: users.into_iter().map(|user| user.name).collect(),
                }),
            }
        }
    }
}
