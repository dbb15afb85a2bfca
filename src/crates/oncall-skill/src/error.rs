//! Request-terminating errors and what the caller hears for each.
//!
//! Every variant ends the request. None is retried, and no partial answer is
//! ever spoken: the caller gets either a complete sentence or the apology from
//! [`SkillError::speech`].

use crate::speech::{BreakStrength, Speech};
use pagerduty::PagerDutyError;
use thiserror::Error;

/// Result type for skill operations.
pub type Result<T> = std::result::Result<T, SkillError>;

/// Spoken when something outside the caller's control failed.
pub const GENERIC_APOLOGY: &str = "Oops! Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum SkillError {
    /// The user slot was empty.
    #[error("no user specified")]
    NoUserSpecified,

    /// The search returned nobody.
    #[error("no user matches {query:?}")]
    UserNotFound { query: String },

    /// The search has more results than one page.
    #[error("too many users match {query:?}")]
    TooManyMatches { query: String },

    /// The search returned a handful of candidates.
    #[error("{query:?} matches {} users", .candidates.len())]
    AmbiguousUser {
        query: String,
        candidates: Vec<String>,
    },

    /// The platform could not pin the date to a day, week or month.
    #[error("date {value:?} is too general")]
    AmbiguousDate { value: String },

    /// The date had a shape the platform is not expected to send.
    #[error("unexpected date format {value:?}")]
    UnresolvableDate { value: String },

    /// PagerDuty failed or could not be reached.
    #[error("upstream API error: {0}")]
    UpstreamApi(#[from] PagerDutyError),

    /// The platform reported that the session ended abnormally.
    #[error("session ended with error: {reason}")]
    Session { reason: String },

    /// The request carried no access token.
    #[error("account not linked")]
    AccountNotLinked,

    /// The request was addressed to a different skill.
    #[error("request for application {actual:?}, expected {expected}")]
    InvalidApplication {
        expected: String,
        actual: Option<String>,
    },
}

impl SkillError {
    /// What the caller hears.
    pub fn speech(&self) -> Speech {
        match self {
            SkillError::NoUserSpecified => {
                Speech::from_text("Sorry, I didn't understand which user you asked for.")
            }
            SkillError::UserNotFound { query } => {
                quoting("Sorry, I couldn't find the user ", query).text(".")
            }
            SkillError::TooManyMatches { query } => {
                quoting("I found too many users matching ", query)
                    .text(". Please try again with the person's full name.")
            }
            SkillError::AmbiguousUser { query, candidates } => {
                let mut speech =
                    quoting("I found a few users matching ", query).text(". Did you mean ");
                speech.push_list(
                    candidates.iter().map(|name| Speech::new().noun(name)).collect(),
                    "or",
                );
                speech.text("?")
            }
            SkillError::AmbiguousDate { .. } => {
                Speech::from_text("Sorry, I need a more specific date. Please ask again.")
            }
            SkillError::UnresolvableDate { .. } => Speech::from_text(
                "Sorry, I was unable to figure out what date you asked for. Please ask again.",
            ),
            SkillError::AccountNotLinked => Speech::from_text(
                "To find out who is on call, please link your PagerDuty account in the Alexa app.",
            ),
            SkillError::UpstreamApi(_)
            | SkillError::Session { .. }
            | SkillError::InvalidApplication { .. } => Speech::from_text(GENERIC_APOLOGY),
        }
    }

    /// Status PagerDuty answered with, for upstream failures.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            SkillError::UpstreamApi(err) => err.status(),
            _ => None,
        }
    }

    /// PagerDuty refused the credentials.
    pub fn is_rejected_credentials(&self) -> bool {
        matches!(self, SkillError::UpstreamApi(err) if err.is_auth_error())
    }

    /// Errors caused by the caller's phrasing rather than a fault.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            SkillError::UpstreamApi(_)
                | SkillError::Session { .. }
                | SkillError::InvalidApplication { .. }
        )
    }
}

/// `<prefix><weak break>"<query>"`
fn quoting(prefix: &str, query: &str) -> Speech {
    Speech::from_text(prefix)
        .pause(BreakStrength::Weak)
        .text("\"")
        .noun(query)
        .text("\"")
}
