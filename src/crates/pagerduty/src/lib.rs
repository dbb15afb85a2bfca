//! Minimal PagerDuty REST API (v2) client.
//!
//! Only the three calls needed to answer "who is on call" are covered:
//!
//! - `GET /users/me` - the profile behind the caller's token
//! - `GET /users?query=` - free-text user search with a result cap
//! - `GET /oncalls?user_ids[]=` - on-call entries, optionally inside a window
//!
//! The [`OnCallApi`] trait is the seam consumers program against;
//! [`PagerDutyClient`] is the HTTP implementation. Credentials are passed to
//! every call rather than stored on the client, so one client can serve many
//! callers at once.
//!
//! # Example
//!
//! ```rust,ignore
//! use pagerduty::{Credentials, OnCallApi, OnCallQuery, PagerDutyClient, PagerDutyConfig};
//!
//! let client = PagerDutyClient::new(PagerDutyConfig::default())?;
//! let credentials = Credentials::oauth(token);
//!
//! let me = client.current_user(&credentials).await?;
//! let oncalls = client.list_oncalls(&credentials, &OnCallQuery::for_user(&me.id)).await?;
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use api::OnCallApi;
pub use auth::Credentials;
pub use client::PagerDutyClient;
pub use config::PagerDutyConfig;
pub use error::{PagerDutyError, Result};
pub use models::{OnCall, OnCallQuery, Reference, User, UserPage};
