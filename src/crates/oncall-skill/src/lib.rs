//! Voice skill backend answering "who is on call?" from PagerDuty.
//!
//! A request flows through four stages:
//!
//! ```text
//! platform envelope ─→ Intent ─→ DateRange + UserReference ─→ on-call lookup ─→ Speech
//! ```
//!
//! - [`intent`] turns the platform request into a closed [`Intent`] enum.
//! - [`date_range`] resolves the optional date slot into a since/until window.
//! - [`user`] resolves the spoken user into a PagerDuty account.
//! - [`oncall`] fetches and filters on-call entries.
//! - [`compose`] renders the answer as [`speech::Speech`].
//!
//! [`Skill`] ties the stages together and is what the HTTP surface in [`api`]
//! and the `oncall-skill invoke` command call into. Every call to PagerDuty is
//! made with the caller's own credentials carried in a [`RequestContext`];
//! nothing caller-specific outlives the request.

pub mod api;
pub mod compose;
pub mod config;
pub mod context;
pub mod date_range;
pub mod error;
pub mod intent;
pub mod oncall;
pub mod platform;
pub mod skill;
pub mod speech;
pub mod user;

pub use config::SkillConfig;
pub use context::RequestContext;
pub use error::{Result, SkillError};
pub use intent::Intent;
pub use skill::Skill;
