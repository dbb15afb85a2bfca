//! Shared plumbing for the on-call skill.
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//! an outbound HTTP client, configuration loading, and listener settings.
//!
//! # Modules
//!
//! ## Client (`client`)
//!
//! A thin wrapper over `reqwest` that applies default headers and maps
//! transport failures into [`UtilsError`]:
//!
//! ```rust,ignore
//! use utils::client::{AuthHelper, ClientConfig, HttpClient};
//! use std::time::Duration;
//!
//! let config = ClientConfig::new()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_header("Accept", "application/vnd.pagerduty+json;version=2.0");
//!
//! let client = HttpClient::new(config)?;
//! let request = client
//!     .get("https://api.pagerduty.com/users/me")
//!     .header("Authorization", AuthHelper::bearer_token(token));
//! let response = client.send(request).await?;
//! ```
//!
//! ## Config (`config`)
//!
//! Environment variable helpers and file loading by extension:
//!
//! ```rust,ignore
//! use utils::config::{get_env, load_config_file};
//!
//! let root = get_env("ONCALL_SKILL_API_ROOT")?;
//! let config: SkillConfig = load_config_file("oncall-skill.toml")?;
//! ```
//!
//! ## Server (`server`)
//!
//! Host/port settings for the inbound listener.
//!
//! # Features
//!
//! - `server` - Listener settings (enabled by default)
//! - `client` - Outbound HTTP client (enabled by default)
//! - `config` - Configuration helpers (enabled by default)

pub mod error;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "config")]
pub mod config;

// Re-export commonly used types
pub use error::{Result, UtilsError};

#[cfg(feature = "server")]
pub use server::ServerConfig;

#[cfg(feature = "client")]
pub use client::{AuthHelper, ClientConfig, HttpClient};

#[cfg(feature = "config")]
pub use config::{
    get_env, get_env_parse, load_config_file, load_json_config, load_toml_config,
    load_yaml_config, FromEnv, ValidateConfig,
};
