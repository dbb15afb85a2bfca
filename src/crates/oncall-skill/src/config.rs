//! Skill configuration: file first, then environment overrides.

use chrono_tz::Tz;
use pagerduty::PagerDutyConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use utils::config::{get_env, get_env_parse, load_config_file, FromEnv, ValidateConfig};
use utils::{Result, ServerConfig, UtilsError};

/// Prefix for environment overrides, e.g. `ONCALL_SKILL_PORT`.
pub const ENV_PREFIX: &str = "ONCALL_SKILL_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Skill id requests must be addressed to. Unchecked when unset.
    #[serde(default)]
    pub application_id: Option<String>,

    #[serde(flatten)]
    pub pagerduty: PagerDutyConfig,

    /// PagerDuty API key used when a request carries no linked token.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// IANA zone used to read date slots.
    #[serde(default = "default_time_zone")]
    pub default_time_zone: String,

    /// Page size for user searches.
    #[serde(default = "default_user_search_limit")]
    pub user_search_limit: u32,

    #[serde(default)]
    pub server: ServerConfig,
}

impl SkillConfig {
    /// Load from `path` if given, apply `ONCALL_SKILL_*` overrides, and
    /// validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => load_config_file(path)?,
            None => SkillConfig::default(),
        };

        let config = config.apply_env(ENV_PREFIX)?;
        config.validate()?;
        Ok(config)
    }

    pub fn time_zone(&self) -> Result<Tz> {
        self.default_time_zone.parse::<Tz>().map_err(|_| {
            UtilsError::ConfigError(format!("Unknown time zone '{}'", self.default_time_zone))
        })
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            application_id: None,
            pagerduty: PagerDutyConfig::default(),
            api_key: None,
            default_time_zone: default_time_zone(),
            user_search_limit: default_user_search_limit(),
            server: ServerConfig::default(),
        }
    }
}

impl FromEnv for SkillConfig {
    fn apply_env(mut self, prefix: &str) -> Result<Self> {
        let var = |name: &str| get_env(&format!("{}{}", prefix, name)).ok();

        if let Some(id) = var("APPLICATION_ID") {
            self.application_id = Some(id);
        }
        if let Some(root) = var("API_ROOT") {
            self.pagerduty.api_root = root;
        }
        if let Some(key) = var("API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(tz) = var("DEFAULT_TIME_ZONE") {
            self.default_time_zone = tz;
        }
        if var("USER_SEARCH_LIMIT").is_some() {
            self.user_search_limit = get_env_parse(&format!("{}USER_SEARCH_LIMIT", prefix))?;
        }
        if var("HTTP_TIMEOUT_SECS").is_some() {
            let secs: u64 = get_env_parse(&format!("{}HTTP_TIMEOUT_SECS", prefix))?;
            self.pagerduty.http.timeout = Duration::from_secs(secs);
        }

        self.server = self.server.with_env(prefix)?;
        Ok(self)
    }
}

impl ValidateConfig for SkillConfig {
    fn validate(&self) -> Result<()> {
        self.time_zone()?;

        if self.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            return Err(UtilsError::ConfigError("api_key must not be empty".to_string()));
        }

        if self.user_search_limit == 0 {
            return Err(UtilsError::ConfigError(
                "user_search_limit must be at least 1".to_string(),
            ));
        }

        let root = &self.pagerduty.api_root;
        if !(root.starts_with("https://") || root.starts_with("http://")) {
            return Err(UtilsError::ConfigError(format!(
                "api_root must be an http(s) URL, got '{}'",
                root
            )));
        }

        Ok(())
    }
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

fn default_user_search_limit() -> u32 {
    5
}
