//! Inbound listener settings.

use crate::config::{get_env, get_env_parse};
use crate::error::{Result, UtilsError};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Host and port the skill endpoint binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| UtilsError::ServerError(format!("Invalid socket address: {}", e)))
    }

    /// Override host and port from `<prefix>HOST` / `<prefix>PORT`. A port
    /// that is set but not a number is a config error.
    pub fn with_env(mut self, prefix: &str) -> Result<Self> {
        if let Ok(host) = get_env(&format!("{}HOST", prefix)) {
            self.host = host;
        }
        let port_key = format!("{}PORT", prefix);
        if std::env::var_os(&port_key).is_some() {
            self.port = get_env_parse(&port_key)?;
        }
        Ok(self)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(default_host(), default_port())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
