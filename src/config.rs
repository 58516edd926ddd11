//! Environment-driven server configuration.
//!
//! Values are read from the process environment (after `.env` is loaded by
//! [`crate::run`]) and fall back to the defaults below when unset.

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_EDITOR_URL: &str = "https://buildez.ai";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MCP_MODE must be 'stdio' or 'http', got '{0}'")]
    InvalidMode(String),
    #[error("MCP_PORT must be a port number, got '{0}'")]
    InvalidPort(String),
}

/// Which transport front-end the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Stdio,
    Http,
}

impl FromStr for TransportMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::InvalidMode(value.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the Buildez API, without a trailing slash.
    pub api_url: String,
    /// Origin used when composing editor links.
    pub editor_url: String,
    pub mode: TransportMode,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            editor_url: DEFAULT_EDITOR_URL.to_string(),
            mode: TransportMode::Stdio,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("BUILDEZ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let editor_url =
            env::var("BUILDEZ_EDITOR_URL").unwrap_or_else(|_| DEFAULT_EDITOR_URL.to_string());

        let mode = match env::var("MCP_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => TransportMode::default(),
        };

        let port = match env::var("MCP_PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            editor_url: editor_url.trim_end_matches('/').to_string(),
            mode,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["BUILDEZ_API_URL", "BUILDEZ_EDITOR_URL", "MCP_MODE", "MCP_PORT"];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.mode, TransportMode::Stdio);
        assert_eq!(config.port, 3001);
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        env::set_var("BUILDEZ_API_URL", "http://api.internal:4000/");
        env::set_var("MCP_MODE", "HTTP");
        env::set_var("MCP_PORT", "8081");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://api.internal:4000");
        assert_eq!(config.mode, TransportMode::Http);
        assert_eq!(config.port, 8081);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_rejects_bad_values() {
        clear_env();
        env::set_var("MCP_MODE", "websocket");
        assert_eq!(
            ServerConfig::from_env(),
            Err(ConfigError::InvalidMode("websocket".to_string()))
        );

        env::remove_var("MCP_MODE");
        env::set_var("MCP_PORT", "not-a-port");
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::InvalidPort(_))
        ));

        clear_env();
    }
}
