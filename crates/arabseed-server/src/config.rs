//! Server settings
//!
//! Read once at startup from `ARABSEED_*` environment variables.

use std::time::Duration;

use arabseed_core::{ClientConfig, Endpoints};

use crate::error::ConfigError;

/// Settings of the HTTP server and the scraper behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (default: 0.0.0.0)
    pub host: String,
    /// Port to bind (default: 8000)
    pub port: u16,
    /// Verbose logging (default: true)
    pub debug: bool,
    /// Upstream request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// Upstream site, e.g. a mirror domain (default: the main site)
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            debug: true,
            timeout_secs: 10,
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` when a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("ARABSEED_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "ARABSEED_PORT")?.unwrap_or(defaults.port),
            debug: match lookup("ARABSEED_DEBUG") {
                Some(value) => parse_bool("ARABSEED_DEBUG", &value)?,
                None => defaults.debug,
            },
            timeout_secs: parse_var(&lookup, "ARABSEED_TIMEOUT")?.unwrap_or(defaults.timeout_secs),
            base_url: lookup("ARABSEED_BASE_URL").filter(|url| !url.trim().is_empty()),
        })
    }

    /// Client settings for the scraper
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_timeout_secs(self.timeout_secs)
    }

    /// Upstream layout for the scraper
    pub fn endpoints(&self) -> Endpoints {
        match &self.base_url {
            Some(base_url) => Endpoints::with_base_url(base_url.clone()),
            None => Endpoints::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        None => Ok(None),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
