//! Client configuration
//!
//! Layers, later ones winning:
//! 1. built-in defaults
//! 2. an optional TOML file (`biblio.toml`, or an explicit path)
//! 3. `BIBLIO_`-prefixed environment variables, `__` between sections
//!    (e.g. `BIBLIO_API__BASE_URL`)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Local development endpoint of the collaborator
pub const DEFAULT_BASE_URL: &str = "https://localhost:7299";

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "biblio";

const ENV_PREFIX: &str = "BIBLIO";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    /// Unset leaves the network stack defaults in place
    pub request_timeout_secs: Option<u64>,

    /// Accept self-signed certificates (local HTTPS development only)
    pub accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    pub ttl_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_secs: crate::notify::DEFAULT_TTL_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when not running verbose
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from defaults, file and process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`ClientConfig::load`], reading variables from `env` instead of the process
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notifications.ttl_secs)
    }
}
