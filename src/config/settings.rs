//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main client configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

/// Platform API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Credentials used to open a session at startup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
    #[serde(default)]
    pub json: bool,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    #[serde(default = "default_refresh_after_join")]
    pub refresh_after_join: bool,
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

fn default_refresh_after_join() -> bool {
    true
}

fn default_snippet_length() -> usize {
    50
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            refresh_after_join: default_refresh_after_join(),
            snippet_length: default_snippet_length(),
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file plus the environment
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::with_name(path))
    }

    fn from_sources<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_seconds", defaults.api.timeout_seconds as i64)?
            .set_default("api.user_agent", defaults.api.user_agent)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("VOLUNTEERHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::VolunteerHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_seconds: 15,
                user_agent: format!("VolunteerHub-Client/{}", env!("CARGO_PKG_VERSION")),
            },
            session: SessionConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
            features: FeaturesConfig::default(),
        }
    }
}
