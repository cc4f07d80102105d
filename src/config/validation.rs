//! Configuration validation module
//!
//! This module provides validation functions for client configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{VolunteerHubError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;
    validate_features_config(&settings.features)?;

    Ok(())
}

/// Validate platform API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(VolunteerHubError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(VolunteerHubError::Config(
            format!("API base URL must use http or https, got: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(VolunteerHubError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate session credentials
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    match (&config.email, &config.password) {
        (Some(_), None) | (None, Some(_)) => Err(VolunteerHubError::Config(
            "Session email and password must be configured together".to_string()
        )),
        (Some(email), Some(_)) if email.trim().is_empty() => Err(VolunteerHubError::Config(
            "Session email cannot be empty".to_string()
        )),
        _ => Ok(()),
    }
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(VolunteerHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(VolunteerHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate feature flags
fn validate_features_config(config: &super::FeaturesConfig) -> Result<()> {
    if config.snippet_length == 0 {
        return Err(VolunteerHubError::Config(
            "Snippet length must be greater than 0".to_string()
        ));
    }

    Ok(())
}
