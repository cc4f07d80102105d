//! Configuration management module
//!
//! This module handles loading and validation of client configuration
//! from TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{Settings, ApiConfig, SessionConfig, LoggingConfig, FeaturesConfig};
