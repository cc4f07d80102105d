//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the VolunteerHub client.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{Result, VolunteerHubError};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file appender on drop and must be kept
/// alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| VolunteerHubError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "volunteerhub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| VolunteerHubError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log the outcome of a join attempt
pub fn log_join_attempt(event_id: &str, user_id: Option<&str>, outcome: &str) {
    info!(
        event_id = event_id,
        user_id = user_id,
        outcome = outcome,
        "Join attempt finished"
    );
}

/// Log notification mutations
pub fn log_notification_action(notification_id: &str, action: &str, success: bool) {
    if success {
        info!(
            notification_id = notification_id,
            action = action,
            "Notification action performed"
        );
    } else {
        warn!(
            notification_id = notification_id,
            action = action,
            "Notification action rejected"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a completed collection fetch
pub fn log_fetch(collection: &str, count: usize) {
    debug!(collection = collection, count = count, "Collection fetched");
}
