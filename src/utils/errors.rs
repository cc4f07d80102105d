//! Error handling for VolunteerHub
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the VolunteerHub client
#[derive(Error, Debug)]
pub enum VolunteerHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Platform API error: {0}")]
    Api(#[from] ApiError),

    #[error("Notification error: {0}")]
    Triage(#[from] TriageError),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised by the platform API collaborator
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Authentication required: {0}")]
    Authentication(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Message supplied by the server, if the response carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Authentication(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }
}

/// Failures of the notification read/delete mutations.
///
/// None of these leave partial state behind: the triage state is only
/// touched after the server confirmed the mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("No notification is selected")]
    NothingSelected,

    #[error("Failed to mark notification as read: {0}")]
    MarkReadFailed(String),

    #[error("Failed to delete notification: {0}")]
    DeleteFailed(String),
}

/// Result type alias for VolunteerHub operations
pub type Result<T> = std::result::Result<T, VolunteerHubError>;

/// Result type alias for platform API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl VolunteerHubError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            VolunteerHubError::Config(_) => false,
            VolunteerHubError::Api(_) => true,
            VolunteerHubError::Triage(_) => true,
            VolunteerHubError::UrlParse(_) => false,
            VolunteerHubError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VolunteerHubError::Config(_) => ErrorSeverity::Critical,
            VolunteerHubError::UrlParse(_) => ErrorSeverity::Critical,
            VolunteerHubError::Api(ApiError::Authentication(_)) => ErrorSeverity::Warning,
            VolunteerHubError::Triage(_) => ErrorSeverity::Warning,
            VolunteerHubError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
