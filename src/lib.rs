//! VolunteerHub client core
//!
//! Client-side logic for the VolunteerHub volunteer-event coordination
//! platform: deriving a user's membership of events, joining events, and
//! triaging event notifications, on top of the platform's HTTP API.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{VolunteerHubError, Result};

// Re-export main components for easy access
pub use services::{ServiceFactory, ParticipationService, NotificationTriage, resolve_membership};
pub use state::{EventBoard, FilterMode, TriageState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
