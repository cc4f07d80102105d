//! Utility modules
//!
//! This module contains common utilities used throughout the client,
//! including error handling, logging setup, and label helpers.

pub mod errors;
pub mod logging;
pub mod helpers;

pub use errors::{VolunteerHubError, ApiError, TriageError, Result, ApiResult};
