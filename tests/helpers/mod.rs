//! Test helpers module
//!
//! This module provides utilities and helpers for testing the VolunteerHub client.
//! It includes a mock platform API server, in-memory collaborators and test data.

#![allow(dead_code)]

pub mod api_mock;
pub mod fake_api;
pub mod test_data;

pub use api_mock::*;
pub use fake_api::*;
pub use test_data::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}
