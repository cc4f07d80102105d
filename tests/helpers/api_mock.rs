//! Mock platform API server for testing
//!
//! This module provides a mock HTTP server that simulates the VolunteerHub
//! backend. It uses wiremock to create configurable mock responses.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use VolunteerHub::config::Settings;
use VolunteerHub::services::ApiClient;

/// Mock platform API server
pub struct ApiMockServer {
    pub server: MockServer,
}

impl ApiMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Settings pointing the client at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.server.uri();
        settings.api.timeout_seconds = 5;
        settings
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.settings().api).expect("client builds")
    }

    /// Respond to `verb path` with a JSON body
    pub async fn mock_json(&self, verb: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to `verb path` with a plain-text body
    pub async fn mock_text(&self, verb: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Respond with an empty body
    pub async fn mock_empty(&self, verb: &str, endpoint: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Respond to one request only, then fall through to later mocks
    pub async fn mock_json_once(&self, verb: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Number of requests received for `verb path`
    pub async fn calls(&self, verb: &str, endpoint: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.method.as_str() == verb && req.url.path() == endpoint)
            .count()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
