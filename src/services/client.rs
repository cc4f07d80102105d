//! Platform API client implementation
//!
//! This client handles HTTP access to the VolunteerHub backend, including
//! the cookie-based session, response status mapping and extraction of
//! server-provided error messages.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::settings::ApiConfig;
use crate::models::lenient::collect_lenient;
use crate::models::{CurrentUser, Event, IdToken, ImageUpload, NewEvent, Notification, Profile};
use crate::utils::errors::{ApiError, ApiResult, Result, VolunteerHubError};
use crate::utils::helpers::resolve_image_url;
use crate::utils::logging::{log_api_error, log_fetch};
use super::api::{EventApi, NotificationApi, UserApi};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the platform API
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .build()
            .map_err(|e| VolunteerHubError::Api(ApiError::Http(e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute address of an uploaded image path such as `/uploads/a.png`
    pub fn image_url(&self, image_path: &str) -> String {
        resolve_image_url(&self.base_url, image_path)
    }

    /// Open a session; the cookie is kept by the client
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<CurrentUser> {
        debug!(email = %email, "Logging in");

        let request = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password });
        self.send(request, "auth/login").await?;

        let user = self.fetch_current_user().await?;
        info!(user_id = ?user.token(), "Session opened");
        Ok(user)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        let request = self.client.post(self.url("/auth/logout")).json(&serde_json::json!({}));
        self.send(request, "auth/logout").await?;
        info!("Session closed");
        Ok(())
    }

    /// Send a request and map non-success statuses to [`ApiError`]
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            log_api_error(endpoint, &e.to_string(), Some("transport"));
            ApiError::Http(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        log_api_error(endpoint, &format!("HTTP {}", status), message.as_deref());

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Authentication(message.unwrap_or_default()));
        }

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.client.get(self.url(path)), path).await?;
        response.json::<T>().await.map_err(|e| {
            warn!(endpoint = path, error = %e, "Failed to decode API response");
            ApiError::InvalidResponse(e.to_string())
        })
    }

    /// Fetch a JSON array, skipping elements that do not fit `T`
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let items: Vec<serde_json::Value> = self.get_json(path).await?;
        let (kept, skipped) = collect_lenient(items);
        if skipped > 0 {
            warn!(endpoint = path, skipped = skipped, "Skipped malformed items in API response");
        }
        Ok(kept)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers either with a bare string, a JSON string, or a JSON
/// object carrying `message` or `error`.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text),
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Image path returned by the upload endpoint, as plain text or a JSON string
fn extract_upload_path(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let path = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(_) => return None,
        Err(_) => trimmed.to_string(),
    };
    if path.trim().is_empty() {
        None
    } else {
        Some(path)
    }
}

fn encode(id: &IdToken) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

#[async_trait]
impl EventApi for ApiClient {
    async fn fetch_events(&self) -> ApiResult<Vec<Event>> {
        let events: Vec<Event> = self.get_list("/events").await?;
        log_fetch("events", events.len());
        Ok(events)
    }

    async fn fetch_my_events(&self) -> ApiResult<Vec<Event>> {
        let events: Vec<Event> = self.get_list("/events/my-events").await?;
        log_fetch("my-events", events.len());
        Ok(events)
    }

    async fn join_event(&self, event_id: &IdToken) -> ApiResult<()> {
        let path = format!("/events/{}/participants", encode(event_id));
        let request = self.client.post(self.url(&path)).json(&serde_json::json!({}));
        self.send(request, &path).await?;
        Ok(())
    }

    async fn upload_image(&self, image: &ImageUpload) -> ApiResult<String> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        let form = Form::new().part("file", part);

        let path = "/events/upload-image";
        let response = self.send(self.client.post(self.url(path)).multipart(form), path).await?;
        let body = response.text().await?;
        let image_path = extract_upload_path(&body)
            .ok_or_else(|| ApiError::InvalidResponse("Upload response carried no image path".to_string()))?;

        debug!(file_name = %image.file_name, image_path = %image_path, "Event image uploaded");
        Ok(image_path)
    }

    async fn create_event(&self, event: &NewEvent) -> ApiResult<()> {
        let request = self.client.post(self.url("/events")).json(event);
        self.send(request, "/events").await?;
        Ok(())
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn fetch_current_user(&self) -> ApiResult<CurrentUser> {
        self.get_json("/auth/check-auth").await
    }

    async fn fetch_profile(&self) -> ApiResult<Profile> {
        self.get_json("/auth/profile").await
    }
}

#[async_trait]
impl NotificationApi for ApiClient {
    async fn fetch_notifications(&self) -> ApiResult<Vec<Notification>> {
        let notifications: Vec<Notification> = self.get_list("/notifications").await?;
        log_fetch("notifications", notifications.len());
        Ok(notifications)
    }

    async fn mark_notification_read(&self, notification_id: &IdToken) -> ApiResult<()> {
        let path = format!("/notifications/{}/read", encode(notification_id));
        let request = self.client.put(self.url(&path)).json(&serde_json::json!({}));
        self.send(request, &path).await?;
        Ok(())
    }

    async fn delete_notification(&self, notification_id: &IdToken) -> ApiResult<()> {
        let path = format!("/notifications/{}", encode(notification_id));
        self.send(self.client.delete(self.url(&path)), &path).await?;
        Ok(())
    }
}
