//! Collaborator interfaces
//!
//! The resolver and the triage never talk HTTP themselves. They depend on
//! these traits, implemented by [`ApiClient`](super::client::ApiClient) in
//! production and by in-memory fakes in tests.

use async_trait::async_trait;
use tracing::info;

use crate::models::{CurrentUser, Event, IdToken, ImageUpload, NewEvent, Notification, Profile};
use crate::utils::errors::ApiResult;

/// Event endpoints of the platform API
#[async_trait]
pub trait EventApi: Send + Sync {
    /// All events visible to the session.
    async fn fetch_events(&self) -> ApiResult<Vec<Event>>;

    /// Events the session user organizes.
    async fn fetch_my_events(&self) -> ApiResult<Vec<Event>>;

    /// Register the session user as a participant. Not idempotent server-side.
    async fn join_event(&self, event_id: &IdToken) -> ApiResult<()>;

    /// Store an event banner; returns the image path to put in `imageUrl`.
    async fn upload_image(&self, image: &ImageUpload) -> ApiResult<String>;

    async fn create_event(&self, event: &NewEvent) -> ApiResult<()>;
}

/// User/session endpoints of the platform API
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fails with `ApiError::Authentication` when no session is open.
    async fn fetch_current_user(&self) -> ApiResult<CurrentUser>;

    async fn fetch_profile(&self) -> ApiResult<Profile>;
}

/// Notification endpoints of the platform API
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn fetch_notifications(&self) -> ApiResult<Vec<Notification>>;

    async fn mark_notification_read(&self, notification_id: &IdToken) -> ApiResult<()>;

    async fn delete_notification(&self, notification_id: &IdToken) -> ApiResult<()>;
}

/// Routing hook of the hosting surface
pub trait Navigator: Send + Sync {
    fn navigate_to_login(&self);
}

/// Navigator for surfaces without routing
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to_login(&self) {}
}

/// Navigator that only records the redirect in the log.
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_to_login(&self) {
        info!("Authentication required, redirecting to login");
    }
}
