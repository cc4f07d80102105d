//! Notification triage service
//!
//! Couples the [`TriageState`] machine with the notification endpoints.
//! Mutations take `&mut self`, so a view cannot start a second read or
//! delete while one is still outstanding.

use std::sync::Arc;

use tracing::debug;

use crate::models::{IdToken, Notification, UserRef};
use crate::state::triage::{self, FilterMode, TriageState};
use crate::utils::errors::{ApiError, ApiResult, TriageError};
use crate::utils::helpers::truncate_text;
use crate::utils::logging::log_notification_action;
use super::api::NotificationApi;

/// Default length of list-item previews
pub const DEFAULT_SNIPPET_LENGTH: usize = 50;

/// Notification view state bound to the platform API
pub struct NotificationTriage {
    api: Arc<dyn NotificationApi>,
    state: TriageState,
    snippet_length: usize,
}

impl NotificationTriage {
    /// Wrap an already fetched collection
    pub fn new(api: Arc<dyn NotificationApi>, notifications: Vec<Notification>) -> Self {
        Self {
            api,
            state: TriageState::new(notifications),
            snippet_length: DEFAULT_SNIPPET_LENGTH,
        }
    }

    /// Fetch the collection for a freshly activated view
    pub async fn load(api: Arc<dyn NotificationApi>) -> ApiResult<Self> {
        let notifications = api.fetch_notifications().await?;
        Ok(Self::new(api, notifications))
    }

    /// Set the preview length used by `snippet`
    pub fn with_snippet_length(mut self, snippet_length: usize) -> Self {
        self.snippet_length = snippet_length;
        self
    }

    /// Re-fetch the authoritative collection, keeping filter and selection
    pub async fn reload(&mut self) -> ApiResult<()> {
        let notifications = self.api.fetch_notifications().await?;
        self.state.replace_all(notifications);
        Ok(())
    }

    /// Get the underlying filter and selection state
    pub fn state(&self) -> &TriageState {
        &self.state
    }

    /// Get the active filter
    pub fn filter_mode(&self) -> FilterMode {
        self.state.filter_mode()
    }

    /// Get the notification open in the detail view
    pub fn selected(&self) -> Option<&Notification> {
        self.state.selected()
    }

    /// Switch filters; leaving `ByEvent` clears the selection
    pub fn set_filter(&mut self, mode: FilterMode) {
        debug!(filter = %mode, "Notification filter changed");
        self.state.set_filter(mode);
    }

    /// Open a notification and show its event's notifications
    pub fn select(&mut self, notification: Notification) {
        self.state.select(notification);
    }

    /// Open the loaded notification with the given id, if any
    pub fn select_by_id(&mut self, notification_id: &IdToken) -> bool {
        self.state.select_by_id(notification_id)
    }

    /// Get the notifications shown for the current filter
    pub fn visible_notifications(&self) -> Vec<&Notification> {
        self.state.visible()
    }

    /// Get the number of unread notifications
    pub fn unread_count(&self) -> usize {
        self.state.unread_count()
    }

    /// Get the organizer of the notification's event
    pub fn organizer_of<'a>(&self, notification: &'a Notification) -> Option<&'a UserRef> {
        triage::organizer_of(notification)
    }

    /// Get the sender line, falling back to "Organizer"
    pub fn sender_label(&self, notification: &Notification) -> String {
        triage::sender_label(notification)
    }

    /// List-item preview of the message
    pub fn snippet(&self, notification: &Notification) -> String {
        truncate_text(&notification.message, self.snippet_length)
    }

    /// Mark the selected notification as read.
    ///
    /// The list entry and the selection are only updated after the server
    /// accepted the request; on failure the state is left untouched.
    pub async fn mark_selected_read(&mut self) -> Result<(), TriageError> {
        let notification_id = self.selected_token(TriageError::MarkReadFailed)?;

        match self.api.mark_notification_read(&notification_id).await {
            Ok(()) => {
                self.state.apply_read(&notification_id);
                log_notification_action(notification_id.as_str(), "mark_read", true);
                Ok(())
            }
            Err(e) => {
                log_notification_action(notification_id.as_str(), "mark_read", false);
                Err(TriageError::MarkReadFailed(failure_message(&e)))
            }
        }
    }

    /// Delete the selected notification and clear the selection
    pub async fn delete_selected(&mut self) -> Result<(), TriageError> {
        let notification_id = self.selected_token(TriageError::DeleteFailed)?;

        match self.api.delete_notification(&notification_id).await {
            Ok(()) => {
                self.state.apply_delete(&notification_id);
                log_notification_action(notification_id.as_str(), "delete", true);
                Ok(())
            }
            Err(e) => {
                log_notification_action(notification_id.as_str(), "delete", false);
                Err(TriageError::DeleteFailed(failure_message(&e)))
            }
        }
    }

    /// Id of the selection; a selection without a usable id fails with `unusable`
    fn selected_token(&self, unusable: fn(String) -> TriageError) -> Result<IdToken, TriageError> {
        let selected = self.state.selected().ok_or(TriageError::NothingSelected)?;
        selected
            .token()
            .ok_or_else(|| unusable("Selected notification has no usable id".to_string()))
    }
}

fn failure_message(error: &ApiError) -> String {
    error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}
