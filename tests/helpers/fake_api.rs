//! In-memory platform API
//!
//! Scriptable collaborators with call counters, used to check which network
//! calls a transition issues.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use VolunteerHub::models::{CurrentUser, Event, IdToken, ImageUpload, NewEvent, Notification, Profile};
use VolunteerHub::services::{EventApi, Navigator, NotificationApi, UserApi};
use VolunteerHub::utils::errors::{ApiError, ApiResult};

/// Scripted failure for one endpoint
#[derive(Debug, Clone)]
pub enum Failure {
    Status(u16, Option<String>),
    Unauthorized,
}

impl Failure {
    fn to_error(&self) -> ApiError {
        match self {
            Failure::Status(status, message) => ApiError::Status {
                status: *status,
                message: message.clone(),
            },
            Failure::Unauthorized => ApiError::Authentication(String::new()),
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    /// Successive responses of `fetch_events`; the last one repeats
    pub events: Mutex<VecDeque<Vec<Event>>>,
    pub my_events: Mutex<Vec<Event>>,
    pub current_user: Mutex<Option<CurrentUser>>,
    pub profile: Mutex<Option<Profile>>,
    pub notifications: Mutex<Vec<Notification>>,

    pub join_failure: Mutex<Option<Failure>>,
    pub events_failure: Mutex<Option<Failure>>,
    pub user_failure: Mutex<Option<Failure>>,
    pub mark_read_failure: Mutex<Option<Failure>>,
    pub delete_failure: Mutex<Option<Failure>>,
    pub upload_failure: Mutex<Option<Failure>>,

    pub fetch_events_calls: AtomicUsize,
    pub fetch_user_calls: AtomicUsize,
    pub join_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub mark_read_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub joined: Mutex<Vec<IdToken>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(self, events: Vec<Event>) -> Self {
        self.events.lock().unwrap().push_back(events);
        self
    }

    pub fn then_events(self, events: Vec<Event>) -> Self {
        self.with_events(events)
    }

    pub fn with_user(self, user: CurrentUser) -> Self {
        *self.current_user.lock().unwrap() = Some(user);
        self
    }

    pub fn with_notifications(self, notifications: Vec<Notification>) -> Self {
        *self.notifications.lock().unwrap() = notifications;
        self
    }

    pub fn fail_join(self, failure: Failure) -> Self {
        *self.join_failure.lock().unwrap() = Some(failure);
        self
    }

    pub fn fail_upload(self, failure: Failure) -> Self {
        *self.upload_failure.lock().unwrap() = Some(failure);
        self
    }

    pub fn fail_events(&self, failure: Failure) {
        *self.events_failure.lock().unwrap() = Some(failure);
    }

    pub fn fail_user(&self, failure: Failure) {
        *self.user_failure.lock().unwrap() = Some(failure);
    }

    pub fn fail_mark_read(&self, failure: Option<Failure>) {
        *self.mark_read_failure.lock().unwrap() = failure;
    }

    pub fn fail_delete(&self, failure: Option<Failure>) {
        *self.delete_failure.lock().unwrap() = failure;
    }

    /// Total number of mutating requests issued
    pub fn mutation_calls(&self) -> usize {
        self.join_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.upload_calls.load(Ordering::SeqCst)
            + self.mark_read_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }

    /// Total number of requests issued
    pub fn total_calls(&self) -> usize {
        self.mutation_calls()
            + self.fetch_events_calls.load(Ordering::SeqCst)
            + self.fetch_user_calls.load(Ordering::SeqCst)
    }
}

fn scripted(failure: &Mutex<Option<Failure>>) -> ApiResult<()> {
    match failure.lock().unwrap().as_ref() {
        Some(failure) => Err(failure.to_error()),
        None => Ok(()),
    }
}

#[async_trait]
impl EventApi for FakeApi {
    async fn fetch_events(&self) -> ApiResult<Vec<Event>> {
        self.fetch_events_calls.fetch_add(1, Ordering::SeqCst);
        scripted(&self.events_failure)?;
        let mut queue = self.events.lock().unwrap();
        if queue.len() > 1 {
            Ok(queue.pop_front().unwrap_or_default())
        } else {
            Ok(queue.front().cloned().unwrap_or_default())
        }
    }

    async fn fetch_my_events(&self) -> ApiResult<Vec<Event>> {
        Ok(self.my_events.lock().unwrap().clone())
    }

    async fn join_event(&self, event_id: &IdToken) -> ApiResult<()> {
        self.join_calls.fetch_add(1, Ordering::SeqCst);
        scripted(&self.join_failure)?;
        self.joined.lock().unwrap().push(event_id.clone());
        Ok(())
    }

    async fn upload_image(&self, image: &ImageUpload) -> ApiResult<String> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        scripted(&self.upload_failure)?;
        Ok(format!("/uploads/{}", image.file_name))
    }

    async fn create_event(&self, event: &NewEvent) -> ApiResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let created: Event = serde_json::from_value(serde_json::json!({
            "id": 100 + self.create_calls.load(Ordering::SeqCst) as i64,
            "title": event.title,
            "imageUrl": event.image_url,
            "status": "current"
        }))
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        self.my_events.lock().unwrap().push(created);
        Ok(())
    }
}

#[async_trait]
impl UserApi for FakeApi {
    async fn fetch_current_user(&self) -> ApiResult<CurrentUser> {
        self.fetch_user_calls.fetch_add(1, Ordering::SeqCst);
        scripted(&self.user_failure)?;
        self.current_user
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::Authentication(String::new()))
    }

    async fn fetch_profile(&self) -> ApiResult<Profile> {
        scripted(&self.user_failure)?;
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::Authentication(String::new()))
    }
}

#[async_trait]
impl NotificationApi for FakeApi {
    async fn fetch_notifications(&self) -> ApiResult<Vec<Notification>> {
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn mark_notification_read(&self, notification_id: &IdToken) -> ApiResult<()> {
        self.mark_read_calls.fetch_add(1, Ordering::SeqCst);
        scripted(&self.mark_read_failure)?;
        for notification in self.notifications.lock().unwrap().iter_mut() {
            if notification.token().as_ref() == Some(notification_id) {
                notification.read = true;
            }
        }
        Ok(())
    }

    async fn delete_notification(&self, notification_id: &IdToken) -> ApiResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        scripted(&self.delete_failure)?;
        self.notifications
            .lock()
            .unwrap()
            .retain(|n| n.token().as_ref() != Some(notification_id));
        Ok(())
    }
}

/// Navigator that counts login redirects
#[derive(Default)]
pub struct RecordingNavigator {
    pub login_redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        self.login_redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to_login(&self) {
        self.login_redirects.fetch_add(1, Ordering::SeqCst);
    }
}
