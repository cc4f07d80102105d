//! Test data helpers for creating test objects
//!
//! This module provides helper functions for building events, users and
//! notifications the way the platform API serializes them.

use serde_json::{json, Value};
use VolunteerHub::models::{CurrentUser, Event, Notification};

/// Build an event from its JSON form
pub fn event_from(value: Value) -> Event {
    serde_json::from_value(value).expect("valid event fixture")
}

/// Build notifications from their JSON form
pub fn notifications_from(value: Value) -> Vec<Notification> {
    serde_json::from_value(value).expect("valid notification fixture")
}

/// Current event organized by user 7
pub fn organized_event() -> Event {
    event_from(json!({
        "id": 1,
        "title": "River Cleanup",
        "status": "current",
        "eventParticipants": [{"user": {"id": 7, "username": "olena"}, "role": "organizer"}]
    }))
}

/// Past event organized by user 7
pub fn passed_event() -> Event {
    event_from(json!({
        "id": 2,
        "title": "Food Drive",
        "status": "passed",
        "eventParticipants": [{"user": {"id": 7}, "role": "organizer"}]
    }))
}

/// Event list as returned by `GET /events`
pub fn events_json() -> Value {
    json!([
        {
            "id": 1,
            "title": "River Cleanup",
            "status": "current",
            "category": "Environment",
            "eventParticipants": [{"user": {"id": 7, "username": "olena"}, "role": "organizer"}]
        },
        {
            "id": 2,
            "title": "Food Drive",
            "status": "PASSED",
            "eventParticipants": [{"user": {"id": 7}, "role": "organizer"}]
        }
    ])
}

/// Event list after user 9 joined event 1
pub fn events_after_join_json() -> Value {
    json!([
        {
            "id": 1,
            "title": "River Cleanup",
            "status": "current",
            "eventParticipants": [
                {"user": {"id": 7, "username": "olena"}, "role": "organizer"},
                {"user": {"id": 9, "username": "taras"}, "role": "participant"}
            ]
        },
        {
            "id": 2,
            "title": "Food Drive",
            "status": "passed",
            "eventParticipants": [{"user": {"id": 7}, "role": "organizer"}]
        }
    ])
}

/// Notifications as returned by `GET /notifications`
pub fn notifications_json() -> Value {
    json!([
        {
            "id": 1,
            "read": false,
            "message": "Please bring gloves and a water bottle, we start at nine sharp near the bridge.",
            "event": {
                "id": 5,
                "title": "River Cleanup",
                "eventParticipants": [{"user": {"id": 7, "username": "olena"}, "role": "organizer"}]
            }
        },
        {
            "id": 2,
            "read": true,
            "message": "Thanks for coming!",
            "event": {"id": 5, "title": "River Cleanup"}
        },
        {
            "id": 3,
            "read": false,
            "message": "Room changed to 204",
            "event": {"id": 6, "title": "Tutoring"}
        }
    ])
}

pub fn user(id: i64) -> CurrentUser {
    CurrentUser::with_id(id)
}
