//! Notification model

use serde::{Deserialize, Serialize};

use super::event::{EventSummary, UserRef};
use super::identity::{IdToken, RawId};
use super::lenient::lenient_or_default;

/// Message sent by an event organizer to its participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub event: EventSummary,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub read: bool,
}

impl Notification {
    pub fn token(&self) -> Option<IdToken> {
        self.id.token()
    }

    /// Whether `other` is the same notification
    pub fn is(&self, other: &Notification) -> bool {
        self.id.same_as(&other.id)
    }

    /// Whether both notifications concern the same event
    pub fn same_event(&self, other: &Notification) -> bool {
        match (self.event.token(), other.event.token()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// First roster entry with the organizer role
    pub fn organizer(&self) -> Option<&UserRef> {
        self.event
            .event_participants
            .iter()
            .find(|participation| participation.is_organizer())
            .and_then(|participation| participation.user.as_ref())
    }
}
