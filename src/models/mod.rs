//! Data models module
//!
//! This module contains all data structures exchanged with the platform API

pub mod identity;
pub mod lenient;
pub mod user;
pub mod event;
pub mod notification;

// Re-export commonly used models
pub use identity::{IdToken, RawId};
pub use user::{CurrentUser, Profile, ProfileEvent};
pub use event::{Event, EventStatus, EventSummary, ImageUpload, NewEvent, ParticipantRole, Participation, UserRef};
pub use notification::Notification;
