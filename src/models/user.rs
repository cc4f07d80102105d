//! User model

use serde::{Deserialize, Serialize};

use super::identity::{token_of, IdToken, RawId};
use super::lenient::{lenient_option, lenient_string, lenient_vec, lenient_or_default};

/// The signed-in user as reported by the session check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default, deserialize_with = "lenient_option")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn with_id(id: impl Into<RawId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Identity token; `None` means the user is anonymous
    pub fn token(&self) -> Option<IdToken> {
        token_of(self.id.as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Token of a possibly absent user; anonymous users have none
pub fn identity_of(user: Option<&CurrentUser>) -> Option<IdToken> {
    user.and_then(CurrentUser::token)
}

/// Event entry listed on the account page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEvent {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub duration_hours: Option<f64>,
}

/// Account profile with volunteering statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lvl_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub lvl_in_app: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub hours_volunteered: f64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub events_completed: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub impact_score: f64,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub upcoming_events: Vec<ProfileEvent>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub past_events: Vec<ProfileEvent>,
}

impl Profile {
    /// Upper-cased first letter of the username, used for the avatar
    pub fn initial(&self) -> Option<String> {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }

    /// Hours summed over past events that report a duration
    pub fn past_hours(&self) -> f64 {
        self.past_events
            .iter()
            .filter_map(|event| event.duration_hours)
            .sum()
    }
}
