//! Event model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::identity::{token_of, IdToken, RawId};
use super::lenient::{lenient_option, lenient_string, lenient_vec, lenient_or_default};
use crate::utils::helpers::normalize_label;

/// Lifecycle status of an event, normalized on ingestion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventStatus {
    Current,
    Passed,
    /// Any label the client does not know, kept in normalized form
    Other(String),
    #[default]
    Unknown,
}

impl EventStatus {
    pub fn parse(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "current" => EventStatus::Current,
            "passed" => EventStatus::Passed,
            "" => EventStatus::Unknown,
            other => EventStatus::Other(other.to_string()),
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, EventStatus::Current)
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Current => "current",
            EventStatus::Passed => "passed",
            EventStatus::Other(label) => label,
            EventStatus::Unknown => "",
        }
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_string(deserializer)?
            .map(|label| EventStatus::parse(&label))
            .unwrap_or_default())
    }
}

impl Serialize for EventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Role of a user within an event roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRole {
    Organizer,
    Participant,
    Other(String),
}

impl ParticipantRole {
    pub fn parse(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "organizer" => ParticipantRole::Organizer,
            "participant" => ParticipantRole::Participant,
            other => ParticipantRole::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ParticipantRole::Organizer => "organizer",
            ParticipantRole::Participant => "participant",
            ParticipantRole::Other(label) => label,
        }
    }
}

impl<'de> Deserialize<'de> for ParticipantRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ParticipantRole::parse(&lenient_string(deserializer)?.unwrap_or_default()))
    }
}

impl Serialize for ParticipantRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Reference to a platform user inside another payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default, deserialize_with = "lenient_option")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

impl UserRef {
    pub fn token(&self) -> Option<IdToken> {
        token_of(self.id.as_ref())
    }
}

/// One entry of an event roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    #[serde(default, deserialize_with = "lenient_option")]
    pub user: Option<UserRef>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub role: Option<ParticipantRole>,
}

impl Participation {
    /// Whether this record belongs to the user identified by `token`
    pub fn matches(&self, token: &IdToken) -> bool {
        self.user
            .as_ref()
            .and_then(UserRef::token)
            .is_some_and(|candidate| &candidate == token)
    }

    pub fn is_organizer(&self) -> bool {
        matches!(self.role, Some(ParticipantRole::Organizer))
    }
}

/// Event as listed by the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub duration_hours: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, alias = "participants", deserialize_with = "lenient_vec")]
    pub event_participants: Vec<Participation>,
}

impl Event {
    pub fn token(&self) -> Option<IdToken> {
        self.id.token()
    }

    pub fn participants(&self) -> &[Participation] {
        &self.event_participants
    }

    /// Map coordinates, when the event has a non-zero position
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 || lon != 0.0 => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Event summary embedded in a notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(default, deserialize_with = "lenient_option")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(default, alias = "participants", deserialize_with = "lenient_vec")]
    pub event_participants: Vec<Participation>,
}

impl EventSummary {
    pub fn token(&self) -> Option<IdToken> {
        token_of(self.id.as_ref())
    }
}

/// Request body for creating an event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub duration_hours: u32,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
}

/// Banner image uploaded before an event is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
}

impl NewEvent {
    /// Events must be scheduled at least one day ahead
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title is required".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Event category is required".to_string());
        }
        if self.duration_hours == 0 {
            return Err("Event duration must be at least one hour".to_string());
        }
        if self.date_time < now + Duration::days(1) {
            return Err("Event must start at least one day from now".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_is_case_insensitive() {
        let event: Event = serde_json::from_value(json!({"id": 1, "status": "CURRENT"})).unwrap();
        assert_eq!(event.status, EventStatus::Current);

        let event: Event = serde_json::from_value(json!({"id": 1, "status": " Passed "})).unwrap();
        assert_eq!(event.status, EventStatus::Passed);
    }

    #[test]
    fn test_unknown_and_missing_status() {
        let event: Event = serde_json::from_value(json!({"id": 1, "status": "draft"})).unwrap();
        assert_eq!(event.status, EventStatus::Other("draft".to_string()));

        let event: Event = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(event.status, EventStatus::Unknown);

        let event: Event = serde_json::from_value(json!({"id": 1, "status": null})).unwrap();
        assert!(!event.status.is_current());
    }

    #[test]
    fn test_missing_participants_become_empty() {
        let event: Event = serde_json::from_value(json!({"id": 1, "status": "current"})).unwrap();
        assert!(event.participants().is_empty());

        let event: Event =
            serde_json::from_value(json!({"id": 1, "eventParticipants": null})).unwrap();
        assert!(event.participants().is_empty());

        let event: Event =
            serde_json::from_value(json!({"id": 1, "eventParticipants": "oops"})).unwrap();
        assert!(event.participants().is_empty());
    }

    #[test]
    fn test_malformed_participation_records_degrade() {
        let event: Event = serde_json::from_value(json!({
            "id": 1,
            "eventParticipants": [
                {"user": {"id": 7}, "role": "ORGANIZER"},
                {"user": "not-an-object", "role": 3},
                {"role": "participant"},
                42
            ]
        }))
        .unwrap();

        let participants = event.participants();
        assert_eq!(participants.len(), 3);
        assert!(participants[0].is_organizer());
        assert!(participants[1].user.is_none());
        assert_eq!(participants[1].role, Some(ParticipantRole::Other("3".to_string())));
        assert!(participants[2].user.is_none());
    }

    #[test]
    fn test_missing_id_and_bad_title_degrade() {
        let event: Event = serde_json::from_value(json!({"title": ["x"], "status": "current"})).unwrap();
        assert_eq!(event.token(), None);
        assert!(event.title.is_empty());
        assert!(event.status.is_current());
    }

    #[test]
    fn test_participants_alias() {
        let event: Event = serde_json::from_value(json!({
            "id": "abc",
            "participants": [{"user": {"id": "7"}, "role": "participant"}]
        }))
        .unwrap();
        assert!(event.participants()[0].matches(&IdToken::new("7")));
    }

    #[test]
    fn test_coordinates() {
        let event: Event =
            serde_json::from_value(json!({"id": 1, "latitude": 0, "longitude": 0})).unwrap();
        assert_eq!(event.coordinates(), None);

        let event: Event =
            serde_json::from_value(json!({"id": 1, "latitude": 43.7, "longitude": -79.42})).unwrap();
        assert_eq!(event.coordinates(), Some((43.7, -79.42)));
    }

    #[test]
    fn test_new_event_validation() {
        let now = Utc::now();
        let mut event = NewEvent {
            title: "Park cleanup".to_string(),
            description: String::new(),
            location: "High Park".to_string(),
            date_time: now + Duration::days(2),
            duration_hours: 3,
            image_url: None,
            latitude: 0.0,
            longitude: 0.0,
            category: "Environment".to_string(),
        };
        assert!(event.validate(now).is_ok());

        event.date_time = now + Duration::hours(2);
        assert!(event.validate(now).is_err());

        event.date_time = now + Duration::days(2);
        event.title = "  ".to_string();
        assert!(event.validate(now).is_err());
    }

    #[test]
    fn test_new_event_serializes_camel_case() {
        let event = NewEvent {
            title: "Tutoring".to_string(),
            description: "Math help".to_string(),
            location: "Library".to_string(),
            date_time: Utc::now(),
            duration_hours: 2,
            image_url: Some("uploads/banner.png".to_string()),
            latitude: 1.0,
            longitude: 2.0,
            category: "Education".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("dateTime").is_some());
        assert_eq!(value["durationHours"], json!(2));
        assert_eq!(value["imageUrl"], json!("uploads/banner.png"));
    }
}
