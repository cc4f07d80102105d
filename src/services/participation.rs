//! Participation resolver
//!
//! Derives a user's membership of an event from the event roster, and runs
//! the join transition against the platform API.
//!
//! Unauthenticated users are never eligible to join (`can_join` is false),
//! but the join action is still offered to them: [`JoinAffordance::LoginRequired`]
//! and [`JoinOutcome::RequiresLogin`] route them to the login screen instead
//! of hiding the action.

use std::sync::Arc;

use futures::future::join;
use tracing::{debug, info, warn};

use crate::models::user::identity_of;
use crate::models::{CurrentUser, Event, IdToken, ImageUpload, NewEvent};
use crate::state::EventBoard;
use crate::utils::errors::{ApiError, ApiResult, Result, VolunteerHubError};
use crate::utils::logging::log_join_attempt;
use super::api::{EventApi, Navigator, UserApi};

/// Message used when the server rejects a join without explanation
pub const GENERIC_JOIN_FAILURE: &str = "Failed to join the event";

/// Membership of one user in one event. Computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedMembership {
    pub is_participant: bool,
    pub is_organizer: bool,
    pub is_member: bool,
    pub can_join: bool,
    pub is_current: bool,
    pub is_authenticated: bool,
}

/// What the event card offers for joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinAffordance {
    /// The event is not open; no join action at all
    Hidden,
    Organizer,
    AlreadyParticipant,
    LoginRequired,
    Available,
}

impl DerivedMembership {
    pub fn join_affordance(&self) -> JoinAffordance {
        if !self.is_current {
            JoinAffordance::Hidden
        } else if self.is_organizer {
            JoinAffordance::Organizer
        } else if self.is_participant {
            JoinAffordance::AlreadyParticipant
        } else if !self.is_authenticated {
            JoinAffordance::LoginRequired
        } else {
            JoinAffordance::Available
        }
    }
}

/// Result of a join attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// The event is not current; nothing was sent
    EventClosed,
    /// No authenticated user; nothing was sent and the navigator was asked
    /// to show the login screen
    RequiresLogin,
    JoinFailed { message: String },
}

impl JoinOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOutcome::Joined => "joined",
            JoinOutcome::EventClosed => "event_closed",
            JoinOutcome::RequiresLogin => "requires_login",
            JoinOutcome::JoinFailed { .. } => "join_failed",
        }
    }

    /// Text to show the user
    pub fn user_message(&self) -> String {
        match self {
            JoinOutcome::Joined => "You have joined the event".to_string(),
            JoinOutcome::EventClosed => "You cannot join an event that has already passed".to_string(),
            JoinOutcome::RequiresLogin => "Please log in to join events".to_string(),
            JoinOutcome::JoinFailed { message } => message.clone(),
        }
    }
}

/// Derive membership of `current_user` in `event`.
///
/// Total over malformed input: missing rosters, users or ids resolve to
/// "not matched". The organizer check only looks at records that already
/// matched the user, so an organizer is always a participant.
pub fn resolve_membership(event: &Event, current_user: Option<&CurrentUser>) -> DerivedMembership {
    let token = identity_of(current_user);
    let is_authenticated = token.is_some();
    let is_current = event.status.is_current();

    let mut is_participant = false;
    let mut is_organizer = false;
    if let Some(token) = &token {
        for participation in event.participants().iter().filter(|p| p.matches(token)) {
            is_participant = true;
            if participation.is_organizer() {
                is_organizer = true;
                break;
            }
        }
    }

    let is_member = is_participant || is_organizer;
    DerivedMembership {
        is_participant,
        is_organizer,
        is_member,
        can_join: is_current && !is_member && is_authenticated,
        is_current,
        is_authenticated,
    }
}

/// Join transition and event-board loading
#[derive(Clone)]
pub struct ParticipationService {
    events: Arc<dyn EventApi>,
    users: Arc<dyn UserApi>,
    navigator: Arc<dyn Navigator>,
    refresh_after_join: bool,
}

impl ParticipationService {
    pub fn new(events: Arc<dyn EventApi>, users: Arc<dyn UserApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            events,
            users,
            navigator,
            refresh_after_join: true,
        }
    }

    pub fn with_refresh_after_join(mut self, refresh: bool) -> Self {
        self.refresh_after_join = refresh;
        self
    }

    /// Fetch all events and the session user for a fresh view
    pub async fn load_board(&self) -> ApiResult<EventBoard> {
        let (events, user) = join(self.events.fetch_events(), self.users.fetch_current_user()).await;
        Ok(EventBoard::new(events?, settle_user(user, None)))
    }

    /// Fetch the organizer's own events that are still open
    pub async fn load_my_board(&self) -> ApiResult<EventBoard> {
        let (events, user) = join(self.events.fetch_my_events(), self.users.fetch_current_user()).await;
        let mut board = EventBoard::new(events?, settle_user(user, None));
        board.retain_current();
        Ok(board)
    }

    /// Run the join transition for `event`.
    ///
    /// Only a current event with an authenticated user reaches the network.
    /// No automatic retry: the server-side join is not idempotent.
    pub async fn attempt_join(&self, event: &Event, current_user: Option<&CurrentUser>) -> JoinOutcome {
        let user_id = identity_of(current_user);
        let event_label = event.token().map(|t| t.to_string()).unwrap_or_default();

        let outcome = if !event.status.is_current() {
            JoinOutcome::EventClosed
        } else if user_id.is_none() {
            self.navigator.navigate_to_login();
            JoinOutcome::RequiresLogin
        } else if let Some(event_id) = event.token() {
            match self.events.join_event(&event_id).await {
                Ok(()) => JoinOutcome::Joined,
                Err(e) => {
                    warn!(event_id = %event_id, error = %e, "Join request rejected");
                    JoinOutcome::JoinFailed {
                        message: e.server_message().unwrap_or(GENERIC_JOIN_FAILURE).to_string(),
                    }
                }
            }
        } else {
            JoinOutcome::JoinFailed {
                message: GENERIC_JOIN_FAILURE.to_string(),
            }
        };

        log_join_attempt(&event_label, user_id.as_ref().map(IdToken::as_str), outcome.as_str());
        outcome
    }

    /// Join an event listed on `board`, then refresh the board from the server
    pub async fn join(&self, board: &mut EventBoard, event_id: &IdToken) -> JoinOutcome {
        let Some(event) = board.find(event_id).cloned() else {
            debug!(event_id = %event_id, "Join requested for an event not on the board");
            return JoinOutcome::JoinFailed {
                message: GENERIC_JOIN_FAILURE.to_string(),
            };
        };

        let outcome = self.attempt_join(&event, board.current_user()).await;
        if outcome == JoinOutcome::Joined && self.refresh_after_join {
            self.refresh(board).await;
        }
        outcome
    }

    /// Replace the board's events and user with authoritative data.
    ///
    /// A failed events fetch keeps the previous list. A user fetch that
    /// reports an authentication failure signs the board out.
    pub async fn refresh(&self, board: &mut EventBoard) {
        let (events, user) = join(self.events.fetch_events(), self.users.fetch_current_user()).await;

        match events {
            Ok(events) => board.replace_events(events),
            Err(e) => warn!(error = %e, "Failed to refresh events, keeping previous list"),
        }

        let previous = board.current_user().cloned();
        board.replace_user(settle_user(user, previous));
        info!(revision = board.revision(), "Event board refreshed");
    }

    /// Create an event and reload the organizer's open events.
    ///
    /// A banner is uploaded first and its path replaces `image_url`; a failed
    /// upload aborts before the event is created.
    pub async fn create_event(&self, event: &NewEvent, banner: Option<&ImageUpload>) -> Result<EventBoard> {
        event
            .validate(chrono::Utc::now())
            .map_err(VolunteerHubError::InvalidInput)?;

        let mut event = event.clone();
        if let Some(banner) = banner {
            event.image_url = Some(self.events.upload_image(banner).await?);
        }

        self.events.create_event(&event).await?;
        info!(title = %event.title, "Event created");
        Ok(self.load_my_board().await?)
    }
}

/// Resolve a user fetch into the identity a board should hold
fn settle_user(user: ApiResult<CurrentUser>, previous: Option<CurrentUser>) -> Option<CurrentUser> {
    match user {
        Ok(user) => Some(user),
        Err(ApiError::Authentication(_)) => None,
        Err(e) => {
            warn!(error = %e, "Failed to fetch current user");
            previous
        }
    }
}
