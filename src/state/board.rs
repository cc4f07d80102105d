//! Per-view event context
//!
//! An [`EventBoard`] replaces the process-wide session holder: every view
//! owns one, fills it from a fetch and drops it when the view goes away.

use crate::models::{CurrentUser, Event, IdToken};
use crate::services::participation::{resolve_membership, DerivedMembership};
use crate::utils::helpers::matches_search;

/// Events and identity a single view renders from
#[derive(Debug, Clone, Default)]
pub struct EventBoard {
    events: Vec<Event>,
    current_user: Option<CurrentUser>,
    revision: u64,
}

impl EventBoard {
    pub fn new(events: Vec<Event>, current_user: Option<CurrentUser>) -> Self {
        Self {
            events,
            current_user,
            revision: 0,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    /// Bumped on every refresh; memberships derived under an older
    /// revision are stale and must be recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn find(&self, event_id: &IdToken) -> Option<&Event> {
        self.events
            .iter()
            .find(|event| event.token().as_ref() == Some(event_id))
    }

    pub fn membership(&self, event: &Event) -> DerivedMembership {
        resolve_membership(event, self.current_user.as_ref())
    }

    /// Membership of every event, in listing order
    pub fn memberships(&self) -> Vec<(&Event, DerivedMembership)> {
        self.events
            .iter()
            .map(|event| (event, self.membership(event)))
            .collect()
    }

    /// Events whose title contains `term`, case-insensitively
    pub fn search(&self, term: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| matches_search(&event.title, term))
            .collect()
    }

    /// Events that are still open
    pub fn current_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.status.is_current())
            .collect()
    }

    /// First event with a map position among the search results
    pub fn map_center(&self, term: &str) -> Option<(f64, f64)> {
        self.search(term).into_iter().find_map(Event::coordinates)
    }

    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.revision += 1;
    }

    pub fn replace_user(&mut self, current_user: Option<CurrentUser>) {
        self.current_user = current_user;
        self.revision += 1;
    }

    /// Keep only events that are still open
    pub fn retain_current(&mut self) {
        self.events.retain(|event| event.status.is_current());
    }
}
