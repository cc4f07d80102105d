//! Notification filter and selection state
//!
//! Pure state machine behind the notification view. The filter starts at
//! [`FilterMode::All`]; selecting a notification always moves it to
//! [`FilterMode::ByEvent`], and leaving `ByEvent` clears the selection.

use std::fmt;
use std::str::FromStr;

use crate::models::{IdToken, Notification, UserRef};
use crate::utils::errors::VolunteerHubError;
use crate::utils::helpers::normalize_label;

/// Label shown when a notification's event has no organizer
pub const DEFAULT_SENDER: &str = "Organizer";

/// Which notifications the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Unread,
    ByEvent,
}

impl FromStr for FilterMode {
    type Err = VolunteerHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "all" => Ok(FilterMode::All),
            "unread" => Ok(FilterMode::Unread),
            "byevent" | "by_event" | "by-event" => Ok(FilterMode::ByEvent),
            other => Err(VolunteerHubError::InvalidInput(format!("Unknown filter mode: {}", other))),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Unread => write!(f, "unread"),
            FilterMode::ByEvent => write!(f, "byEvent"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriageState {
    all: Vec<Notification>,
    filter_mode: FilterMode,
    selected: Option<Notification>,
}

impl TriageState {
    /// Create a state over a fetched collection with no filter or selection
    pub fn new(all: Vec<Notification>) -> Self {
        Self {
            all,
            filter_mode: FilterMode::All,
            selected: None,
        }
    }

    /// Get every loaded notification in fetch order
    pub fn notifications(&self) -> &[Notification] {
        &self.all
    }

    /// Get the active filter
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Get the notification open in the detail view
    pub fn selected(&self) -> Option<&Notification> {
        self.selected.as_ref()
    }

    /// Switch filters; anything but `ByEvent` clears the selection
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        if mode != FilterMode::ByEvent {
            self.selected = None;
        }
    }

    /// Open a notification and narrow the list to its event
    pub fn select(&mut self, notification: Notification) {
        self.selected = Some(notification);
        self.filter_mode = FilterMode::ByEvent;
    }

    /// Select the loaded notification with the given id
    pub fn select_by_id(&mut self, notification_id: &IdToken) -> bool {
        let found = self
            .all
            .iter()
            .find(|n| n.token().as_ref() == Some(notification_id))
            .cloned();
        match found {
            Some(notification) => {
                self.select(notification);
                true
            }
            None => false,
        }
    }

    /// Notifications the list shows for the current filter, in fetch order.
    ///
    /// `ByEvent` without a selection shows everything. A selection whose
    /// event carries no id only matches itself.
    pub fn visible(&self) -> Vec<&Notification> {
        match (self.filter_mode, &self.selected) {
            (FilterMode::All, _) | (FilterMode::ByEvent, None) => self.all.iter().collect(),
            (FilterMode::Unread, _) => self.all.iter().filter(|n| !n.read).collect(),
            (FilterMode::ByEvent, Some(selected)) if selected.event.token().is_none() => {
                self.all.iter().filter(|n| n.is(selected)).collect()
            }
            (FilterMode::ByEvent, Some(selected)) => {
                self.all.iter().filter(|n| n.same_event(selected)).collect()
            }
        }
    }

    /// Get the number of unread notifications, regardless of filter
    pub fn unread_count(&self) -> usize {
        self.all.iter().filter(|n| !n.read).count()
    }

    /// Record a confirmed read on both the list entry and the selection
    pub fn apply_read(&mut self, notification_id: &IdToken) {
        for notification in self
            .all
            .iter_mut()
            .filter(|n| n.token().as_ref() == Some(notification_id))
        {
            notification.read = true;
        }
        if let Some(selected) = self.selected.as_mut() {
            if selected.token().as_ref() == Some(notification_id) {
                selected.read = true;
            }
        }
    }

    /// Record a confirmed delete and drop the selection
    pub fn apply_delete(&mut self, notification_id: &IdToken) {
        self.all
            .retain(|n| n.token().as_ref() != Some(notification_id));
        self.selected = None;
    }

    /// Swap in a freshly fetched collection, keeping the filter.
    ///
    /// The selection survives only if it is still present; its copy is
    /// replaced with the fetched one.
    pub fn replace_all(&mut self, all: Vec<Notification>) {
        self.all = all;
        self.selected = self
            .selected
            .take()
            .and_then(|selected| self.all.iter().find(|n| n.is(&selected)).cloned());
    }
}

/// First organizer on the notification's event roster
pub fn organizer_of(notification: &Notification) -> Option<&UserRef> {
    notification.organizer()
}

/// Sender line of the detail view
pub fn sender_label(notification: &Notification) -> String {
    organizer_of(notification)
        .and_then(|user| user.username.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SENDER.to_string())
}
