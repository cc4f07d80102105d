//! State management module
//!
//! This module holds the session-scoped view state: the event board and the
//! notification triage state machine

pub mod board;
pub mod triage;

// Re-export commonly used state components
pub use board::EventBoard;
pub use triage::{FilterMode, TriageState, organizer_of, sender_label};
