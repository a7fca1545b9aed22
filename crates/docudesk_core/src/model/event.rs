//! User calendar event model.
//!
//! # Responsibility
//! - Define the ad hoc event record added from the calendar form.
//!
//! # Invariants
//! - Events are append-only; no edit or delete operation exists.
//! - `date` is a `YYYY-MM-DD` literal matching calendar cell keys.

use serde::{Deserialize, Serialize};

/// One user-authored calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    /// Calendar day this entry belongs to, as a `YYYY-MM-DD` literal.
    pub date: String,
    /// Free-form description shown in the day cell.
    pub text: String,
}

impl UserEvent {
    /// Convenience constructor for callers and tests.
    pub fn new(date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            text: text.into(),
        }
    }
}
