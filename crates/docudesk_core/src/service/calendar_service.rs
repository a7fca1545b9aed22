//! Calendar state service.
//!
//! # Responsibility
//! - Own the displayed-month cursor and the append-only user event list.
//! - Restore events at startup and flush the list on every append.
//!
//! # Invariants
//! - Events are append-only; entries are never edited or removed.
//! - Adding with an empty date or empty text is a no-op, not an error.
//! - Storage failures are logged and swallowed; the in-memory list stays
//!   authoritative.

use crate::calendar::{MonthCursor, MonthGrid};
use crate::model::event::UserEvent;
use crate::repo::prefs_repo::PrefsRepository;
use log::warn;

const USER_EVENTS_KEY: &str = "docudesk_demo_user_events";

/// Calendar cursor and user events with best-effort persistence.
pub struct CalendarService<R: PrefsRepository> {
    repo: R,
    cursor: MonthCursor,
    events: Vec<UserEvent>,
}

impl<R: PrefsRepository> CalendarService<R> {
    /// Creates the service at the given month, restoring persisted events.
    ///
    /// An unreadable or malformed persisted list restores to empty.
    pub fn new(repo: R, cursor: MonthCursor) -> Self {
        let events = match repo.get(USER_EVENTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<UserEvent>>(&raw) {
                Ok(events) => events,
                Err(err) => {
                    warn!("event=prefs_read module=calendar status=degraded error={err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=prefs_read module=calendar status=degraded error={err}");
                Vec::new()
            }
        };
        Self {
            repo,
            cursor,
            events,
        }
    }

    /// Returns the displayed month.
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// Steps the displayed month forward.
    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    /// Steps the displayed month back.
    pub fn prev_month(&mut self) {
        self.cursor = self.cursor.prev();
    }

    /// Returns the grid shape for the displayed month.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_cursor(self.cursor)
    }

    /// Returns all user events in append order.
    pub fn events(&self) -> &[UserEvent] {
        &self.events
    }

    /// Appends one user event and flushes the list.
    ///
    /// Empty or whitespace-only date/text makes this a no-op. Returns whether
    /// the list changed.
    pub fn add_event(&mut self, date: &str, text: &str) -> bool {
        if date.trim().is_empty() || text.trim().is_empty() {
            return false;
        }
        self.events
            .push(UserEvent::new(date.trim(), text.trim()));
        self.flush();
        true
    }

    fn flush(&self) {
        let payload = match serde_json::to_string(&self.events) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("event=prefs_write module=calendar status=degraded error={err}");
                return;
            }
        };
        if let Err(err) = self.repo.set(USER_EVENTS_KEY, &payload) {
            warn!("event=prefs_write module=calendar status=degraded error={err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarService;
    use crate::calendar::MonthCursor;
    use crate::repo::prefs_repo::{PrefsRepository, RepoResult};

    /// Repository stub that fails every call, exercising degraded mode.
    struct BrokenPrefs;

    impl PrefsRepository for BrokenPrefs {
        fn get(&self, _key: &str) -> RepoResult<Option<String>> {
            Err(rusqlite::Error::InvalidQuery.into())
        }

        fn set(&self, _key: &str, _value: &str) -> RepoResult<()> {
            Err(rusqlite::Error::InvalidQuery.into())
        }
    }

    #[test]
    fn blank_date_or_text_leaves_event_list_unchanged() {
        let mut service = CalendarService::new(BrokenPrefs, MonthCursor::new(2025, 8));
        assert!(!service.add_event("", "standup"));
        assert!(!service.add_event("2025-09-15", "   "));
        assert_eq!(service.events().len(), 0);

        assert!(service.add_event("2025-09-15", "standup"));
        assert_eq!(service.events().len(), 1);
    }

    #[test]
    fn storage_failure_keeps_in_memory_events_authoritative() {
        let mut service = CalendarService::new(BrokenPrefs, MonthCursor::new(2025, 8));
        assert!(service.add_event("2025-09-16", "retro"));
        assert_eq!(service.events().len(), 1);
        assert_eq!(service.events()[0].text, "retro");
    }
}
