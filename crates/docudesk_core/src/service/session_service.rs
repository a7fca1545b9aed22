//! Session flag service.
//!
//! # Responsibility
//! - Gate the browsing UI behind a single logged-in boolean.
//! - Restore the flag at startup and flush it on every transition.
//!
//! # Invariants
//! - First run defaults to logged-out.
//! - Persisted form is the literal string `"true"` or `"false"`.
//! - Storage failures are logged and swallowed; the in-memory flag stays
//!   authoritative.

use crate::repo::prefs_repo::PrefsRepository;
use log::warn;

const SESSION_FLAG_KEY: &str = "docudesk_demo_logged_in";

/// Logged-in gate with best-effort persistence.
///
/// State machine: `loggedOut <-> loggedIn` via `login`, `logout`, `toggle`.
pub struct SessionService<R: PrefsRepository> {
    repo: R,
    logged_in: bool,
}

impl<R: PrefsRepository> SessionService<R> {
    /// Creates the service, restoring the persisted flag when readable.
    ///
    /// An unreadable or absent value restores to logged-out.
    pub fn new(repo: R) -> Self {
        let logged_in = match repo.get(SESSION_FLAG_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                warn!("event=prefs_read module=session status=degraded error={err}");
                false
            }
        };
        Self { repo, logged_in }
    }

    /// Returns the current gate state.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Transitions to logged-in and flushes.
    pub fn login(&mut self) {
        self.set(true);
    }

    /// Transitions to logged-out and flushes.
    pub fn logout(&mut self) {
        self.set(false);
    }

    /// Flips the gate in either direction and flushes.
    pub fn toggle(&mut self) {
        self.set(!self.logged_in);
    }

    fn set(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
        let literal = if logged_in { "true" } else { "false" };
        if let Err(err) = self.repo.set(SESSION_FLAG_KEY, literal) {
            warn!("event=prefs_write module=session status=degraded error={err}");
        }
    }
}
