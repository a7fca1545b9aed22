//! Mock chat assistant.
//!
//! # Responsibility
//! - Keep the chat transcript and schedule the canned assistant reply.
//! - Guarantee a pending reply can never land after the session is disposed.
//!
//! # Invariants
//! - Exactly one reply is pending at a time; a newer send replaces it.
//! - `dispose()` cancels any pending reply permanently.
//! - Time is injected by the caller, keeping delivery deterministic and
//!   single-threaded.

use std::time::{Duration, Instant};

/// Delay between a user message and the canned reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(500);

const GREETING: &str = "Hello! Ask me anything about the document library.";
const CANNED_REPLY: &str =
    "Thanks! I'll look into that. Meanwhile, try searching by tags on the left.";

/// Author of one transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone)]
struct PendingReply {
    due_at: Instant,
    content: String,
}

/// Transcript plus deferred-reply state for one chat panel.
///
/// The owning view calls `poll` on its tick; once the view is torn down it
/// calls `dispose`, after which no reply can be appended.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
    disposed: bool,
}

impl ChatSession {
    /// Creates a session seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: GREETING.to_string(),
            }],
            pending: None,
            disposed: false,
        }
    }

    /// Returns the transcript in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a user message and schedules the canned reply.
    ///
    /// Blank input and sends after disposal are no-ops. Returns whether the
    /// transcript changed.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: trimmed.to_string(),
        });
        self.pending = Some(PendingReply {
            due_at: now + REPLY_DELAY,
            content: CANNED_REPLY.to_string(),
        });
        true
    }

    /// Delivers the pending reply once its delay has elapsed.
    ///
    /// Returns the delivered message, or `None` when nothing is due.
    pub fn poll(&mut self, now: Instant) -> Option<&ChatMessage> {
        if self.disposed {
            return None;
        }
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.due_at);
        if !due {
            return None;
        }

        let pending = self.pending.take()?;
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: pending.content,
        });
        self.messages.last()
    }

    /// Tears the session down, cancelling any pending reply.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatRole, ChatSession, REPLY_DELAY};
    use std::time::{Duration, Instant};

    #[test]
    fn reply_arrives_only_after_the_delay() {
        let mut session = ChatSession::new();
        let t0 = Instant::now();
        assert!(session.send("What changed in the handbook?", t0));

        assert!(session.poll(t0 + Duration::from_millis(100)).is_none());

        let reply = session
            .poll(t0 + REPLY_DELAY)
            .expect("reply should be due at the delay boundary");
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut session = ChatSession::new();
        assert!(!session.send("   ", Instant::now()));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn disposed_session_never_delivers_a_stale_reply() {
        let mut session = ChatSession::new();
        let t0 = Instant::now();
        session.send("ping", t0);
        session.dispose();

        assert!(session.poll(t0 + REPLY_DELAY * 2).is_none());
        // Greeting plus the user message only; no assistant reply appended.
        assert_eq!(session.messages().len(), 2);
        assert!(!session.send("again", t0));
    }

    #[test]
    fn newer_send_replaces_the_pending_reply() {
        let mut session = ChatSession::new();
        let t0 = Instant::now();
        session.send("first", t0);
        session.send("second", t0 + Duration::from_millis(300));

        // First reply's due time passes without delivery.
        assert!(session.poll(t0 + REPLY_DELAY).is_none());
        assert!(session
            .poll(t0 + Duration::from_millis(300) + REPLY_DELAY)
            .is_some());
    }
}
