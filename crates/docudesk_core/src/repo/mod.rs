//! Repository layer for demo preference persistence.
//!
//! # Responsibility
//! - Define the key/value access contract used by session and calendar state.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories surface transport errors; services decide whether to
//!   degrade. Repositories never swallow failures themselves.

pub mod prefs_repo;
