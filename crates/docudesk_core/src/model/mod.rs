//! Domain model for the document hub.
//!
//! # Responsibility
//! - Define the canonical document record and its typed relations.
//! - Define the user calendar event record persisted across sessions.
//!
//! # Invariants
//! - Every document is identified by a stable authored `DocumentId`.
//! - The document collection is fixture data: loaded once, never mutated.

pub mod document;
pub mod event;
