//! Derived read models computed from the document store.
//!
//! # Responsibility
//! - Build calendar-facing indices over the immutable fixture set.
//!
//! # Invariants
//! - Derivations are pure functions; nothing here caches or mutates.

mod date_index;

pub use date_index::{build_date_index, DateEntry, DateIndex, DateKind};
