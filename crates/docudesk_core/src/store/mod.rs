//! Immutable document collection and its bundled seed fixture.
//!
//! # Responsibility
//! - Hold the fixture document set in authored order for the process lifetime.
//! - Provide read-only lookup, enumeration, and classification listings.
//!
//! # Invariants
//! - Document ids are unique; duplicates are rejected at construction.
//! - No create/update/delete path exists after construction.

mod document_store;
pub mod seed;

pub use document_store::{DocumentStore, StoreBuildError};
