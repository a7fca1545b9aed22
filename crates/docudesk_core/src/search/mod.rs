//! Tag-based document filtering.
//!
//! # Responsibility
//! - Provide case-insensitive tag intersection filtering over the store.
//! - Model the tag input's query editing behavior.
//!
//! # Invariants
//! - An empty query never filters; it is the identity over the input.
//! - Tag comparison is case-insensitive on trimmed lowercase forms.

mod tags;

pub use tags::{filter_by_tags, normalize_tag, TagQuery};
