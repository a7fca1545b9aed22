//! Tag filter and tag query editing.
//!
//! # Responsibility
//! - Filter documents whose tag set intersects a normalized query set.
//! - Maintain the query list with dedupe, blank rejection, and pop-last.
//!
//! # Invariants
//! - Normalization is trim + lowercase, applied to both sides of the match.
//! - Query order is insertion order; `pop_last` removes the newest tag.

use crate::model::document::Document;
use std::collections::BTreeSet;

/// Returns the canonical lowercase trimmed form of a tag.
///
/// `None` when the input is empty or whitespace-only.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Filters `documents` down to those tagged with at least one query tag.
///
/// An empty `tags` query is the identity: every document is returned in
/// authored order. Matching is case-insensitive on both sides.
pub fn filter_by_tags<'a>(documents: &'a [Document], tags: &[String]) -> Vec<&'a Document> {
    if tags.is_empty() {
        return documents.iter().collect();
    }

    let wanted: BTreeSet<String> = tags
        .iter()
        .filter_map(|tag| normalize_tag(tag))
        .collect();
    if wanted.is_empty() {
        return documents.iter().collect();
    }

    documents
        .iter()
        .filter(|document| {
            document
                .tags
                .iter()
                .filter_map(|tag| normalize_tag(tag))
                .any(|tag| wanted.contains(&tag))
        })
        .collect()
}

/// Edit model for the tag search input.
///
/// Holds normalized tags in insertion order, matching the chip row the UI
/// renders above the text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    tags: Vec<String>,
}

impl TagQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag after normalization.
    ///
    /// Blank input and case-insensitive duplicates are rejected as no-ops.
    /// Returns whether the query changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes one tag by its normalized form. Unknown tags are a no-op.
    pub fn remove(&mut self, raw: &str) {
        if let Some(tag) = normalize_tag(raw) {
            self.tags.retain(|known| known != &tag);
        }
    }

    /// Removes the most recently added tag, if any.
    ///
    /// Backs the backspace-on-empty-input affordance of the tag field.
    pub fn pop_last(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Returns the normalized tags in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns whether the query is empty (identity filter).
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
