//! Calendar date index derivation.
//!
//! # Responsibility
//! - Map each `YYYY-MM-DD` literal to the documents issued or due that day.
//! - Classify every date as issued, deadline, or both.
//!
//! # Invariants
//! - A date fed by both an issued date and a deadline date resolves to
//!   `Both`, regardless of contribution order (upgrade is commutative and
//!   idempotent).
//! - Dates are compared as string literals; no calendar parsing happens here.

use crate::model::document::{Document, DocumentId};
use std::collections::BTreeMap;

/// Classification of one indexed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    /// Only issue dates land on this day.
    Issued,
    /// Only deadlines land on this day.
    Deadline,
    /// At least one issue date and one deadline share this day.
    Both,
}

impl DateKind {
    /// Merges a new contribution into an existing classification.
    fn absorb(self, incoming: DateKind) -> DateKind {
        if self == incoming {
            self
        } else {
            DateKind::Both
        }
    }

    /// Returns the stable display label for calendar pills.
    pub fn label(self) -> &'static str {
        match self {
            Self::Issued => "issued",
            Self::Deadline => "deadline",
            Self::Both => "both",
        }
    }
}

/// Documents and classification attached to one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    /// Contributing document ids in authored-store order.
    pub document_ids: Vec<DocumentId>,
    /// Combined classification of all contributions.
    pub kind: DateKind,
}

/// Mapping from `YYYY-MM-DD` literal to its indexed entry.
///
/// `BTreeMap` keeps iteration order deterministic for rendering and tests.
pub type DateIndex = BTreeMap<String, DateEntry>;

/// Builds the date index over the full document collection.
///
/// The store is immutable, so callers may compute this once and keep it for
/// the process lifetime; recomputing is equally valid.
pub fn build_date_index(documents: &[Document]) -> DateIndex {
    let mut index = DateIndex::new();
    for document in documents {
        if let Some(date) = document.issued_date.as_deref() {
            record(&mut index, date, &document.id, DateKind::Issued);
        }
        if let Some(date) = document.deadline_date.as_deref() {
            record(&mut index, date, &document.id, DateKind::Deadline);
        }
    }
    index
}

fn record(index: &mut DateIndex, date: &str, document_id: &str, kind: DateKind) {
    index
        .entry(date.to_string())
        .and_modify(|entry| {
            entry.kind = entry.kind.absorb(kind);
            if !entry.document_ids.iter().any(|id| id == document_id) {
                entry.document_ids.push(document_id.to_string());
            }
        })
        .or_insert_with(|| DateEntry {
            document_ids: vec![document_id.to_string()],
            kind,
        });
}

#[cfg(test)]
mod tests {
    use super::{build_date_index, DateKind};
    use crate::model::document::Document;

    fn dated_document(id: &str, issued: Option<&str>, deadline: Option<&str>) -> Document {
        Document {
            id: id.to_string(),
            title: format!("Document {id}"),
            tags: Vec::new(),
            category: "Operations".to_string(),
            department: "Safety".to_string(),
            policy_type: "Policy".to_string(),
            issued_date: issued.map(str::to_string),
            deadline_date: deadline.map(str::to_string),
            short_summary: "s".to_string(),
            long_summary: "l".to_string(),
            content: "c".to_string(),
            relations: Vec::new(),
        }
    }

    #[test]
    fn same_document_issue_and_deadline_on_one_day_is_both() {
        let docs = vec![dated_document("doc-a", Some("2025-09-15"), Some("2025-09-15"))];
        let index = build_date_index(&docs);
        assert_eq!(index["2025-09-15"].kind, DateKind::Both);
        assert_eq!(index["2025-09-15"].document_ids, vec!["doc-a".to_string()]);
    }

    #[test]
    fn classification_is_independent_of_document_order() {
        let issued = dated_document("doc-a", Some("2025-10-01"), None);
        let due = dated_document("doc-b", None, Some("2025-10-01"));

        let forward = build_date_index(&[issued.clone(), due.clone()]);
        let backward = build_date_index(&[due, issued]);

        assert_eq!(forward["2025-10-01"].kind, DateKind::Both);
        assert_eq!(backward["2025-10-01"].kind, DateKind::Both);
    }
}
