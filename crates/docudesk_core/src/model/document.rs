//! Document domain model.
//!
//! # Responsibility
//! - Define the canonical policy/SOP/handbook record shape.
//! - Validate authored fixture data at store construction time.
//!
//! # Invariants
//! - `id` is stable, authored, and unique across a collection.
//! - Classification fields stay open string domains; only non-emptiness is
//!   validated, never membership in a closed set.
//! - `issued_date`/`deadline_date` are `YYYY-MM-DD` literals; absent means
//!   not-applicable, not unknown.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date literal regex"));

/// Stable authored identifier for a document.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DocumentId = String;

/// Semantic link category between two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Source cites or points at the target.
    Refers,
    /// Source supersedes parts of the target.
    Updates,
    /// Source requires the target to stay in force.
    Depends,
}

impl RelationKind {
    /// Returns the stable wire/display label for this relation kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Refers => "refers",
            Self::Updates => "updates",
            Self::Depends => "depends",
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One declared outbound link from a document.
///
/// `target_id` is not required to resolve: malformed fixture data must be
/// tolerated by derivation code, never crash it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Authored id of the linked document.
    pub target_id: DocumentId,
    /// Semantic category of the link.
    pub kind: RelationKind,
}

impl Relation {
    /// Convenience constructor for fixture authoring.
    pub fn new(target_id: impl Into<DocumentId>, kind: RelationKind) -> Self {
        Self {
            target_id: target_id.into(),
            kind,
        }
    }
}

/// Canonical record for one policy/SOP/handbook document.
///
/// Fixture data: defined at load time, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable authored id used for linking and lookup.
    pub id: DocumentId,
    /// Display name.
    pub title: String,
    /// Free-text labels in authored display order.
    pub tags: Vec<String>,
    /// Open string classification: business area.
    pub category: String,
    /// Open string classification: owning department.
    pub department: String,
    /// Open string classification: document kind (Policy, SOP, Handbook...).
    pub policy_type: String,
    /// Publication date as a `YYYY-MM-DD` literal; `None` = not applicable.
    pub issued_date: Option<String>,
    /// Compliance deadline as a `YYYY-MM-DD` literal; `None` = not applicable.
    pub deadline_date: Option<String>,
    /// One-line summary for list views.
    pub short_summary: String,
    /// Paragraph summary for detail views.
    pub long_summary: String,
    /// Full body text.
    pub content: String,
    /// Declared outbound links in authored order. May be empty.
    pub relations: Vec<Relation>,
}

/// Validation failure for one authored document record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        document_id: DocumentId,
        field: &'static str,
    },
    /// A date field does not match the `YYYY-MM-DD` literal shape.
    MalformedDate {
        document_id: DocumentId,
        field: &'static str,
        value: String,
    },
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { document_id, field } => {
                write!(f, "document `{document_id}`: field `{field}` is empty")
            }
            Self::MalformedDate {
                document_id,
                field,
                value,
            } => write!(
                f,
                "document `{document_id}`: field `{field}` value `{value}` is not YYYY-MM-DD"
            ),
        }
    }
}

impl Error for DocumentValidationError {}

impl Document {
    /// Validates authored invariants for this record.
    ///
    /// # Errors
    /// - `EmptyField` when id, title, or a classification field is blank.
    /// - `MalformedDate` when a present date is not a `YYYY-MM-DD` literal.
    pub fn validate(&self) -> Result<(), DocumentValidationError> {
        self.require_non_empty("id", &self.id)?;
        self.require_non_empty("title", &self.title)?;
        self.require_non_empty("category", &self.category)?;
        self.require_non_empty("department", &self.department)?;
        self.require_non_empty("policy_type", &self.policy_type)?;
        self.require_date_literal("issued_date", self.issued_date.as_deref())?;
        self.require_date_literal("deadline_date", self.deadline_date.as_deref())?;
        Ok(())
    }

    fn require_non_empty(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<(), DocumentValidationError> {
        if value.trim().is_empty() {
            return Err(DocumentValidationError::EmptyField {
                document_id: self.id.clone(),
                field,
            });
        }
        Ok(())
    }

    fn require_date_literal(
        &self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), DocumentValidationError> {
        if let Some(value) = value {
            if !DATE_LITERAL_RE.is_match(value) {
                return Err(DocumentValidationError::MalformedDate {
                    document_id: self.id.clone(),
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
