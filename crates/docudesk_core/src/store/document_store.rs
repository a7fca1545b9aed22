//! In-memory document store.
//!
//! # Responsibility
//! - Expose authored-order enumeration and id lookup over fixture documents.
//! - Derive classification listings for category/department/type navigation.
//!
//! # Invariants
//! - `all()` preserves authored order exactly.
//! - `get()` returning `None` is a normal outcome callers must branch on,
//!   never an error to unwind on.

use crate::model::document::{Document, DocumentId, DocumentValidationError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction failure for a document collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBuildError {
    /// Two documents share the same authored id.
    DuplicateId(DocumentId),
    /// One record failed authored-field validation.
    Validation(DocumentValidationError),
}

impl Display for StoreBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate document id: `{id}`"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<DocumentValidationError> for StoreBuildError {
    fn from(value: DocumentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Immutable, authored-order document collection.
#[derive(Debug)]
pub struct DocumentStore {
    documents: Vec<Document>,
    by_id: HashMap<DocumentId, usize>,
}

impl DocumentStore {
    /// Builds a store from authored records, validating each one.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id.
    /// - `Validation` when a record violates authored invariants.
    pub fn new(documents: Vec<Document>) -> Result<Self, StoreBuildError> {
        let mut by_id = HashMap::with_capacity(documents.len());
        for (position, document) in documents.iter().enumerate() {
            document.validate()?;
            if by_id.insert(document.id.clone(), position).is_some() {
                return Err(StoreBuildError::DuplicateId(document.id.clone()));
            }
        }
        Ok(Self { documents, by_id })
    }

    /// Builds the store from the bundled demo fixture.
    ///
    /// The fixture is authored to be valid, so failures here indicate a
    /// programming error in the seed data and surface as `StoreBuildError`.
    pub fn seeded() -> Result<Self, StoreBuildError> {
        Self::new(super::seed::seed_documents())
    }

    /// Returns every document in stable authored order.
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Looks one document up by authored id.
    ///
    /// `None` means "not found" and is a normal outcome, not a failure.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&position| &self.documents[position])
    }

    /// Returns distinct categories in first-seen authored order.
    pub fn categories(&self) -> Vec<&str> {
        self.distinct(|document| &document.category)
    }

    /// Returns distinct departments in first-seen authored order.
    pub fn departments(&self) -> Vec<&str> {
        self.distinct(|document| &document.department)
    }

    /// Returns distinct policy types in first-seen authored order.
    pub fn policy_types(&self) -> Vec<&str> {
        self.distinct(|document| &document.policy_type)
    }

    /// Returns documents in the given category, authored order preserved.
    pub fn by_category(&self, category: &str) -> Vec<&Document> {
        self.subset(|document| document.category == category)
    }

    /// Returns documents owned by the given department, authored order preserved.
    pub fn by_department(&self, department: &str) -> Vec<&Document> {
        self.subset(|document| document.department == department)
    }

    /// Returns documents of the given policy type, authored order preserved.
    pub fn by_policy_type(&self, policy_type: &str) -> Vec<&Document> {
        self.subset(|document| document.policy_type == policy_type)
    }

    /// Returns distinct normalized tags in first-seen authored order.
    ///
    /// Feeds the tag input's suggestion row.
    pub fn tag_suggestions(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for document in &self.documents {
            for tag in &document.tags {
                let normalized = tag.trim().to_lowercase();
                if !normalized.is_empty() && !seen.contains(&normalized) {
                    seen.push(normalized);
                }
            }
        }
        seen
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Document) -> &'a String) -> Vec<&'a str> {
        let mut seen: Vec<&str> = Vec::new();
        for document in &self.documents {
            let value = field(document).as_str();
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }

    fn subset(&self, keep: impl Fn(&Document) -> bool) -> Vec<&Document> {
        self.documents.iter().filter(|doc| keep(doc)).collect()
    }
}
