//! Bundled demo fixture.
//!
//! # Responsibility
//! - Author the static document set shipped with the demo.
//!
//! # Invariants
//! - Ids stay stable across releases; downstream links and tests key on them.
//! - Authored order here is the display order everywhere.

use crate::model::document::{Document, Relation, RelationKind};

/// Returns the authored demo document set.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: "doc-001".to_string(),
            title: "Safety SOP for Depot Operations".to_string(),
            tags: string_vec(&["safety", "sop", "depot"]),
            category: "Operations".to_string(),
            department: "Safety".to_string(),
            policy_type: "SOP".to_string(),
            issued_date: Some("2025-09-15".to_string()),
            deadline_date: Some("2025-10-15".to_string()),
            short_summary: "Quick guidelines for safe depot operations.".to_string(),
            long_summary: "Comprehensive safety procedures covering personnel training, \
                           equipment handling, emergency protocols, and daily checklists."
                .to_string(),
            content: "Section 1: Introduction...\nSection 2: Personnel Training...\n\
                      Section 3: Equipment Handling...\nSection 4: Emergency Protocols...\n\
                      Section 5: Daily Checklists..."
                .to_string(),
            relations: vec![
                Relation::new("doc-002", RelationKind::Refers),
                Relation::new("doc-003", RelationKind::Updates),
            ],
        },
        Document {
            id: "doc-002".to_string(),
            title: "Policy: Vendor Compliance Requirements".to_string(),
            tags: string_vec(&["policy", "vendor", "compliance"]),
            category: "Procurement".to_string(),
            department: "Legal".to_string(),
            policy_type: "Policy".to_string(),
            issued_date: Some("2025-09-20".to_string()),
            deadline_date: Some("2025-11-01".to_string()),
            short_summary: "Baseline compliance for all vendors.".to_string(),
            long_summary: "Defines mandatory compliance standards, documentation, audit \
                           frequency, and enforcement actions for third-party vendors."
                .to_string(),
            content: "Purpose...\nScope...\nDefinitions...\nPolicy Statements...\n\
                      Responsibilities...\nEnforcement...\nAppendices..."
                .to_string(),
            relations: vec![Relation::new("doc-001", RelationKind::Refers)],
        },
        Document {
            id: "doc-003".to_string(),
            title: "Operations Handbook v2".to_string(),
            tags: string_vec(&["operations", "handbook", "update"]),
            category: "Operations".to_string(),
            department: "Administration".to_string(),
            policy_type: "Handbook".to_string(),
            issued_date: Some("2025-09-05".to_string()),
            deadline_date: None,
            short_summary: "Updated operations handbook for staff.".to_string(),
            long_summary: "Adds new procedures for shift scheduling, asset management, and \
                           incident reporting. Supersedes v1 in specific sections."
                .to_string(),
            content: "Chapter 1...\nChapter 2...\nChapter 3...\nAppendix...".to_string(),
            relations: vec![Relation::new("doc-001", RelationKind::Depends)],
        },
    ]
}

fn string_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
