//! Per-focus relationship resolution.
//!
//! # Responsibility
//! - Collect outbound relations declared by the focus document.
//! - Collect inbound relations declared by every other document onto it.
//!
//! # Invariants
//! - The focus appears once, always as the first node, never in the related
//!   tail.
//! - A document related in both directions appears once as a node but keeps
//!   one edge per direction (the kinds differ in general).
//! - Relations whose target id resolves to no document are dropped silently:
//!   malformed fixture data must degrade, not crash rendering.

use crate::model::document::{Document, DocumentId, RelationKind};

/// One rendered graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Document id, or the unresolved focus id when lookup failed.
    pub id: DocumentId,
    /// Display label; falls back to the id for an unresolved focus.
    pub label: String,
    /// Whether this node is the graph center.
    pub is_focus: bool,
}

/// One directed, typed graph edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: DocumentId,
    pub target: DocumentId,
    pub kind: RelationKind,
}

/// Ephemeral neighborhood graph for one focus document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGraph {
    /// Focus node first, then related nodes in deterministic order:
    /// outbound targets in declaration order, then inbound sources in
    /// authored store order.
    pub nodes: Vec<GraphNode>,
    /// All surviving edges, outbound before inbound.
    pub edges: Vec<GraphEdge>,
}

impl RelationGraph {
    /// Returns the related nodes, excluding the focus.
    pub fn related(&self) -> &[GraphNode] {
        &self.nodes[1..]
    }

    /// Returns the focus node.
    pub fn focus(&self) -> &GraphNode {
        &self.nodes[0]
    }
}

/// Resolves the neighborhood graph for `focus_id` over the full collection.
///
/// A missing focus id yields a single unresolved focus node with no edges;
/// an empty-neighborhood case, not an error.
pub fn resolve_related(focus_id: &str, documents: &[Document]) -> RelationGraph {
    let focus = documents.iter().find(|document| document.id == focus_id);

    let focus_label = focus
        .map(|document| document.title.clone())
        .unwrap_or_else(|| focus_id.to_string());
    let mut nodes = vec![GraphNode {
        id: focus_id.to_string(),
        label: focus_label,
        is_focus: true,
    }];
    let mut edges = Vec::new();
    let mut related_ids: Vec<DocumentId> = Vec::new();

    let Some(focus) = focus else {
        return RelationGraph { nodes, edges };
    };

    // Outbound: declared by the focus, in declaration order.
    for relation in &focus.relations {
        let Some(target) = lookup(documents, &relation.target_id) else {
            continue;
        };
        edges.push(GraphEdge {
            source: focus.id.clone(),
            target: target.id.clone(),
            kind: relation.kind,
        });
        push_related(&mut related_ids, &target.id);
    }

    // Inbound: declared by every other document onto the focus, in authored
    // store order.
    for document in documents {
        if document.id == focus.id {
            continue;
        }
        for relation in &document.relations {
            if relation.target_id == focus.id {
                edges.push(GraphEdge {
                    source: document.id.clone(),
                    target: focus.id.clone(),
                    kind: relation.kind,
                });
                push_related(&mut related_ids, &document.id);
            }
        }
    }

    for id in &related_ids {
        if let Some(document) = lookup(documents, id) {
            nodes.push(GraphNode {
                id: document.id.clone(),
                label: document.title.clone(),
                is_focus: false,
            });
        }
    }

    RelationGraph { nodes, edges }
}

fn lookup<'a>(documents: &'a [Document], id: &str) -> Option<&'a Document> {
    documents.iter().find(|document| document.id == id)
}

fn push_related(related_ids: &mut Vec<DocumentId>, id: &str) {
    if !related_ids.iter().any(|known| known == id) {
        related_ids.push(id.to_string());
    }
}
