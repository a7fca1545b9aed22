//! Relationship graph derivation and layout.
//!
//! # Responsibility
//! - Derive the per-focus neighborhood graph from declared relations.
//! - Place related nodes on a fixed circle for plain SVG rendering.
//!
//! # Invariants
//! - Graphs are ephemeral: recomputed on demand, never stored.
//! - Output ordering is deterministic for identical input.

mod radial;
mod related;

pub use radial::{layout_radial, Point};
pub use related::{resolve_related, GraphEdge, GraphNode, RelationGraph};
