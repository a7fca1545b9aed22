//! Fixed-radius radial node placement.
//!
//! # Responsibility
//! - Place related nodes evenly on a circle around the focus for plain SVG
//!   rendering.
//!
//! # Invariants
//! - Pure and deterministic: identical input order and count yields identical
//!   coordinates.
//! - No collision avoidance or relaxation; placement is intentionally fixed.

use crate::model::document::DocumentId;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// One 2D coordinate in the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Places `node_ids` evenly on a circle of `radius` around `center`.
///
/// The focus node is not part of the input; callers render it at `center`.
/// The i-th node lands at angle `i * 2π / n`. An empty input yields an empty
/// map; the denominator is clamped to 1 so zero nodes never divides by zero.
pub fn layout_radial(
    node_ids: &[DocumentId],
    radius: f64,
    center: Point,
) -> BTreeMap<DocumentId, Point> {
    let step = 2.0 * PI / node_ids.len().max(1) as f64;
    node_ids
        .iter()
        .enumerate()
        .map(|(position, id)| {
            let angle = position as f64 * step;
            (
                id.clone(),
                Point {
                    x: center.x + radius * angle.cos(),
                    y: center.y + radius * angle.sin(),
                },
            )
        })
        .collect()
}
