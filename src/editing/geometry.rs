// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry derived from a vertex list: segment midpoints and the outline
//! as a `kurbo::BezPath`.
//!
//! A polyline has one segment per consecutive pair of vertices. A polygon
//! with at least three vertices also has a closing segment from the last
//! vertex back to the first; its midpoint inserts at the end of the list.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// The kind of geometry the vertex list describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    /// An open path through the vertices
    Polyline,
    /// A closed ring through the vertices
    #[default]
    Polygon,
}

impl GeometryKind {
    /// Whether `count` vertices form a closed ring of this kind
    pub fn is_closed(&self, count: usize) -> bool {
        matches!(self, GeometryKind::Polygon) && count >= 3
    }
}

/// The midpoint of one segment of the geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Midpoint {
    /// Index a vertex derived from this midpoint is inserted at
    pub inserting_index: usize,
    /// Position halfway between the segment's endpoints
    pub position: Point,
}

/// Compute the midpoints of every segment of `points`
pub fn midpoints(points: &[Point], kind: GeometryKind) -> Vec<Midpoint> {
    let mut result: Vec<Midpoint> = points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Midpoint {
            inserting_index: i + 1,
            position: pair[0].midpoint(pair[1]),
        })
        .collect();

    if kind.is_closed(points.len())
        && let (Some(first), Some(last)) = (points.first(), points.last())
    {
        result.push(Midpoint {
            inserting_index: points.len(),
            position: last.midpoint(*first),
        });
    }

    result
}

/// Position of the midpoint that inserts at `inserting_index`, if that
/// segment exists
pub fn midpoint_at(points: &[Point], kind: GeometryKind, inserting_index: usize) -> Option<Point> {
    let len = points.len();
    if inserting_index >= 1 && inserting_index < len {
        return Some(points[inserting_index - 1].midpoint(points[inserting_index]));
    }
    if inserting_index == len && kind.is_closed(len) {
        return Some(points[len - 1].midpoint(points[0]));
    }
    None
}

/// Build the outline of `points` as a `BezPath`.
///
/// An empty list produces an empty path.
pub fn to_bezpath(points: &[Point], kind: GeometryKind) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };

    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }
    if kind.is_closed(points.len()) {
        path.close_path();
    }
    path
}
