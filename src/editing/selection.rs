// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection state for an editing session.
//!
//! A session has at most one selected element: either a vertex, or the
//! midpoint of the segment that ends at a vertex. Both carry the inserting
//! index, so a combined "vertex and midpoint selected" state cannot be
//! expressed.

use serde::Serialize;

/// What is currently selected in an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum Selection {
    /// Nothing is selected
    #[default]
    None,

    /// The vertex at this index is selected
    Vertex(usize),

    /// The midpoint before the vertex at this index is selected. A vertex
    /// derived from it is inserted at this index.
    Midpoint(usize),
}

impl Selection {
    /// The inserting index carried by the selection, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            Selection::None => None,
            Selection::Vertex(index) | Selection::Midpoint(index) => Some(index),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, Selection::Vertex(_))
    }

    pub fn is_midpoint(&self) -> bool {
        matches!(self, Selection::Midpoint(_))
    }

    /// The same kind of selection pointing at a different index.
    ///
    /// `None` stays `None`.
    pub fn with_index(self, index: usize) -> Self {
        match self {
            Selection::None => Selection::None,
            Selection::Vertex(_) => Selection::Vertex(index),
            Selection::Midpoint(_) => Selection::Midpoint(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        let sel = Selection::default();
        assert!(sel.is_none());
        assert_eq!(sel.index(), None);
    }

    #[test]
    fn vertex_carries_index() {
        let sel = Selection::Vertex(3);
        assert!(sel.is_vertex());
        assert!(!sel.is_midpoint());
        assert_eq!(sel.index(), Some(3));
    }

    #[test]
    fn midpoint_carries_index() {
        let sel = Selection::Midpoint(1);
        assert!(sel.is_midpoint());
        assert!(!sel.is_vertex());
        assert_eq!(sel.index(), Some(1));
    }

    #[test]
    fn serializes_kind_and_index() {
        assert_eq!(
            serde_json::to_value(Selection::Vertex(2)).unwrap(),
            serde_json::json!({ "kind": "vertex", "index": 2 })
        );
        assert_eq!(
            serde_json::to_value(Selection::None).unwrap(),
            serde_json::json!({ "kind": "none" })
        );
    }

    #[test]
    fn with_index_keeps_kind() {
        assert_eq!(Selection::Vertex(0).with_index(4), Selection::Vertex(4));
        assert_eq!(Selection::Midpoint(2).with_index(5), Selection::Midpoint(5));
        assert_eq!(Selection::None.with_index(9), Selection::None);
    }
}
