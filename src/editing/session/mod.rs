// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - manages vertex and selection state for one geometry

mod placement;
mod point_editing;

pub use placement::Placement;

use super::geometry::{self, GeometryKind, Midpoint};
use super::selection::Selection;
use kurbo::{BezPath, Point};

/// Editing session for a single line or polygon geometry
///
/// Holds the ordered vertex list and what is selected. The editing
/// controller hit-tests taps and drives the session; renderers read the
/// points back out. Cloning a session produces an independent snapshot,
/// which is how a speculative edit is undone on cancel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditingSession {
    /// Vertices in path order. Duplicates are allowed.
    points: Vec<Point>,

    /// Currently selected vertex or midpoint
    selection: Selection,

    /// Inserting index remembered while nothing is selected, so that
    /// setting the index before the selection flag behaves as expected
    idle_index: usize,
}

impl EditingSession {
    /// Create an empty session with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from points and selection flags.
    ///
    /// When both flags are set the vertex selection wins, since deletion
    /// only ever acts on a selected vertex.
    pub fn from_parts(
        points: impl IntoIterator<Item = Point>,
        midpoint_selected: bool,
        vertex_selected: bool,
        inserting_index: usize,
    ) -> Self {
        let selection = if vertex_selected {
            Selection::Vertex(inserting_index)
        } else if midpoint_selected {
            Selection::Midpoint(inserting_index)
        } else {
            Selection::None
        };

        Self {
            points: points.into_iter().collect(),
            selection,
            idle_index: inserting_index,
        }
    }

    /// Create a session from points and a selection
    pub fn with_selection(points: impl IntoIterator<Item = Point>, selection: Selection) -> Self {
        Self {
            points: points.into_iter().collect(),
            selection,
            idle_index: selection.index().unwrap_or(0),
        }
    }

    /// Replace this session's state with an earlier snapshot
    pub fn restore(&mut self, snapshot: EditingSession) {
        tracing::debug!(
            "Restoring snapshot: {} -> {} points",
            self.points.len(),
            snapshot.points.len()
        );
        *self = snapshot;
    }

    // ------------------------------------------------------------------
    // Points (read)
    // ------------------------------------------------------------------

    /// Read-only view of the vertices
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Owned copy of the vertices, unaffected by later edits
    pub fn to_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        if selection.is_none() {
            self.clear_selection();
        } else {
            self.selection = selection;
        }
    }

    /// Select the vertex at `index`. The index is not checked here.
    pub fn select_vertex(&mut self, index: usize) {
        self.selection = Selection::Vertex(index);
    }

    /// Select the midpoint that inserts at `index`. The index is not
    /// checked here.
    pub fn select_midpoint(&mut self, index: usize) {
        self.selection = Selection::Midpoint(index);
    }

    /// Deselect, keeping the last inserting index
    pub fn clear_selection(&mut self) {
        if let Some(index) = self.selection.index() {
            self.idle_index = index;
        }
        self.selection = Selection::None;
    }

    pub fn is_midpoint_selected(&self) -> bool {
        self.selection.is_midpoint()
    }

    /// Select or deselect the midpoint at the current inserting index.
    ///
    /// Selecting replaces a vertex selection. Deselecting has no effect
    /// unless a midpoint is the current selection.
    pub fn set_midpoint_selected(&mut self, selected: bool) {
        if selected {
            self.selection = Selection::Midpoint(self.inserting_index());
        } else if self.selection.is_midpoint() {
            self.clear_selection();
        }
    }

    pub fn is_vertex_selected(&self) -> bool {
        self.selection.is_vertex()
    }

    /// Select or deselect the vertex at the current inserting index.
    ///
    /// Selecting replaces a midpoint selection. Deselecting has no effect
    /// unless a vertex is the current selection.
    pub fn set_vertex_selected(&mut self, selected: bool) {
        if selected {
            self.selection = Selection::Vertex(self.inserting_index());
        } else if self.selection.is_vertex() {
            self.clear_selection();
        }
    }

    /// Index of the selected vertex, or the index a selected midpoint
    /// inserts at. With nothing selected this is the last index set.
    pub fn inserting_index(&self) -> usize {
        self.selection.index().unwrap_or(self.idle_index)
    }

    /// Retarget the current selection, or remember the index for the next
    /// selection. Bounds are checked only when the index is used.
    pub fn set_inserting_index(&mut self, index: usize) {
        if self.selection.is_none() {
            self.idle_index = index;
        } else {
            self.selection = self.selection.with_index(index);
        }
    }

    // ------------------------------------------------------------------
    // Derived geometry
    // ------------------------------------------------------------------

    /// Midpoints of every segment, for drawing midpoint handles
    pub fn midpoints(&self, kind: GeometryKind) -> Vec<Midpoint> {
        geometry::midpoints(&self.points, kind)
    }

    /// Outline of the geometry being edited
    pub fn to_bezpath(&self, kind: GeometryKind) -> BezPath {
        geometry::to_bezpath(&self.points, kind)
    }
}
