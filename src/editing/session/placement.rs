// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Tap placement: what a tap on empty map space does to the session,
//! depending on what is selected

use super::EditingSession;
use crate::editing::error::{EditError, EditResult};
use crate::editing::geometry::{self, GeometryKind};
use crate::editing::selection::Selection;
use kurbo::Point;

/// Outcome of placing a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inserted at the selected midpoint's index
    Inserted(usize),
    /// Moved the selected vertex
    Moved(usize),
    /// Appended as a new last vertex
    Appended(usize),
}

impl Placement {
    /// Index of the vertex that was placed
    pub fn index(&self) -> usize {
        match *self {
            Placement::Inserted(index) | Placement::Moved(index) | Placement::Appended(index) => {
                index
            }
        }
    }
}

impl EditingSession {
    /// Place `point` where the user tapped.
    ///
    /// With a midpoint selected the point becomes a new vertex at that
    /// midpoint's index; with a vertex selected that vertex moves to
    /// `point`; otherwise the point is appended. Any selection is cleared
    /// afterwards. A selected midpoint must be one of `kind`'s segments.
    pub fn place_point(&mut self, kind: GeometryKind, point: Point) -> EditResult<Placement> {
        let placement = match self.selection {
            Selection::Midpoint(index) => {
                self.midpoint_position(kind, index)?;
                self.insert_point(index, point)?;
                Placement::Inserted(index)
            }
            Selection::Vertex(index) => {
                self.set_point(index, point)?;
                Placement::Moved(index)
            }
            Selection::None => {
                self.add_point(point);
                Placement::Appended(self.points.len() - 1)
            }
        };

        self.clear_selection();
        Ok(placement)
    }

    /// Position of the midpoint that inserts at `inserting_index`
    pub fn midpoint_position(&self, kind: GeometryKind, inserting_index: usize) -> EditResult<Point> {
        geometry::midpoint_at(&self.points, kind, inserting_index).ok_or(
            EditError::IndexOutOfRange {
                index: inserting_index,
                len: self.points.len(),
            },
        )
    }

    /// Turn the selected midpoint into a vertex at its own position and
    /// select the new vertex. Returns the new vertex's index.
    pub fn insert_selected_midpoint(&mut self, kind: GeometryKind) -> EditResult<usize> {
        let Selection::Midpoint(index) = self.selection else {
            return Err(EditError::NoMidpointSelected);
        };

        let position = self.midpoint_position(kind, index)?;
        self.points.insert(index, position);
        self.selection = Selection::Vertex(index);

        tracing::debug!(
            "insert_selected_midpoint: new vertex {} at ({}, {})",
            index,
            position.x,
            position.y
        );
        Ok(index)
    }
}
