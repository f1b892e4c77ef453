// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Point list mutation for EditingSession: adding, inserting, moving,
//! removing and deleting vertices

use super::EditingSession;
use crate::editing::error::{EditError, EditResult, check_index};
use crate::editing::selection::Selection;
use kurbo::Point;

impl EditingSession {
    /// Get the vertex at `index`
    pub fn point(&self, index: usize) -> EditResult<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(EditError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Append a vertex
    pub fn add_point(&mut self, point: Point) {
        tracing::trace!("add_point: ({}, {}) at {}", point.x, point.y, self.points.len());
        self.points.push(point);
    }

    /// Insert a vertex at `index`, shifting later vertices right.
    ///
    /// `index == point_count()` appends.
    pub fn insert_point(&mut self, index: usize, point: Point) -> EditResult<()> {
        check_index(index, self.points.len(), true)?;
        tracing::debug!("insert_point: ({}, {}) at {}", point.x, point.y, index);
        self.points.insert(index, point);
        Ok(())
    }

    /// Append every point in order. Returns whether any were added.
    pub fn add_all_points(&mut self, points: impl IntoIterator<Item = Point>) -> bool {
        let before = self.points.len();
        self.points.extend(points);
        self.points.len() > before
    }

    /// Replace the vertex at `index`, returning the previous position
    pub fn set_point(&mut self, index: usize, point: Point) -> EditResult<Point> {
        check_index(index, self.points.len(), false)?;
        tracing::debug!("set_point: {} -> ({}, {})", index, point.x, point.y);
        Ok(std::mem::replace(&mut self.points[index], point))
    }

    /// Remove and return the vertex at `index`, shifting later vertices
    /// left
    pub fn remove_point(&mut self, index: usize) -> EditResult<Point> {
        check_index(index, self.points.len(), false)?;
        tracing::debug!("remove_point: {}", index);
        Ok(self.points.remove(index))
    }

    /// Remove every vertex. The selection is left as it is.
    pub fn clear_points(&mut self) {
        tracing::debug!("clear_points: dropping {} points", self.points.len());
        self.points.clear();
    }

    /// Delete the selected vertex, or the last vertex when no vertex is
    /// selected, then clear the selection.
    ///
    /// A selected midpoint does not protect anything: it deletes the last
    /// vertex, the same as an empty selection, which lets a user undo the
    /// last placed point while drawing. Fails without changing anything
    /// when the list is empty or the selected vertex index is stale.
    pub fn delete_point(&mut self) -> EditResult<Point> {
        let len = self.points.len();
        let index = match self.selection {
            Selection::Vertex(index) => index,
            Selection::Midpoint(_) | Selection::None => {
                len.checked_sub(1).ok_or(EditError::IndexOutOfRange { index: 0, len })?
            }
        };

        let removed = self.remove_point(index)?;
        self.clear_selection();
        tracing::debug!("delete_point: removed {}, {} points left", index, self.points.len());
        Ok(removed)
    }
}
