// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit scripts: a JSON list of controller operations replayed against an
//! `EditingSession`.
//!
//! Each operation is what an editing controller would do after resolving a
//! tap: select something, place or remove points, or snapshot and cancel a
//! speculative edit. Replay stops at the first operation that fails.
//!
//! ```json
//! { "geometry": "polygon",
//!   "ops": [ { "op": "add", "x": 0, "y": 0 },
//!            { "op": "select_vertex", "index": 0 },
//!            { "op": "delete" } ] }
//! ```

use crate::editing::{EditError, EditingSession, GeometryKind, Midpoint, Selection};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A sequence of operations to replay
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditScript {
    /// Geometry kind; the caller's default applies when absent
    #[serde(default)]
    pub geometry: Option<GeometryKind>,
    pub ops: Vec<EditOp>,
}

/// One controller operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    Add { x: f64, y: f64 },
    Insert { index: usize, x: f64, y: f64 },
    Remove { index: usize },
    Move { index: usize, x: f64, y: f64 },
    SelectVertex { index: usize },
    SelectMidpoint { index: usize },
    ClearSelection,
    Delete,
    Place { x: f64, y: f64 },
    CommitMidpoint,
    Clear,
    /// Remember the session so a later `cancel` can revert to it
    Snapshot,
    /// Revert to the most recent snapshot
    Cancel,
    /// Keep the edits since the most recent snapshot
    Commit,
}

/// Errors raised while replaying a script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to parse edit script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("operation {position} failed: {source}")]
    Op {
        position: usize,
        #[source]
        source: EditError,
    },

    #[error("operation {position}: no snapshot to cancel or commit")]
    NoSnapshot { position: usize },
}

impl EditScript {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay every operation on a new session
    pub fn run(&self, default_geometry: GeometryKind) -> Result<EditingSession, ScriptError> {
        let mut replay = Replay::new(self.geometry.unwrap_or(default_geometry));
        for (position, op) in self.ops.iter().enumerate() {
            replay.apply(position, op)?;
        }
        Ok(replay.session)
    }
}

/// Replay state: the live session and any pending snapshots
#[derive(Debug)]
struct Replay {
    kind: GeometryKind,
    session: EditingSession,
    snapshots: Vec<EditingSession>,
}

impl Replay {
    fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            session: EditingSession::new(),
            snapshots: Vec::new(),
        }
    }

    fn apply(&mut self, position: usize, op: &EditOp) -> Result<(), ScriptError> {
        tracing::debug!("[replay] op {}: {:?}", position, op);
        let session = &mut self.session;
        let op_err = |source| ScriptError::Op { position, source };

        match *op {
            EditOp::Add { x, y } => session.add_point(Point::new(x, y)),
            EditOp::Insert { index, x, y } => {
                session.insert_point(index, Point::new(x, y)).map_err(op_err)?
            }
            EditOp::Remove { index } => {
                session.remove_point(index).map_err(op_err)?;
            }
            EditOp::Move { index, x, y } => {
                session.set_point(index, Point::new(x, y)).map_err(op_err)?;
            }
            EditOp::SelectVertex { index } => session.select_vertex(index),
            EditOp::SelectMidpoint { index } => session.select_midpoint(index),
            EditOp::ClearSelection => session.clear_selection(),
            EditOp::Delete => {
                session.delete_point().map_err(op_err)?;
            }
            EditOp::Place { x, y } => {
                session.place_point(self.kind, Point::new(x, y)).map_err(op_err)?;
            }
            EditOp::CommitMidpoint => {
                session.insert_selected_midpoint(self.kind).map_err(op_err)?;
            }
            EditOp::Clear => session.clear_points(),
            EditOp::Snapshot => self.snapshots.push(session.clone()),
            EditOp::Cancel => {
                let snapshot = self
                    .snapshots
                    .pop()
                    .ok_or(ScriptError::NoSnapshot { position })?;
                session.restore(snapshot);
            }
            EditOp::Commit => {
                self.snapshots
                    .pop()
                    .ok_or(ScriptError::NoSnapshot { position })?;
            }
        }
        Ok(())
    }
}

/// Serializable summary of a session, for printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub geometry: GeometryKind,
    pub points: Vec<Point>,
    pub midpoints: Vec<Midpoint>,
    pub selection: Selection,
    pub inserting_index: usize,
}

impl SessionReport {
    pub fn new(session: &EditingSession, geometry: GeometryKind) -> Self {
        Self {
            geometry,
            points: session.to_points(),
            midpoints: session.midpoints(geometry),
            selection: session.selection(),
            inserting_index: session.inserting_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_ops() {
        let script = EditScript::from_json(
            r#"{ "geometry": "polyline",
                 "ops": [ { "op": "add", "x": 1, "y": 2 },
                          { "op": "select_midpoint", "index": 1 },
                          { "op": "commit_midpoint" },
                          { "op": "clear_selection" } ] }"#,
        )
        .unwrap();

        assert_eq!(script.geometry, Some(GeometryKind::Polyline));
        assert_eq!(
            script.ops,
            vec![
                EditOp::Add { x: 1.0, y: 2.0 },
                EditOp::SelectMidpoint { index: 1 },
                EditOp::CommitMidpoint,
                EditOp::ClearSelection,
            ]
        );
    }

    #[test]
    fn unknown_op_is_a_parse_error() {
        let err = EditScript::from_json(r#"{ "ops": [ { "op": "explode" } ] }"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn drawing_and_undo_last_point() {
        let script = EditScript::from_json(
            r#"{ "ops": [ { "op": "place", "x": 0, "y": 0 },
                          { "op": "place", "x": 4, "y": 0 },
                          { "op": "place", "x": 9, "y": 9 },
                          { "op": "delete" },
                          { "op": "place", "x": 4, "y": 4 } ] }"#,
        )
        .unwrap();

        let session = script.run(GeometryKind::Polygon).unwrap();
        assert_eq!(
            session.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 4.0)
            ]
        );
    }

    #[test]
    fn midpoint_then_tap_inserts_vertex() {
        let script = EditScript {
            geometry: None,
            ops: vec![
                EditOp::Add { x: 0.0, y: 0.0 },
                EditOp::Add { x: 10.0, y: 0.0 },
                EditOp::SelectMidpoint { index: 1 },
                EditOp::Place { x: 5.0, y: 3.0 },
            ],
        };

        let session = script.run(GeometryKind::Polyline).unwrap();
        assert_eq!(session.point(1).unwrap(), Point::new(5.0, 3.0));
        assert!(session.selection().is_none());
    }

    #[test]
    fn cancel_restores_snapshot() {
        let script = EditScript {
            geometry: None,
            ops: vec![
                EditOp::Add { x: 0.0, y: 0.0 },
                EditOp::Add { x: 1.0, y: 1.0 },
                EditOp::Snapshot,
                EditOp::SelectVertex { index: 0 },
                EditOp::Move { index: 0, x: 7.0, y: 7.0 },
                EditOp::Delete,
                EditOp::Cancel,
            ],
        };

        let session = script.run(GeometryKind::Polygon).unwrap();
        assert_eq!(session.points(), &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(session.selection().is_none());
    }

    #[test]
    fn commit_keeps_edits() {
        let script = EditScript {
            geometry: None,
            ops: vec![
                EditOp::Snapshot,
                EditOp::Add { x: 2.0, y: 2.0 },
                EditOp::Commit,
            ],
        };

        let session = script.run(GeometryKind::Polygon).unwrap();
        assert_eq!(session.point_count(), 1);
    }

    #[test]
    fn cancel_without_snapshot_fails() {
        let script = EditScript {
            geometry: None,
            ops: vec![EditOp::Add { x: 0.0, y: 0.0 }, EditOp::Cancel],
        };

        assert!(matches!(
            script.run(GeometryKind::Polygon),
            Err(ScriptError::NoSnapshot { position: 1 })
        ));
    }

    #[test]
    fn failing_op_reports_position() {
        let script = EditScript {
            geometry: None,
            ops: vec![EditOp::Add { x: 0.0, y: 0.0 }, EditOp::Remove { index: 4 }],
        };

        match script.run(GeometryKind::Polygon) {
            Err(ScriptError::Op { position, source }) => {
                assert_eq!(position, 1);
                assert_eq!(source, EditError::IndexOutOfRange { index: 4, len: 1 });
            }
            other => panic!("expected op error, got {other:?}"),
        }
    }

    #[test]
    fn delete_on_empty_script_fails() {
        let script = EditScript {
            geometry: None,
            ops: vec![EditOp::Delete],
        };
        assert!(script.run(GeometryKind::Polyline).is_err());
    }

    #[test]
    fn report_describes_session() {
        let mut session = EditingSession::new();
        session.add_all_points([Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
        session.select_midpoint(1);

        let report = SessionReport::new(&session, GeometryKind::Polyline);
        assert_eq!(report.points.len(), 2);
        assert_eq!(report.midpoints.len(), 1);
        assert_eq!(report.selection, Selection::Midpoint(1));
        assert_eq!(report.inserting_index, 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["geometry"], "polyline");
        assert_eq!(json["selection"]["kind"], "midpoint");
        assert_eq!(json["selection"]["index"], 1);
    }

    #[test]
    fn report_serializes_empty_selection() {
        let report = SessionReport::new(&EditingSession::new(), GeometryKind::Polygon);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["selection"], serde_json::json!({ "kind": "none" }));
    }
}
