// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model: vertex list, selection and derived geometry

pub mod error;
pub mod geometry;
pub mod selection;
pub mod session;

pub use error::{EditError, EditResult};
pub use geometry::{GeometryKind, Midpoint};
pub use selection::Selection;
pub use session::{EditingSession, Placement};
