// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex Edit: vertex and midpoint editing state for interactive line and
//! polygon editing on a map canvas.
//!
//! The [`EditingSession`] holds the vertex list and selection of one
//! geometry under edit. Hit-testing, rendering and coordinate conversion
//! belong to the caller; the session only tracks what exists, in what
//! order, and what is selected.

pub mod editing;
pub mod script;
pub mod settings;

pub use editing::{
    EditError, EditResult, EditingSession, GeometryKind, Midpoint, Placement, Selection,
};
pub use script::{EditOp, EditScript, ScriptError, SessionReport};
pub use settings::Settings;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// RUST_LOG takes precedence over `default_filter`. Calling this more than
/// once leaves the first subscriber in place.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
