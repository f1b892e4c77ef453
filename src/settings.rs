// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! Defaults live in the constants below. A TOML settings file can override
//! them; fields missing from the file keep their defaults.

use crate::editing::GeometryKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

// ============================================================================
// EDITING SETTINGS
// ============================================================================
/// Geometry kind used when neither the script nor the settings file names one
const DEFAULT_GEOMETRY: GeometryKind = GeometryKind::Polygon;

// ============================================================================
// LOGGING SETTINGS
// ============================================================================
/// Tracing filter used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "vertex_edit=info";

// ============================================================================
// PUBLIC API
// ============================================================================

/// Editing defaults
pub mod editing {
    use crate::editing::GeometryKind;

    /// Default geometry kind for new sessions
    pub const GEOMETRY: GeometryKind = super::DEFAULT_GEOMETRY;
}

/// Logging defaults
pub mod logging {
    /// Default tracing filter directive
    pub const FILTER: &str = super::DEFAULT_LOG_FILTER;
}

/// Settings loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Geometry kind for scripts that don't name one
    pub geometry: GeometryKind,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geometry: editing::GEOMETRY,
            log_filter: logging::FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a TOML file.
    ///
    /// Returns `Ok(None)` when the file does not exist. Any other read
    /// failure, or invalid TOML, is an error.
    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        let settings = toml::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        Ok(Some(settings))
    }

    /// Load settings from a TOML file, falling back to defaults when the
    /// file is missing, unreadable or malformed
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(settings)) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                tracing::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Write settings as TOML
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }
}
