// Copyright 2025 the Vertex Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex Edit: replay an edit script and print the resulting session

use anyhow::{Context, Result};
use std::path::PathBuf;
use vertex_edit::{EditScript, SessionReport, Settings};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: vertex-edit <script.json> [settings.toml]");
        std::process::exit(2);
    }

    let script_path = PathBuf::from(&args[1]);
    let settings_path = args.get(2).map(PathBuf::from);
    let loaded = match &settings_path {
        Some(path) => Settings::try_load(path),
        None => Ok(None),
    };
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => Settings::default(),
    };

    // Settings are read before the subscriber exists, so report on them here
    vertex_edit::init_tracing(&settings.log_filter);
    match (&settings_path, loaded) {
        (Some(path), Ok(Some(_))) => tracing::info!("Loaded settings from {}", path.display()),
        (Some(path), Ok(None)) => {
            tracing::info!("No settings file at {}, using defaults", path.display());
        }
        (_, Err(e)) => tracing::warn!("{:#}, using defaults", e),
        (None, Ok(_)) => {}
    }
    tracing::info!("Replaying edit script: {}", script_path.display());

    let json = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {}", script_path.display()))?;
    let script = EditScript::from_json(&json)
        .with_context(|| format!("Invalid edit script {}", script_path.display()))?;

    let geometry = script.geometry.unwrap_or(settings.geometry);
    let session = script.run(geometry).context("Edit script failed")?;
    tracing::info!("Replay finished with {} points", session.point_count());

    let report = SessionReport::new(&session, geometry);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
