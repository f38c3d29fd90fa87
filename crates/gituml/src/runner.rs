// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Conversion pipeline
//!
//! Runs the whole conversion: acquire a working copy, query the history
//! window, parse it, build the PlantUML document, and write it out. Any
//! failing stage aborts the run; no partial document is ever written.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use gituml_git::HistorySource;

use crate::config::Config;

/// Execute one conversion run for the given configuration
///
/// # Errors
///
/// Returns the first stage failure: acquisition, history query, parse,
/// or writing the output document.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let copy = gituml_git::acquire(&config.repository)
        .with_context(|| format!("failed to acquire repository {}", config.repository))?;

    let raw = HistorySource::new(copy.path())
        .query(config.since)
        .context("failed to query commit history")?;

    let commits = gituml_log::parse_with(&raw, &config.parse_options())
        .context("failed to parse git log output")?;
    info!(commits = commits.len(), since = %config.since, "parsed history window");

    let document = gituml_graph::build(&commits);

    let output = config.output_path();
    write_document(&output, &document)?;
    info!(path = %output.display(), "wrote PlantUML document");

    Ok(())
}

/// Write the finished document, overwriting any existing file
fn write_document(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write document to {}", path.display()))
}
