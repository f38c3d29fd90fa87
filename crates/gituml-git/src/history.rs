// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History source
//!
//! Runs `git log --since=<date> --name-only --pretty=format:%H|%s|%P`
//! against a working copy and returns the captured stdout untouched. The
//! line format is what [`gituml_log::parse`] consumes; this module never
//! interprets it.
//!
//! [`gituml_log::parse`]: https://docs.rs/gituml-log

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::GitError;

/// Pretty format handed to `git log`: hash, summary, parent list
pub const LOG_FORMAT: &str = "%H|%s|%P";

/// Queries the commit history of one working copy
pub struct HistorySource {
    path: PathBuf,
}

impl HistorySource {
    /// Create a history source for the working copy at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The working copy this source queries
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch the raw log text for commits since `since` (inclusive)
    ///
    /// An empty window produces empty text, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Query`] if the git child process cannot be
    /// spawned or exits unsuccessfully (for example in a repository with
    /// no commits at all); the captured stderr is carried in the error.
    pub fn query(&self, since: NaiveDate) -> Result<String, GitError> {
        let output = Command::new("git")
            .arg("log")
            .arg(format!("--since={}", since.format("%Y-%m-%d")))
            .arg("--name-only")
            .arg(format!("--pretty=format:{}", LOG_FORMAT))
            .current_dir(&self.path)
            .output()
            .map_err(|e| GitError::Query {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GitError::Query {
                path: self.path.display().to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = raw.len(), since = %since, "queried git log");
        Ok(raw)
    }
}
