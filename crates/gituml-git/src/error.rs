// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gituml-git

use thiserror::Error;

/// Errors that can occur while acquiring a repository or querying its log
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository could not be made available locally
    #[error("Failed to acquire repository {location}: {reason}")]
    Acquisition {
        /// The path or URL that was requested
        location: String,
        /// What went wrong opening or cloning it
        reason: String,
    },

    /// History query against the working copy failed
    #[error("git log query failed in {path}: {reason}")]
    Query {
        /// The working copy the query ran in
        path: String,
        /// The child process error or its captured stderr
        reason: String,
    },
}
