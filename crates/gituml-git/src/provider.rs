// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository provider
//!
//! Makes the requested repository available as a local working copy. A
//! location that already exists on disk is opened in place; anything else
//! is treated as a URL and cloned into a scratch directory that lives as
//! long as the returned [`WorkingCopy`].

use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;
use tracing::info;

use crate::error::GitError;

/// A locally available working copy of the requested repository
///
/// When the copy was cloned, the checkout lives in a scratch directory
/// owned by this value and is removed on drop.
pub struct WorkingCopy {
    path: PathBuf,
    scratch: Option<TempDir>,
}

impl WorkingCopy {
    /// Path of the working copy on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this copy was cloned into a scratch directory
    #[must_use]
    pub fn is_scratch(&self) -> bool {
        self.scratch.is_some()
    }
}

/// Make the repository at `location` available locally
///
/// An existing path is opened in place without cloning; any other
/// location is cloned with git2 into a temporary directory.
///
/// # Errors
///
/// Returns [`GitError::Acquisition`] if the path is not a git repository
/// or the clone fails.
pub fn acquire(location: &str) -> Result<WorkingCopy, GitError> {
    let candidate = Path::new(location);
    if candidate.exists() {
        Repository::open(candidate).map_err(|e| GitError::Acquisition {
            location: location.to_string(),
            reason: e.message().to_string(),
        })?;
        info!(path = %candidate.display(), "using existing working copy");
        return Ok(WorkingCopy {
            path: candidate.to_path_buf(),
            scratch: None,
        });
    }

    let scratch = TempDir::new().map_err(|e| GitError::Acquisition {
        location: location.to_string(),
        reason: e.to_string(),
    })?;
    info!(url = location, dest = %scratch.path().display(), "cloning repository");

    git2::build::RepoBuilder::new()
        .clone(location, scratch.path())
        .map_err(|e| GitError::Acquisition {
            location: location.to_string(),
            reason: e.message().to_string(),
        })?;

    Ok(WorkingCopy {
        path: scratch.path().to_path_buf(),
        scratch: Some(scratch),
    })
}
