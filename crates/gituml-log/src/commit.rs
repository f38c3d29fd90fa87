//! Commit record types and operations

use serde::{Deserialize, Serialize};

/// One entry of the queried history window
///
/// Records are produced solely by [`crate::parse`] and held immutably for
/// the duration of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash, never empty
    pub sha: String,
    /// Single-line commit summary (may be empty)
    pub summary: String,
    /// Parent commit hashes; empty for a root commit
    pub parents: Vec<String>,
    /// Paths touched by this commit, in log order, duplicates preserved
    pub files: Vec<String>,
}

impl CommitRecord {
    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// Check if this is a merge commit (has multiple parents)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
