// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gituml-log

use thiserror::Error;

/// Errors that can occur while parsing git log output
///
/// A failed parse never returns a partial history; the first bad line
/// aborts the whole run, because a record with an unparseable hash would
/// corrupt node deduplication downstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Header line with too few fields or an empty hash field
    #[error("malformed header line: {line:?}")]
    MalformedHeader {
        /// The raw line that failed header tokenization
        line: String,
    },

    /// File line encountered before any commit header opened a record
    #[error("file entry with no preceding commit header: {line:?}")]
    OrphanFile {
        /// The raw line that had no commit to attach to
        line: String,
    },
}
