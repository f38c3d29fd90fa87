// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gituml-git: Repository acquisition and history queries for gituml
//!
//! This library crate makes a working copy of a repository available
//! locally (opening a path in place or cloning a URL into a scratch
//! directory) and queries its commit history as the raw line-oriented
//! text the gituml log parser consumes.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use gituml_git::{HistorySource, acquire};
//!
//! let copy = acquire("https://example.com/some/repo.git").expect("acquire repo");
//! let since = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
//! let raw = HistorySource::new(copy.path()).query(since).expect("query log");
//!
//! println!("{} bytes of log text", raw.len());
//! ```

pub mod error;
pub mod history;
pub mod provider;

pub use error::GitError;
pub use history::HistorySource;
pub use provider::{WorkingCopy, acquire};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::history::HistorySource;
    pub use crate::provider::{WorkingCopy, acquire};
}
