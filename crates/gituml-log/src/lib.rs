// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gituml-log: Git log parsing for gituml
//!
//! This library crate parses the line-oriented output of
//! `git log --name-only --pretty=format:%H|%s|%P` into structured commit
//! records for consumption by the gituml graph builder.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use gituml_log::parse;
//!
//! let raw = "4b825dc6|initial commit|\nREADME.md\nsrc/main.rs";
//! let commits = parse(raw).expect("parse log");
//!
//! assert_eq!(commits.len(), 1);
//! assert_eq!(commits[0].summary, "initial commit");
//! assert_eq!(commits[0].files, vec!["README.md", "src/main.rs"]);
//! ```

pub mod commit;
pub mod error;
pub mod parser;

pub use commit::CommitRecord;
pub use error::ParseError;
pub use parser::{ParseOptions, parse, parse_with};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::CommitRecord;
    pub use crate::error::ParseError;
    pub use crate::parser::{ParseOptions, parse, parse_with};
}
