// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gituml-graph: PlantUML graph building for gituml
//!
//! This library crate turns an ordered sequence of parsed commit records
//! into a PlantUML document connecting commits, their parent commits, and
//! the files they touched.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use gituml_graph::build;
//! use gituml_log::parse;
//!
//! let commits = parse("h2|add feature|h1\nsrc/lib.rs\n\nh1|initial|\nsrc/lib.rs")
//!     .expect("parse log");
//! let document = build(&commits);
//!
//! assert!(document.starts_with("@startuml"));
//! assert!(document.ends_with("@enduml"));
//! ```

pub mod arena;
pub mod builder;

pub use arena::NodeArena;
pub use builder::{DOCUMENT_END, DOCUMENT_START, build};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::arena::NodeArena;
    pub use crate::builder::build;
}
