// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! PlantUML document construction
//!
//! The builder consumes commit records in the order the log emits them
//! (newest first) and renders the document oldest-to-newest, so an edge
//! never references a node declared later in the text. Parent edges are
//! drawn in a second pass once every commit node exists, because inside a
//! non-contiguous window a parent can surface after its child.

use tracing::debug;

use gituml_log::CommitRecord;

use crate::arena::NodeArena;

/// Literal first line of every document
pub const DOCUMENT_START: &str = "@startuml";

/// Literal last line of every document
pub const DOCUMENT_END: &str = "@enduml";

/// Fixed style directives emitted directly after the opening marker
const STYLE_BLOCK: [&str; 3] = ["skinparam rectangle {", "   BackgroundColor #FDF6E3", "}"];

/// Build the PlantUML document for a newest-first commit sequence
///
/// Commit nodes are named `Commit1..` in processing (oldest-first) order
/// and file nodes `File1..` in first-seen order; equal hashes and equal
/// paths always reuse their node, declared exactly once. Duplicate paths
/// within one commit draw duplicate touches edges, reflecting the record
/// as given. A parent hash with no node in the window draws no edge; the
/// graph is a subgraph bounded by the date filter, not an error.
///
/// An empty input yields the preamble immediately followed by the
/// terminator.
#[must_use]
pub fn build(commits: &[CommitRecord]) -> String {
    let mut doc: Vec<String> = Vec::with_capacity(commits.len() * 3 + 5);
    doc.push(DOCUMENT_START.to_string());
    doc.extend(STYLE_BLOCK.iter().map(ToString::to_string));

    let mut commit_nodes = NodeArena::new("Commit");
    let mut file_nodes = NodeArena::new("File");

    for commit in commits.iter().rev() {
        let (commit_id, fresh) = commit_nodes.intern(&commit.sha);
        if fresh {
            doc.push(format!("rectangle \"{}\" as {}", commit.summary, commit_id));
        }
        for path in &commit.files {
            let (file_id, fresh) = file_nodes.intern(path);
            if fresh {
                doc.push(format!("rectangle \"{}\" as {}", path, file_id));
            }
            doc.push(format!("{} --> {}", commit_id, file_id));
        }
    }

    for commit in commits.iter().rev() {
        // Every commit was interned in the first pass
        let Some(child_id) = commit_nodes.get(&commit.sha) else {
            continue;
        };
        for parent in &commit.parents {
            if let Some(parent_id) = commit_nodes.get(parent) {
                doc.push(format!("{} <|-- {}", parent_id, child_id));
            }
        }
    }

    doc.push(DOCUMENT_END.to_string());
    debug!(
        commit_nodes = commit_nodes.len(),
        file_nodes = file_nodes.len(),
        lines = doc.len(),
        "built graph document"
    );
    doc.join("\n")
}
