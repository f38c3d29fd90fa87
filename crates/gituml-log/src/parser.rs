// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git log parsing
//!
//! This module parses the raw text emitted by
//! `git log --name-only --pretty=format:%H|%s|%P` into [`CommitRecord`]s.
//!
//! The format is line-oriented and irregular: a line containing the `|`
//! delimiter is a commit header (`hash|summary|parent-list`), any other
//! non-empty line is a file path belonging to the most recently opened
//! commit, and blank lines are separators with no semantic meaning.

use tracing::{debug, warn};

use crate::commit::CommitRecord;
use crate::error::ParseError;

/// Field delimiter in header lines, matching the `%H|%s|%P` pretty format
const DELIMITER: char = '|';

/// Configuration for parsing log output
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Discard file lines that precede any commit header instead of
    /// failing with [`ParseError::OrphanFile`]
    pub lenient_orphans: bool,
}

impl ParseOptions {
    /// Create the default strict options
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Tolerate file lines that precede any commit header
    #[must_use]
    pub fn lenient_orphans(mut self) -> Self {
        self.lenient_orphans = true;
        self
    }
}

/// Parse raw `git log` text into commit records with strict options
///
/// Records are returned in the order the log emits them, most recent
/// first. Empty input yields an empty sequence.
///
/// # Errors
///
/// Returns [`ParseError`] on a malformed header line or on a file line
/// that precedes any header. A failed parse returns no partial history.
pub fn parse(raw: &str) -> Result<Vec<CommitRecord>, ParseError> {
    parse_with(raw, &ParseOptions::default())
}

/// Parse raw `git log` text into commit records
///
/// # Errors
///
/// Returns [`ParseError`] on a malformed header line, or on an orphan
/// file line unless `options.lenient_orphans` is set.
pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Vec<CommitRecord>, ParseError> {
    let mut acc = Accumulator::new();

    for line in raw.trim().lines() {
        if line.trim().is_empty() {
            // Blank lines separate log entries; they never close a record.
            continue;
        }
        if line.contains(DELIMITER) {
            acc.open(parse_header(line)?);
        } else {
            acc.file(line, options)?;
        }
    }

    let commits = acc.finish();
    debug!(commits = commits.len(), "parsed git log output");
    Ok(commits)
}

/// Tokenize one header line into a fresh record
///
/// The split is capped at three fields so a summary may itself contain
/// the delimiter; everything past the second delimiter is the
/// whitespace-separated parent list.
fn parse_header(line: &str) -> Result<CommitRecord, ParseError> {
    let fields: Vec<&str> = line.splitn(3, DELIMITER).collect();
    if fields.len() < 2 || fields[0].trim().is_empty() {
        return Err(ParseError::MalformedHeader {
            line: line.to_string(),
        });
    }

    let parents = fields
        .get(2)
        .map(|list| list.split_whitespace().map(String::from).collect())
        .unwrap_or_default();

    Ok(CommitRecord {
        sha: fields[0].trim().to_string(),
        summary: fields[1].to_string(),
        parents,
        files: Vec::new(),
    })
}

/// Two-state accumulator over the line stream
///
/// Either no record is open (before the first header) or exactly one is;
/// a header line closes the open record and opens the next, and end of
/// input flushes the last one.
enum State {
    Idle,
    Open(CommitRecord),
}

struct Accumulator {
    commits: Vec<CommitRecord>,
    state: State,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            commits: Vec::new(),
            state: State::Idle,
        }
    }

    fn open(&mut self, record: CommitRecord) {
        if let State::Open(previous) = std::mem::replace(&mut self.state, State::Open(record)) {
            self.commits.push(previous);
        }
    }

    fn file(&mut self, line: &str, options: &ParseOptions) -> Result<(), ParseError> {
        match &mut self.state {
            State::Open(record) => {
                record.files.push(line.trim().to_string());
                Ok(())
            }
            State::Idle if options.lenient_orphans => {
                warn!(line, "discarding file entry with no open commit");
                Ok(())
            }
            State::Idle => Err(ParseError::OrphanFile {
                line: line.to_string(),
            }),
        }
    }

    fn finish(self) -> Vec<CommitRecord> {
        let mut commits = self.commits;
        if let State::Open(record) = self.state {
            commits.push(record);
        }
        commits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("").expect("parse"), vec![]);
        assert_eq!(parse("   \n\n  ").expect("parse"), vec![]);
    }

    #[test]
    fn test_parse_two_commit_scenario() {
        let raw = "h1|fix bug|\nfile.txt\n\nh2|add feature|h1\nfile.txt\nother.txt";
        let commits = parse(raw).expect("parse");

        assert_eq!(
            commits,
            vec![
                CommitRecord {
                    sha: "h1".to_string(),
                    summary: "fix bug".to_string(),
                    parents: vec![],
                    files: vec!["file.txt".to_string()],
                },
                CommitRecord {
                    sha: "h2".to_string(),
                    summary: "add feature".to_string(),
                    parents: vec!["h1".to_string()],
                    files: vec!["file.txt".to_string(), "other.txt".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_parse_preserves_log_order() {
        let raw = "c3|third|c2\nc2|second|c1\nc1|first|";
        let commits = parse(raw).expect("parse");
        let shas: Vec<&str> = commits.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["c3", "c2", "c1"]);
    }

    #[test]
    fn test_parse_flushes_trailing_commit() {
        let raw = "h1|only commit|\na.rs\nb.rs";
        let commits = parse(raw).expect("parse");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].files, vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn test_parse_blank_lines_do_not_close_record() {
        let raw = "h1|msg|\na.rs\n\n\nb.rs";
        let commits = parse(raw).expect("parse");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].files, vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn test_parse_merge_commit_parents() {
        let raw = "m1|merge branch|p1 p2\nconflicted.rs";
        let commits = parse(raw).expect("parse");
        assert_eq!(commits[0].parents, vec!["p1", "p2"]);
        assert!(commits[0].is_merge());
    }

    #[test]
    fn test_parse_root_commit_has_no_parents() {
        // %P renders as an empty trailing field for a root commit
        let commits = parse("r1|initial|").expect("parse");
        assert_eq!(commits[0].parents, Vec::<String>::new());
        assert!(commits[0].is_root());
    }

    #[test]
    fn test_parse_two_field_header() {
        // No trailing delimiter at all still yields an empty parent list
        let commits = parse("h1|just a summary").expect("parse");
        assert_eq!(commits[0].summary, "just a summary");
        assert!(commits[0].parents.is_empty());
    }

    #[test]
    fn test_parse_empty_summary() {
        let commits = parse("h1||p1").expect("parse");
        assert_eq!(commits[0].summary, "");
        assert_eq!(commits[0].parents, vec!["p1"]);
    }

    #[test]
    fn test_parse_file_lines_are_trimmed() {
        let commits = parse("h1|msg|\n  src/lib.rs  ").expect("parse");
        assert_eq!(commits[0].files, vec!["src/lib.rs"]);
    }

    #[test]
    fn test_parse_duplicate_files_preserved() {
        let commits = parse("h1|msg|\na.rs\na.rs").expect("parse");
        assert_eq!(commits[0].files, vec!["a.rs", "a.rs"]);
    }

    #[test]
    fn test_parse_zero_file_commit() {
        let raw = "h2|empty commit|h1\nh1|touched one|\nfile.rs";
        let commits = parse(raw).expect("parse");
        assert_eq!(commits[0].files, Vec::<String>::new());
        assert_eq!(commits[1].files, vec!["file.rs"]);
    }

    #[test]
    fn test_parse_malformed_header_empty_hash() {
        let result = parse("|no hash here|p1");
        assert_eq!(
            result,
            Err(ParseError::MalformedHeader {
                line: "|no hash here|p1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_orphan_file_line_is_error() {
        let result = parse("stray.rs\nh1|msg|");
        assert_eq!(
            result,
            Err(ParseError::OrphanFile {
                line: "stray.rs".to_string()
            })
        );
    }

    #[test]
    fn test_parse_orphan_file_line_lenient() {
        let options = ParseOptions::strict().lenient_orphans();
        let commits = parse_with("stray.rs\nh1|msg|\na.rs", &options).expect("parse");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].files, vec!["a.rs"]);
    }

    #[test]
    fn test_parse_failure_returns_no_partial_history() {
        // One good commit followed by a bad header still fails outright
        let result = parse("h1|good|\na.rs\n|bad");
        assert!(result.is_err());
    }
}
