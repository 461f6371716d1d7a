//! Shared data models for lint targets, engine results, and run summaries.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A path wrapped for submission to the lint engine.
pub struct Target {
    pub path: String,
}

impl Target {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
/// Position of a lint inside its source file, ordered line-first.
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Serialize)]
/// A single rule violation reported by the lint engine.
///
/// The scheduler treats these as opaque: it sorts by `(filename, location)`
/// and forwards them to the reporter, nothing else.
pub struct Lint {
    pub filename: String,
    pub location: Location,
    pub rule: String,
    pub severity: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Counts for a single completed run, used by the summary log line.
pub struct RunSummary {
    pub files: usize,
    pub lints: usize,
}
