// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot records and the file naming rule.
//!
//! A record named `a::b::c` is stored as `a__b__c.snap`; its pending
//! counterpart is `a__b__c.snap.new` in the same directory.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Extension of accepted snapshot files.
pub const SNAPSHOT_EXTENSION: &str = ".snap";

/// Suffix appended to a baseline path to form its pending path.
pub const PENDING_SUFFIX: &str = ".new";

const NAME_SEPARATOR: &str = "::";
const FILE_SEPARATOR: &str = "__";

/// Where in the test sources a snapshot was asserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Lifecycle stage of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The accepted reference, `<name>.snap`.
    Baseline,
    /// Awaiting triage, `<name>.snap.new`.
    Pending,
}

/// One snapshot file as read from or written to disk.
///
/// The record is a value: accepting or rejecting acts on the file, after
/// which this copy is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRecord {
    pub name: String,
    pub source: SourceLocation,
    pub content: String,
    pub path: PathBuf,
    pub status: Status,
}

impl SnapshotRecord {
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Path of the baseline this record belongs to.
    pub fn baseline_path(&self) -> PathBuf {
        baseline_path(&self.path)
    }
}

/// File name for a record name: `a::b` becomes `a__b.snap`.
pub fn file_name_for(name: &str) -> String {
    format!(
        "{}{SNAPSHOT_EXTENSION}",
        name.replace(NAME_SEPARATOR, FILE_SEPARATOR)
    )
}

/// Whether `path` names a pending file: any file name ending in `.new`.
///
/// Matches [`pending_path`], which appends the suffix to whatever baseline
/// path it is given.
pub fn is_pending_path(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        name.to_string_lossy()
            .strip_suffix(PENDING_SUFFIX)
            .is_some_and(|stem| !stem.is_empty())
    })
}

/// The pending path for a baseline path.
pub fn pending_path(baseline: &Path) -> PathBuf {
    let mut path = baseline.as_os_str().to_owned();
    path.push(PENDING_SUFFIX);
    PathBuf::from(path)
}

/// The baseline path for a pending path; other paths are returned as is.
pub fn baseline_path(path: &Path) -> PathBuf {
    if !is_pending_path(path) {
        return path.to_path_buf();
    }
    let text = path.as_os_str().to_string_lossy();
    match text.strip_suffix(PENDING_SUFFIX) {
        Some(stripped) => PathBuf::from(stripped),
        None => path.to_path_buf(),
    }
}

/// Record name for a snapshot file, baseline or pending alike.
///
/// Takes the base name, strips one `.new`, then one `.snap`, then turns
/// every `__` into `::`.
pub fn name_from_path(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = base.strip_suffix(PENDING_SUFFIX).unwrap_or(&base);
    let base = base.strip_suffix(SNAPSHOT_EXTENSION).unwrap_or(base);
    base.replace(FILE_SEPARATOR, NAME_SEPARATOR)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
