// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for snapshot storage and triage.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::SnapshotRecord;
use crate::triage::Phase;

/// Errors from reading, writing or discovering snapshot files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to {action} {}: {source}", .path.display())]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {}: {reason}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        reason: FormatError,
    },

    #[error("Failed to discover snapshots under {}: {source}", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: DiscoveryError,
    },
}

impl SnapshotError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while walking the snapshot tree.
    pub fn is_discovery(&self) -> bool {
        matches!(self, SnapshotError::Discovery { .. })
    }
}

/// Why a snapshot file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("missing opening `---` delimiter")]
    MissingOpeningDelimiter,

    #[error("missing `source:` header")]
    MissingSource,

    #[error("missing `assertion_line:` header")]
    MissingAssertionLine,

    #[error("`assertion_line` is not an integer: {0:?}")]
    InvalidAssertionLine(String),

    #[error("missing closing `---` delimiter")]
    MissingClosingDelimiter,
}

/// Failure of the directory walk behind discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0}")]
    Walk(#[from] glob::GlobError),
}

/// A batch operation that stopped at its first failure.
///
/// Records processed before the failure stay processed; nothing is rolled
/// back.
#[derive(Debug, Error)]
#[error("Stopped after {} snapshot(s): {source}", .processed.len())]
pub struct BatchError {
    pub processed: Vec<SnapshotRecord>,
    #[source]
    pub source: SnapshotError,
}

/// Failure of one step of an interactive review.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Triage(#[from] TriageError),
}

/// An operation was requested in a phase that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriageError {
    #[error("Cannot {operation} while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },
}
