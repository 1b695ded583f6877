// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk snapshot storage.
//!
//! Every mutation is a single atomic rename or delete. There is no file
//! locking: a concurrent writer wins if it touches a file between
//! discovery and the action on it, and the loser sees a file system error.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::diff;
use crate::error::{DiscoveryError, SnapshotError};
use crate::format;
use crate::record::{
    self, file_name_for, is_pending_path, name_from_path, SnapshotRecord, SourceLocation, Status,
    PENDING_SUFFIX, SNAPSHOT_EXTENSION,
};

/// Build output directories are never searched for pending snapshots.
const SKIPPED_DIR: &str = "target";

/// Snapshot files under one root directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
    /// Extra discovery roots outside `root`
    search_roots: Vec<PathBuf>,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            search_roots: Vec::new(),
        }
    }

    /// Also discover under `dir`. Directories inside the root are already
    /// covered and add nothing.
    pub fn with_search_root(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if !dir.starts_with(&self.root) && !self.search_roots.contains(&dir) {
            self.search_roots.push(dir);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Baseline path of the record called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(file_name_for(name))
    }

    /// Write the pending file for the baseline at `path`.
    ///
    /// Always creates or replaces `<path>.new`; an existing baseline is never
    /// touched.
    pub fn write(
        &self,
        path: &Path,
        name: &str,
        content: &str,
        source: SourceLocation,
    ) -> Result<SnapshotRecord, SnapshotError> {
        let pending = record::pending_path(path);
        let dir = match pending.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| SnapshotError::fs("create directory", &dir, e))?;

        let mut file =
            NamedTempFile::new_in(&dir).map_err(|e| SnapshotError::fs("write", &pending, e))?;
        file.write_all(format::encode(&source, content).as_bytes())
            .map_err(|e| SnapshotError::fs("write", &pending, e))?;
        file.persist(&pending)
            .map_err(|e| SnapshotError::fs("write", &pending, e.error))?;

        tracing::debug!(path = %pending.display(), name, "wrote pending snapshot");
        Ok(SnapshotRecord {
            name: name.to_string(),
            source,
            content: content.to_string(),
            path: pending,
            status: Status::Pending,
        })
    }

    /// Read and parse a snapshot file.
    pub fn read(&self, path: &Path) -> Result<SnapshotRecord, SnapshotError> {
        let text = fs::read_to_string(path).map_err(|e| SnapshotError::fs("read", path, e))?;
        let (source, content) =
            format::decode(&text).map_err(|reason| SnapshotError::Format {
                path: path.to_path_buf(),
                reason,
            })?;
        let status = if is_pending_path(path) {
            Status::Pending
        } else {
            Status::Baseline
        };

        tracing::debug!(path = %path.display(), ?status, "read snapshot");
        Ok(SnapshotRecord {
            name: name_from_path(path),
            source,
            content,
            path: path.to_path_buf(),
            status,
        })
    }

    /// Promote a pending record to its baseline, replacing any previous one.
    ///
    /// A baseline record is left alone.
    pub fn accept(&self, record: &SnapshotRecord) -> Result<(), SnapshotError> {
        if !record.is_pending() {
            return Ok(());
        }
        let baseline = record.baseline_path();
        if baseline == record.path {
            return Err(SnapshotError::fs(
                "rename",
                &record.path,
                io::Error::new(ErrorKind::InvalidInput, "not a pending snapshot path"),
            ));
        }
        fs::rename(&record.path, &baseline)
            .map_err(|e| SnapshotError::fs("rename", &record.path, e))?;
        tracing::info!(name = %record.name, path = %baseline.display(), "accepted snapshot");
        Ok(())
    }

    /// Delete a pending record. A baseline record or an already deleted
    /// pending file is left alone.
    pub fn reject(&self, record: &SnapshotRecord) -> Result<(), SnapshotError> {
        if !record.is_pending() {
            return Ok(());
        }
        match fs::remove_file(&record.path) {
            Ok(()) => {
                tracing::info!(name = %record.name, "rejected snapshot");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %record.path.display(), "pending snapshot already gone");
                Ok(())
            }
            Err(e) => Err(SnapshotError::fs("delete", &record.path, e)),
        }
    }

    /// Every pending snapshot under the root and the extra search roots,
    /// sorted by path. `target` directories are skipped.
    pub fn discover(&self) -> Result<Vec<PathBuf>, SnapshotError> {
        let mut paths = Vec::new();
        for root in std::iter::once(&self.root).chain(&self.search_roots) {
            discover_under(root, &mut paths)?;
        }
        paths.sort();
        paths.dedup();
        tracing::debug!(root = %self.root.display(), count = paths.len(), "discovered pending snapshots");
        Ok(paths)
    }

    /// The accepted baseline next to a pending record, if there is one.
    pub fn baseline_for(
        &self,
        record: &SnapshotRecord,
    ) -> Result<Option<SnapshotRecord>, SnapshotError> {
        if !record.is_pending() {
            return Ok(None);
        }
        let path = record.baseline_path();
        match self.read(&path) {
            Ok(baseline) => Ok(Some(baseline)),
            Err(SnapshotError::FileSystem { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Unified diff from the baseline to a pending record.
    ///
    /// Without a baseline every line is an addition; a baseline record has
    /// no diff.
    pub fn diff(&self, record: &SnapshotRecord) -> Result<String, SnapshotError> {
        if !record.is_pending() {
            return Ok(String::new());
        }
        let old = self
            .baseline_for(record)?
            .map(|baseline| baseline.content)
            .unwrap_or_default();
        Ok(diff::unified(&old, &record.content))
    }

    /// Whether a baseline exists and differs from the pending content.
    ///
    /// False for a first-time snapshot, which still needs triage.
    pub fn has_difference(&self, record: &SnapshotRecord) -> Result<bool, SnapshotError> {
        Ok(self
            .baseline_for(record)?
            .is_some_and(|baseline| !diff::edits(&baseline.content, &record.content).is_empty()))
    }
}

fn discover_under(root: &Path, paths: &mut Vec<PathBuf>) -> Result<(), SnapshotError> {
    let discovery = |source: DiscoveryError| SnapshotError::Discovery {
        root: root.to_path_buf(),
        source,
    };
    let pattern = format!(
        "{}/**/*{SNAPSHOT_EXTENSION}{PENDING_SUFFIX}",
        glob::Pattern::escape(&root.to_string_lossy())
    );

    for entry in glob::glob(&pattern).map_err(|e| discovery(e.into()))? {
        let path = entry.map_err(|e| discovery(e.into()))?;
        if !in_skipped_dir(root, &path) {
            paths.push(path);
        }
    }
    Ok(())
}

fn in_skipped_dir(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root).is_ok_and(|relative| {
        relative
            .parent()
            .is_some_and(|dir| dir.components().any(|c| c.as_os_str() == SKIPPED_DIR))
    })
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
