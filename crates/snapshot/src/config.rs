// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where snapshots live.
//!
//! Read from the `[snapshots]` table of `shutter.toml` at the project root:
//!
//! ```toml
//! [snapshots]
//! dir = "tests/snapshots"
//! ```
//!
//! `SHUTTER_SNAPSHOT_DIR` overrides the file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "shutter.toml";

/// Snapshot directory used when nothing else is configured.
pub const DEFAULT_SNAPSHOT_DIR: &str = "tests/snapshots";

/// Environment variable overriding the snapshot directory.
pub const SNAPSHOT_DIR_ENV: &str = "SHUTTER_SNAPSHOT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The `[snapshots]` table.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnapshotsTable {
    /// Snapshot directory, relative to the project root.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    snapshots: SnapshotsTable,
}

/// Resolved snapshot location for one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotSettings {
    pub dir: PathBuf,
}

impl SnapshotSettings {
    /// Settings from `table`, with relative directories resolved against
    /// `project_root`.
    pub fn from_table(project_root: &Path, table: &SnapshotsTable) -> Self {
        let dir = table
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_DIR));
        Self {
            dir: project_root.join(dir),
        }
    }

    /// Read `shutter.toml` under `project_root`; a missing file means
    /// defaults.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(CONFIG_FILE);
        let file: ConfigFile = match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Toml {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigFile::default(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        Ok(Self::from_table(project_root, &file.snapshots))
    }

    /// Replace the directory when `dir` is set; relative paths resolve
    /// against `project_root`.
    pub fn with_dir_override(mut self, project_root: &Path, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.dir = project_root.join(dir);
        }
        self
    }

    /// [`load`](Self::load) plus the `SHUTTER_SNAPSHOT_DIR` override.
    pub fn resolve(project_root: &Path) -> Result<Self, ConfigError> {
        let dir = dir_override(std::env::var_os(SNAPSHOT_DIR_ENV));
        Ok(Self::load(project_root)?.with_dir_override(project_root, dir))
    }
}

/// Directory override from a raw `SHUTTER_SNAPSHOT_DIR` value. Unset and
/// empty both mean no override.
pub fn dir_override(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
