// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration (`shutter.toml`) and its resolution against
//! environment variables and command line flags.
//!
//! ```toml
//! [snapshots]
//! dir = "tests/snapshots"
//!
//! [display]
//! color = "auto"   # "auto" | "always" | "never"
//! width = 120
//! ```
//!
//! Flags win over the environment, which wins over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shutter_snapshot::config::{SnapshotsTable, CONFIG_FILE};
use shutter_snapshot::{ConfigError, SnapshotSettings};

use crate::cli::Cli;
use crate::env;
use crate::theme::ColorChoice;

/// Width used when neither a flag, the file, nor the terminal provide one.
pub const DEFAULT_WIDTH: u16 = 150;

/// Top-level `shutter.toml`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub snapshots: SnapshotsTable,

    #[serde(default)]
    pub display: DisplayTable,
}

/// The `[display]` table.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplayTable {
    #[serde(default)]
    pub color: Option<ColorChoice>,

    /// Columns for reports; the terminal width when unset
    #[serde(default)]
    pub width: Option<u16>,
}

impl ProjectConfig {
    /// Read `shutter.toml` under `root`; a missing file means defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Toml { path, source }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }
}

/// Everything a command needs to know about its environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Where pending snapshots are discovered from
    pub root: PathBuf,
    /// Where the harness writes; searched too when it lies outside `root`
    pub snapshot_dir: PathBuf,
    pub color: ColorChoice,
    /// Fixed display width; `None` follows the terminal
    pub width: Option<u16>,
    pub verbose: bool,
}

impl Settings {
    /// Resolve settings for `cli`, with `cwd` as the default project root.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Result<Self, ConfigError> {
        let root = match &cli.root {
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        };
        let file = ProjectConfig::load(&root)?;
        let snapshots = SnapshotSettings::from_table(&root, &file.snapshots)
            .with_dir_override(&root, env::snapshot_dir());

        Ok(Self {
            snapshot_dir: snapshots.dir,
            color: cli.color.or(file.display.color).unwrap_or_default(),
            width: cli.width.or(file.display.width),
            verbose: cli.verbose,
            root,
        })
    }

    /// Display width: the configured one, else the terminal's, else
    /// [`DEFAULT_WIDTH`].
    pub fn display_width(&self) -> usize {
        let width = self.width.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(cols, _)| cols)
                .unwrap_or(DEFAULT_WIDTH)
        });
        usize::from(width.max(1))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
