// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by shutter are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `SHUTTER_SNAPSHOT_DIR`: Snapshot directory override.
pub fn snapshot_dir() -> Option<PathBuf> {
    shutter_snapshot::config::dir_override(std::env::var_os(names::SHUTTER_SNAPSHOT_DIR))
}

/// `SHUTTER_LOG`: `tracing` filter directives, e.g. `shutter_snapshot=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var(names::SHUTTER_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `NO_COLOR`: Disables color in `auto` mode when set to anything non-empty.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
