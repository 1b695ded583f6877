// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture-and-compare entry point for tests.
//!
//! ```no_run
//! use shutter_snapshot::assert_snapshot;
//!
//! #[test]
//! fn renders_empty_list() {
//!     assert_snapshot!(Vec::<u32>::new());
//!     assert_snapshot!("empty_list_again", Vec::<u32>::new());
//! }
//! ```
//!
//! A new or changed snapshot is written as a pending `.snap.new` file and
//! the test fails until the snapshot is accepted.

use std::io::ErrorKind;
use std::path::Path;

use shutter_dump::{dump, Inspect};

use crate::config::{ConfigError, SnapshotSettings};
use crate::error::SnapshotError;
use crate::record::{SnapshotRecord, SourceLocation};
use crate::store::SnapshotStore;

/// What a single assertion is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub name: String,
    pub source: SourceLocation,
}

impl Assertion {
    pub fn new(name: impl Into<String>, file: &str, line: u32) -> Self {
        Self {
            name: name.into(),
            source: SourceLocation::new(file, line),
        }
    }
}

/// Outcome of comparing a fresh capture with its baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// The baseline holds exactly this content.
    Matched,
    /// There was no baseline; a pending record was stored.
    Created(SnapshotRecord),
    /// The baseline differs; a pending record was stored.
    Changed { record: SnapshotRecord, diff: String },
}

/// Compares captured values against the baselines in one store.
#[derive(Debug, Clone)]
pub struct Harness {
    store: SnapshotStore,
}

impl Harness {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Harness for the project at `project_root`, honoring `shutter.toml`
    /// and `SHUTTER_SNAPSHOT_DIR`.
    pub fn for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let settings = SnapshotSettings::resolve(project_root)?;
        Ok(Self::new(SnapshotStore::new(settings.dir)))
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Render `value` and compare it with the baseline for `assertion`.
    ///
    /// Writes a pending record unless the baseline matches.
    pub fn check<T: Inspect + ?Sized>(
        &self,
        assertion: &Assertion,
        value: &T,
    ) -> Result<Comparison, SnapshotError> {
        let content = format!("{}\n", dump(value));
        let path = self.store.path_for(&assertion.name);

        let baseline = match self.store.read(&path) {
            Ok(baseline) => Some(baseline),
            Err(SnapshotError::FileSystem { source, .. }) if source.kind() == ErrorKind::NotFound => {
                None
            }
            Err(e) => return Err(e),
        };
        if baseline.as_ref().is_some_and(|b| b.content == content) {
            return Ok(Comparison::Matched);
        }

        let record = self
            .store
            .write(&path, &assertion.name, &content, assertion.source.clone())?;
        match baseline {
            None => Ok(Comparison::Created(record)),
            Some(baseline) => {
                let diff = crate::diff::unified(&baseline.content, &record.content);
                Ok(Comparison::Changed { record, diff })
            }
        }
    }
}

/// Snapshot name for a test function path.
///
/// Drops the crate segment and any closure segments:
/// `my_crate::tests::renders::{{closure}}` becomes `tests::renders`.
pub fn test_name(function_path: &str) -> String {
    let mut path = function_path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    match path.split_once("::") {
        Some((_, rest)) => rest.to_string(),
        None => path.to_string(),
    }
}

/// Check `value` and fail the calling test unless it matches its baseline.
///
/// # Panics
///
/// Panics when the snapshot is new or changed, or when it cannot be stored;
/// this is how the test is marked failed.
#[allow(clippy::panic)]
pub fn assert_snapshot<T: Inspect + ?Sized>(project_root: &Path, assertion: &Assertion, value: &T) {
    let result = Harness::for_project(project_root)
        .map_err(|e| e.to_string())
        .and_then(|harness| harness.check(assertion, value).map_err(|e| e.to_string()));

    match result {
        Ok(Comparison::Matched) => {}
        Ok(Comparison::Created(record)) => panic!(
            "stored new snapshot {}\n{}\n+new results\n{}",
            record.path.display(),
            assertion.source,
            record.content
        ),
        Ok(Comparison::Changed { record, diff }) => panic!(
            "snapshot mismatch for {}, pending {}\n{}\n-old snapshot\n+new results\n{diff}",
            assertion.name,
            record.path.display(),
            assertion.source,
        ),
        Err(e) => panic!("failed to check snapshot {}: {e}", assertion.name),
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Assert that a value matches its stored snapshot.
///
/// `assert_snapshot!(value)` names the snapshot after the enclosing test
/// function; `assert_snapshot!(name, value)` names it explicitly.
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $value:expr $(,)?) => {
        $crate::harness::assert_snapshot(
            ::std::path::Path::new(env!("CARGO_MANIFEST_DIR")),
            &$crate::Assertion::new($name, file!(), line!()),
            &$value,
        )
    };
    ($value:expr $(,)?) => {
        $crate::harness::assert_snapshot(
            ::std::path::Path::new(env!("CARGO_MANIFEST_DIR")),
            &$crate::Assertion::new(
                $crate::harness::test_name($crate::__function_path!()),
                file!(),
                line!(),
            ),
            &$value,
        )
    };
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
