// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot records and their on-disk lifecycle.
//!
//! A test captures a value with [`assert_snapshot!`], which renders it with
//! `shutter_dump`, compares the text against the accepted baseline, and
//! writes a pending `.snap.new` file when the two differ. Pending records are
//! later triaged (accepted, rejected or skipped) through [`SnapshotStore`]
//! and the [`Triage`] state machine.

pub mod config;
pub mod diff;
pub mod error;
pub mod format;
pub mod harness;
pub mod record;
pub mod store;
pub mod triage;

pub use config::{ConfigError, SnapshotSettings};
pub use error::{
    BatchError, DiscoveryError, FormatError, ReviewError, SnapshotError, TriageError,
};
pub use harness::{Assertion, Comparison, Harness};
pub use record::{SnapshotRecord, SourceLocation, Status};
pub use store::SnapshotStore;
pub use triage::{
    accept_all, reject_all, Action, Effect, Phase, ReviewSession, Summary, Transition, Triage,
};

pub use shutter_dump::{Described, Inspect, Inspector, Serialized, UnorderedSeqs, Value};
