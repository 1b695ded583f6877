// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot review tool.
//!
//! `shutter` finds the pending snapshots written by failing
//! `assert_snapshot!` tests and accepts, rejects, lists or interactively
//! reviews them.
//!
//! ```text
//! shutter pending            # list pending snapshot files
//! shutter review             # decide one snapshot at a time
//! shutter accept             # promote every pending snapshot
//! shutter reject             # discard every pending snapshot
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod env;
pub mod logging;
pub mod report;
pub mod review;
pub mod theme;
