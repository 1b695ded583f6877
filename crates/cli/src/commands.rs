// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations.
//!
//! Each command writes its report to `out` and returns the process exit
//! code. Triage outcomes never change the exit code; only failures to find
//! or read the snapshots do.

use std::io::{self, Write};
use std::path::PathBuf;

use shutter_snapshot::{
    accept_all, reject_all, BatchError, ConfigError, ReviewError, SnapshotError, SnapshotRecord,
    SnapshotStore,
};
use thiserror::Error;

use crate::cli::Command;
use crate::diagnostic::Diagnostics;
use crate::report::render_list;
use crate::review;
use crate::theme::Theme;

/// Process exit codes.
pub mod exit_codes {
    /// Every outcome of a completed command
    pub const SUCCESS: i32 = 0;
    /// Discovery, configuration or I/O failure
    pub const ERROR: i32 = 1;
    /// Invalid arguments
    pub const USAGE: i32 = 2;
}

/// Printed by every command when nothing is pending.
pub const NOTHING_PENDING: &str = "no snapshots to review";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("Failed to encode pending snapshots: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Interactive review needs a terminal; use `shutter accept` or `shutter reject`")]
    NotATerminal,
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        exit_codes::ERROR
    }
}

/// What every command runs against.
#[derive(Debug, Clone)]
pub struct Context {
    pub store: SnapshotStore,
    pub theme: Theme,
    pub diagnostics: Diagnostics,
    pub width: usize,
}

/// Run `command` and return its exit code.
pub fn run<W: Write>(command: &Command, ctx: &Context, out: &mut W) -> Result<i32, CommandError> {
    match command {
        Command::Accept => accept(ctx, out),
        Command::Reject => reject(ctx, out),
        Command::Pending { json } => pending(ctx, *json, out),
        Command::Review => review::run(ctx, out),
    }
}

/// Promote every pending snapshot to its baseline.
pub fn accept<W: Write>(ctx: &Context, out: &mut W) -> Result<i32, CommandError> {
    batch(ctx, out, "Accepted", accept_all)
}

/// Delete every pending snapshot.
pub fn reject<W: Write>(ctx: &Context, out: &mut W) -> Result<i32, CommandError> {
    batch(ctx, out, "Rejected", reject_all)
}

fn batch<W, F>(ctx: &Context, out: &mut W, title: &str, apply: F) -> Result<i32, CommandError>
where
    W: Write,
    F: FnOnce(&SnapshotStore, &[PathBuf]) -> Result<Vec<SnapshotRecord>, BatchError>,
{
    let paths = ctx.store.discover()?;
    if paths.is_empty() {
        writeln!(out, "{NOTHING_PENDING}")?;
        return Ok(exit_codes::SUCCESS);
    }

    match apply(&ctx.store, &paths) {
        Ok(records) => write!(out, "{}", render_list(title, &records, &ctx.theme))?,
        Err(err) => {
            if !err.processed.is_empty() {
                write!(out, "{}", render_list(title, &err.processed, &ctx.theme))?;
            }
            out.flush()?;
            ctx.diagnostics.error(&err);
        }
    }
    Ok(exit_codes::SUCCESS)
}

/// List pending snapshot files, one path per line or as JSON records.
pub fn pending<W: Write>(ctx: &Context, json: bool, out: &mut W) -> Result<i32, CommandError> {
    let paths = ctx.store.discover()?;

    if json {
        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            match ctx.store.read(path) {
                Ok(record) => records.push(record),
                Err(e) => ctx
                    .diagnostics
                    .warning(format_args!("skipping {}: {e}", path.display())),
            }
        }
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(exit_codes::SUCCESS);
    }

    if paths.is_empty() {
        writeln!(out, "{NOTHING_PENDING}")?;
    }
    for path in &paths {
        writeln!(out, "{}", path.display())?;
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
