// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::theme::ColorChoice;

/// Review and triage snapshot test results
#[derive(Parser, Debug, Clone)]
#[command(name = "shutter", version, about = "Review and triage snapshot test results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project root holding `shutter.toml` (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Display width in columns (default: terminal width)
    #[arg(long, global = true)]
    pub width: Option<u16>,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Accept all pending snapshots
    Accept,

    /// Reject all pending snapshots
    Reject,

    /// List pending snapshots
    #[command(visible_alias = "pending-snapshots")]
    Pending {
        /// Print the pending records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactively review pending snapshots
    Review,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
