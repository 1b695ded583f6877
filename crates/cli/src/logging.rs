// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `tracing` subscriber for the binary.
//!
//! Logs go to stderr so they never mix with command output. `SHUTTER_LOG`
//! takes `EnvFilter` directives and wins over `--verbose`.

use std::io::{self, IsTerminal};

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::env;

const QUIET: &str = "warn";
const VERBOSE: &str = "warn,shutter=debug,shutter_snapshot=debug";

/// Filter directives for a run.
pub fn directives(verbose: bool, from_env: Option<String>) -> String {
    match from_env {
        Some(directives) => directives,
        None if verbose => VERBOSE.to_string(),
        None => QUIET.to_string(),
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let directives = directives(verbose, env::log_filter());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(QUIET));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal() && !env::no_color())
        .with_target(false)
        .finish()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
