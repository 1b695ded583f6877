// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines on stderr, styled by a [`Theme`] resolved for
//! stderr from the same color choice as the reports.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::env;
use crate::theme::{ColorChoice, Theme};

/// Where commands report errors and warnings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagnostics {
    theme: Theme,
}

impl Diagnostics {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Diagnostics for stderr under `choice`.
    pub fn stderr(choice: ColorChoice) -> Self {
        Self::new(Theme::new(
            choice.enabled(io::stderr().is_terminal(), env::no_color()),
        ))
    }

    /// Print `Error: {msg}` to stderr.
    pub fn error(&self, msg: impl Display) {
        let _ = self.write_error(&mut io::stderr(), msg);
    }

    /// Print `Warning: {msg}` to stderr.
    pub fn warning(&self, msg: impl Display) {
        let _ = self.write_warning(&mut io::stderr(), msg);
    }

    fn write_error<W: Write>(&self, writer: &mut W, msg: impl Display) -> io::Result<()> {
        writeln!(writer, "{}", self.theme.error(&format!("Error: {msg}")))
    }

    fn write_warning<W: Write>(&self, writer: &mut W, msg: impl Display) -> io::Result<()> {
        writeln!(writer, "{}", self.theme.warning(&format!("Warning: {msg}")))
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
