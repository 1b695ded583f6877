// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text styling, passed explicitly to everything that renders.

use clap::ValueEnum;
use crossterm::style::{StyledContent, Stylize};
use serde::{Deserialize, Serialize};

/// When to emit ANSI colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal && !no_color,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Styles for report text; a plain theme returns text unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn paint<'a>(
        &self,
        text: &'a str,
        style: impl FnOnce(&'a str) -> StyledContent<&'a str>,
    ) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn added(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn removed(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn name(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn path(&self, text: &str) -> String {
        self.paint(text, |t| t.dark_green().underlined())
    }

    pub fn source(&self, text: &str) -> String {
        self.paint(text, |t| t.dark_green())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |t| t.dark_grey())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn heading_accepted(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold())
    }

    pub fn heading_rejected(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }

    pub fn heading_skipped(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().bold())
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
