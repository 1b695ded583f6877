// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The snapshot file format.
//!
//! ```text
//! ---
//! source: tests/render.rs
//! assertion_line: 42
//! ---
//! <content, verbatim>
//! ```

use crate::error::FormatError;
use crate::record::SourceLocation;

const DELIMITER: &str = "---";
const SOURCE_HEADER: &str = "source:";
const LINE_HEADER: &str = "assertion_line:";

/// Encode a snapshot file.
pub fn encode(source: &SourceLocation, content: &str) -> String {
    format!(
        "{DELIMITER}\n{SOURCE_HEADER} {}\n{LINE_HEADER} {}\n{DELIMITER}\n{content}",
        source.file, source.line
    )
}

/// Decode a snapshot file into its source location and content.
pub fn decode(text: &str) -> Result<(SourceLocation, String), FormatError> {
    let mut lines = Lines { rest: text };

    if lines.next_line() != Some(DELIMITER) {
        return Err(FormatError::MissingOpeningDelimiter);
    }
    let file = lines
        .next_line()
        .and_then(|line| header(line, SOURCE_HEADER))
        .ok_or(FormatError::MissingSource)?;
    let line = lines
        .next_line()
        .and_then(|line| header(line, LINE_HEADER))
        .ok_or(FormatError::MissingAssertionLine)?;
    let line = line
        .parse::<u32>()
        .map_err(|_| FormatError::InvalidAssertionLine(line.to_string()))?;
    if lines.next_line() != Some(DELIMITER) {
        return Err(FormatError::MissingClosingDelimiter);
    }

    Ok((SourceLocation::new(file, line), lines.rest.to_string()))
}

fn header<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    line.strip_prefix(name).map(str::trim)
}

/// Line cursor that leaves the unread remainder untouched.
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = match self.rest.find('\n') {
            Some(end) => (&self.rest[..end], &self.rest[end + 1..]),
            None => (self.rest, ""),
        };
        self.rest = rest;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
