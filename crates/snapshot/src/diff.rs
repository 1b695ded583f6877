// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-level diffs between snapshot contents.

use std::ops::Range;

use similar::{DiffOp, TextDiff};

const CONTEXT_LINES: usize = 3;

/// One non-equal run of lines; ranges are zero-based line indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Delete { old: Range<usize> },
    Insert { new: Range<usize> },
    Replace { old: Range<usize>, new: Range<usize> },
}

/// The edit script turning `old` into `new`. Empty when they are equal.
pub fn edits(old: &str, new: &str) -> Vec<Edit> {
    let diff = TextDiff::from_lines(old, new);
    diff.ops()
        .iter()
        .filter_map(|op| match *op {
            DiffOp::Equal { .. } => None,
            DiffOp::Delete {
                old_index, old_len, ..
            } => Some(Edit::Delete {
                old: old_index..old_index + old_len,
            }),
            DiffOp::Insert {
                new_index, new_len, ..
            } => Some(Edit::Insert {
                new: new_index..new_index + new_len,
            }),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => Some(Edit::Replace {
                old: old_index..old_index + old_len,
                new: new_index..new_index + new_len,
            }),
        })
        .collect()
}

/// Unified diff hunks from `old` to `new`, without a file header.
pub fn unified(old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(false)
        .to_string()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
