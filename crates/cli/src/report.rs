// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text reports for snapshot records and review outcomes.
//!
//! Everything here is pure: it takes records, a width and a [`Theme`] and
//! returns lines. Nothing touches the store except [`RecordView::load`].

use std::path::Path;

use shutter_snapshot::{SnapshotError, SnapshotRecord, SnapshotStore, Summary};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Heavy horizontal line around the banner title.
pub const BANNER_CHAR: char = '━';

/// Light horizontal line between sections.
pub const RULE_CHAR: char = '─';

/// Manifest marking a project directory.
const MANIFEST: &str = "Cargo.toml";

/// Share of the width available to wrapped diff text, in percent.
const DIFF_WIDTH_PERCENT: usize = 97;

/// A full-width rule.
pub fn rule(width: usize) -> String {
    RULE_CHAR.to_string().repeat(width)
}

/// `━━━ {text} ━━━`, centered in `width` columns.
pub fn banner(text: &str, width: usize, theme: &Theme) -> String {
    let padded = format!(" {text} ");
    let text_width = padded.width();
    if width <= text_width {
        return theme.bold(&padded);
    }

    let remaining = width - text_width;
    let left = remaining / 2;
    let right = remaining - left;
    format!(
        "{}{}{}",
        BANNER_CHAR.to_string().repeat(left),
        theme.bold(&padded),
        BANNER_CHAR.to_string().repeat(right)
    )
}

/// `path` relative to the nearest directory holding a `Cargo.toml`,
/// prefixed with that directory's name. Unchanged when there is none.
pub fn display_path(path: &Path) -> String {
    let project = path
        .parent()
        .into_iter()
        .flat_map(Path::ancestors)
        .find(|dir| dir.join(MANIFEST).is_file());

    let Some(project) = project else {
        return path.display().to_string();
    };
    match (project.file_name(), path.strip_prefix(project)) {
        (Some(name), Ok(relative)) => Path::new(name).join(relative).display().to_string(),
        _ => path.display().to_string(),
    }
}

/// A record with the store-derived facts a report needs.
#[derive(Debug, Clone)]
pub struct RecordView<'r> {
    pub record: &'r SnapshotRecord,
    pub display_path: String,
    /// A baseline exists and differs from the pending content
    pub has_difference: bool,
    pub diff: String,
}

impl<'r> RecordView<'r> {
    pub fn load(store: &SnapshotStore, record: &'r SnapshotRecord) -> Result<Self, SnapshotError> {
        Ok(Self {
            record,
            display_path: display_path(&record.path),
            has_difference: store.has_difference(record)?,
            diff: store.diff(record)?,
        })
    }
}

/// Banner, record identity and diff legend.
pub fn header_lines(view: &RecordView<'_>, width: usize, theme: &Theme) -> Vec<String> {
    let record = view.record;
    let mut lines = vec![
        banner("Snapshot Summary", width, theme),
        format!("Snapshot file: {}", theme.path(&view.display_path)),
        format!("Snapshot: {}", theme.name(&record.name)),
        format!(
            "Source: {}:{}",
            theme.source(&record.source.file),
            theme.bold(&record.source.line.to_string())
        ),
        rule(width),
    ];
    if view.has_difference {
        lines.push(theme.removed("-old snapshot"));
    }
    lines.push(theme.added("+new results"));
    lines.push(rule(width));
    lines
}

/// The diff as numbered lines; long lines wrap under a blank number.
pub fn diff_lines(view: &RecordView<'_>, width: usize, theme: &Theme) -> Vec<String> {
    let source: Vec<&str> = view.diff.lines().filter(|line| !line.is_empty()).collect();
    let number_width = source.len().to_string().len();
    let gutter = number_width + 3;
    let text_width = (width * DIFF_WIDTH_PERCENT / 100)
        .saturating_sub(gutter)
        .max(1);
    let options = Options::new(text_width).break_words(true);

    let mut lines = Vec::new();
    for (index, line) in source.iter().enumerate() {
        let paint = |text: &str| match line.as_bytes().first() {
            Some(b'+') => theme.added(text),
            Some(b'-') => theme.removed(text),
            Some(b'@') => theme.muted(text),
            _ => text.to_string(),
        };
        for (row, segment) in textwrap::wrap(line, &options).iter().enumerate() {
            let number = if row == 0 {
                format!("{:>number_width$}", index + 1)
            } else {
                " ".repeat(number_width)
            };
            lines.push(format!("{} │ {}", theme.muted(&number), paint(&**segment)));
        }
    }
    lines
}

/// The full report for one record, closed by a rule.
pub fn render_record(view: &RecordView<'_>, width: usize, theme: &Theme) -> String {
    let mut lines = header_lines(view, width, theme);
    lines.extend(diff_lines(view, width, theme));
    lines.push(rule(width));
    lines.join("\n")
}

/// `Title:` followed by one `  <source> (<name>)` line per record.
pub fn render_list(title: &str, records: &[SnapshotRecord], theme: &Theme) -> String {
    let heading = match title {
        "Accepted" => theme.heading_accepted(title),
        "Rejected" => theme.heading_rejected(title),
        _ => theme.heading_skipped(title),
    };
    let mut out = format!("{heading}:\n");
    for record in records {
        out.push_str(&format!("  {} ({})\n", record.source, record.name));
    }
    out
}

/// Outcome of an interactive review; empty sections are left out.
pub fn render_summary(summary: &Summary, theme: &Theme) -> String {
    let mut out = format!("\n{}\n", theme.bold("review finished"));
    for (title, records) in [
        ("Accepted", &summary.accepted),
        ("Rejected", &summary.rejected),
        ("Skipped", &summary.skipped),
    ] {
        if !records.is_empty() {
            out.push_str(&render_list(title, records, theme));
        }
    }
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
