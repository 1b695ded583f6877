// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;

use super::*;
use rstest::rstest;
use shutter_snapshot::{SnapshotRecord, SourceLocation, Status};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn record() -> SnapshotRecord {
    SnapshotRecord {
        name: "m::case".to_string(),
        source: SourceLocation::new("src/lib.rs", 7),
        content: String::new(),
        path: PathBuf::from("/nowhere/m__case.snap.new"),
        status: Status::Pending,
    }
}

fn view(record: &SnapshotRecord, diff_len: usize) -> RecordView<'_> {
    RecordView {
        record,
        display_path: "app/m__case.snap.new".to_string(),
        has_difference: false,
        diff: (0..diff_len).map(|i| format!("+line {i}\n")).collect(),
    }
}

#[rstest]
#[case(KeyCode::Char('a'), Some(Input::Act(Action::Accept)))]
#[case(KeyCode::Char('r'), Some(Input::Act(Action::Reject)))]
#[case(KeyCode::Char('s'), Some(Input::Act(Action::Skip)))]
#[case(KeyCode::Char('q'), Some(Input::Act(Action::Quit)))]
#[case(KeyCode::Esc, Some(Input::Act(Action::Quit)))]
#[case(KeyCode::Down, Some(Input::Scroll(1)))]
#[case(KeyCode::Char('k'), Some(Input::Scroll(-1)))]
#[case(KeyCode::PageDown, Some(Input::Page(1)))]
#[case(KeyCode::PageUp, Some(Input::Page(-1)))]
#[case(KeyCode::Char('x'), None)]
#[case(KeyCode::Enter, None)]
fn test_input_for_key(#[case] code: KeyCode, #[case] expected: Option<Input>) {
    assert_eq!(input_for_key(&key(code)), expected);
}

#[test]
fn test_ctrl_c_quits() {
    let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(input_for_key(&event), Some(Input::Act(Action::Quit)));
}

#[test]
fn test_ctrl_a_is_not_accept() {
    let event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(input_for_key(&event), None);
}

#[test]
fn test_key_release_is_ignored() {
    let event = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(input_for_key(&event), None);
}

#[test]
fn test_footer_shows_progress_and_keys() {
    let lines = footer_lines((2, 5), 10, None, &Theme::plain());
    assert_eq!(
        lines,
        [
            "──────────",
            "  Reviewing: [2/5]",
            "",
            "  a accept keep the new snapshot",
            "  r reject reject the new snapshot",
            "  s skip   keep both for now",
            "  q quit   stop reviewing",
        ]
    );
}

#[test]
fn test_footer_shows_last_error() {
    let lines = footer_lines((1, 1), 10, Some("Failed to rename x"), &Theme::plain());
    assert_eq!(lines.last().unwrap(), "  Error: Failed to rename x");
}

#[test]
fn test_frame_fits_the_screen() {
    let rec = record();
    let view = view(&rec, 100);
    let screen = frame(&view, (1, 3), 0, (60, 30), None, &Theme::plain());
    assert_eq!(screen.lines.len(), 30);
    assert_eq!(screen.max_scroll, 100 - screen.body_height);
    assert!(screen.lines.iter().any(|l| l.ends_with("│ +line 0")));
    assert!(screen.lines.iter().any(|l| l == "  Reviewing: [1/3]"));
}

#[test]
fn test_frame_scrolls_the_diff() {
    let rec = record();
    let view = view(&rec, 100);
    let screen = frame(&view, (1, 1), 10, (60, 30), None, &Theme::plain());
    assert!(!screen.lines.iter().any(|l| l.ends_with("│ +line 9")));
    assert!(screen.lines.iter().any(|l| l.ends_with("│ +line 10")));
}

#[test]
fn test_frame_clamps_scroll() {
    let rec = record();
    let view = view(&rec, 3);
    let screen = frame(&view, (1, 1), 50, (60, 30), None, &Theme::plain());
    assert_eq!(screen.max_scroll, 0);
    assert!(screen.lines.iter().any(|l| l.ends_with("│ +line 0")));
}

#[test]
fn test_tiny_screen_still_shows_a_diff_row() {
    let rec = record();
    let view = view(&rec, 5);
    let screen = frame(&view, (1, 1), 0, (60, 3), None, &Theme::plain());
    assert_eq!(screen.body_height, 1);
}
