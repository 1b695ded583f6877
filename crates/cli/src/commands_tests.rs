// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use shutter_snapshot::SourceLocation;
use tempfile::TempDir;

fn context(names: &[&str]) -> (TempDir, Context) {
    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());
    for name in names {
        store
            .write(&store.path_for(name), name, &format!("{name}\n"), SourceLocation::new("t.rs", 1))
            .unwrap();
    }
    let ctx = Context {
        store,
        theme: Theme::plain(),
        diagnostics: Diagnostics::new(Theme::plain()),
        width: 80,
    };
    (dir, ctx)
}

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<i32, CommandError>) -> (i32, String) {
    let mut buf = Vec::new();
    let code = run(&mut buf).unwrap();
    (code, String::from_utf8(buf).unwrap())
}

#[test]
fn test_accept_with_nothing_pending() {
    let (_dir, ctx) = context(&[]);
    let (code, out) = output(|buf| accept(&ctx, buf));
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(out, "no snapshots to review\n");
}

#[test]
fn test_accept_lists_and_promotes() {
    let (_dir, ctx) = context(&["a", "b"]);
    let (code, out) = output(|buf| run(&Command::Accept, &ctx, buf));
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(out, "Accepted:\n  t.rs:1 (a)\n  t.rs:1 (b)\n");
    assert!(ctx.store.discover().unwrap().is_empty());
    assert!(ctx.store.path_for("a").is_file());
}

#[test]
fn test_reject_lists_and_deletes() {
    let (_dir, ctx) = context(&["a"]);
    let (code, out) = output(|buf| run(&Command::Reject, &ctx, buf));
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(out, "Rejected:\n  t.rs:1 (a)\n");
    assert!(ctx.store.discover().unwrap().is_empty());
    assert!(!ctx.store.path_for("a").exists());
}

#[test]
fn test_partial_batch_still_succeeds() {
    let (_dir, ctx) = context(&["a", "b", "c"]);
    let blocker = ctx.store.path_for("b");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), "").unwrap();

    let (code, out) = output(|buf| accept(&ctx, buf));
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(out, "Accepted:\n  t.rs:1 (a)\n");
    assert_eq!(ctx.store.discover().unwrap().len(), 2);
}

#[test]
fn test_pending_prints_paths() {
    let (_dir, ctx) = context(&["a", "m::b"]);
    let (_, out) = output(|buf| pending(&ctx, false, buf));
    let expected: String = ctx
        .store
        .discover()
        .unwrap()
        .iter()
        .map(|p| format!("{}\n", p.display()))
        .collect();
    assert_eq!(out, expected);
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_pending_with_nothing_pending() {
    let (_dir, ctx) = context(&[]);
    let (_, out) = output(|buf| pending(&ctx, false, buf));
    assert_eq!(out, "no snapshots to review\n");
}

#[test]
fn test_pending_json() {
    let (_dir, ctx) = context(&["a", "m::b"]);
    let (code, out) = output(|buf| pending(&ctx, true, buf));
    assert_eq!(code, exit_codes::SUCCESS);

    let records: serde_json::Value = serde_json::from_str(&out).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "a");
    assert_eq!(records[0]["status"], "pending");
    assert_eq!(records[0]["content"], "a\n");
    assert_eq!(records[1]["name"], "m::b");
    assert_eq!(records[1]["source"]["line"], 1);
}

#[test]
fn test_pending_json_skips_unreadable() {
    let (dir, ctx) = context(&["a"]);
    std::fs::write(dir.path().join("broken.snap.new"), "no header").unwrap();
    let (_, out) = output(|buf| pending(&ctx, true, buf));
    let records: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
}

#[test]
fn test_pending_json_empty() {
    let (_dir, ctx) = context(&[]);
    let (_, out) = output(|buf| pending(&ctx, true, buf));
    assert_eq!(out, "[]\n");
}

#[test]
fn test_review_with_nothing_pending() {
    let (_dir, ctx) = context(&[]);
    let (code, out) = output(|buf| run(&Command::Review, &ctx, buf));
    assert_eq!(code, exit_codes::SUCCESS);
    assert_eq!(out, "no snapshots to review\n");
}

#[test]
fn test_errors_exit_with_error_code() {
    let err = CommandError::NotATerminal;
    assert_eq!(err.exit_code(), exit_codes::ERROR);
}
