// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end snapshot lifecycle: capture, discover, triage.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use shutter_snapshot::{
    accept_all, reject_all, Action, Assertion, Comparison, Harness, Phase, ReviewError,
    ReviewSession, SnapshotError, SnapshotStore, SourceLocation, Status,
};

fn store_with(names: &[&str]) -> (tempfile::TempDir, SnapshotStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path());
    for name in names {
        let path = store.path_for(name);
        store
            .write(&path, name, &format!("{name}\n"), SourceLocation::new("t.rs", 1))
            .unwrap();
    }
    (dir, store)
}

#[test]
fn accept_all_promotes_every_pending_record() {
    let (_dir, store) = store_with(&["a", "b"]);
    let paths = store.discover().unwrap();

    let accepted = accept_all(&store, &paths).unwrap();
    assert_eq!(accepted.len(), 2);
    assert!(store.discover().unwrap().is_empty());
    assert_eq!(store.read(&store.path_for("a")).unwrap().status, Status::Baseline);
}

#[test]
fn reject_all_deletes_every_pending_record() {
    let (_dir, store) = store_with(&["a", "b"]);
    let paths = store.discover().unwrap();

    let rejected = reject_all(&store, &paths).unwrap();
    assert_eq!(rejected.len(), 2);
    assert!(store.discover().unwrap().is_empty());
    assert!(!store.path_for("a").exists());
}

#[test]
fn accept_all_stops_at_first_failure() {
    let (_dir, store) = store_with(&["a", "b", "c"]);
    // A directory where b's baseline belongs makes its rename fail.
    fs::create_dir(store.path_for("b")).unwrap();
    fs::write(store.path_for("b").join("keep"), "").unwrap();
    let paths = store.discover().unwrap();

    let err = accept_all(&store, &paths).unwrap_err();
    let names: Vec<&str> = err.processed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a"]);
    assert!(matches!(err.source, SnapshotError::FileSystem { action: "rename", .. }));

    let remaining = store.discover().unwrap();
    assert_eq!(remaining, paths[1..]);
    assert_eq!(store.read(&paths[2]).unwrap().content, "c\n");
}

#[test]
fn review_session_applies_each_decision() {
    let (_dir, store) = store_with(&["a", "b", "c"]);
    let mut session = ReviewSession::start(&store).unwrap();
    assert_eq!(session.position(), Some((1, 3)));

    assert_eq!(session.apply(Action::Accept).unwrap(), Phase::Reviewing(1));
    assert_eq!(session.apply(Action::Reject).unwrap(), Phase::Reviewing(2));
    assert_eq!(session.apply(Action::Skip).unwrap(), Phase::Done);

    let summary = session.into_summary();
    assert_eq!(summary.accepted[0].name, "a");
    assert_eq!(summary.rejected[0].name, "b");
    assert_eq!(summary.skipped[0].name, "c");

    assert!(store.path_for("a").exists());
    assert!(!store.path_for("b").exists());
    let remaining = store.discover().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].ends_with("c.snap.new"));
}

#[test]
fn review_session_quit_keeps_rest_pending() {
    let (_dir, store) = store_with(&["a", "b"]);
    let mut session = ReviewSession::start(&store).unwrap();
    assert_eq!(session.apply(Action::Quit).unwrap(), Phase::Done);
    assert!(session.summary().is_empty());
    assert_eq!(store.discover().unwrap().len(), 2);
}

#[test]
fn review_session_failed_effect_keeps_record_current() {
    let (_dir, store) = store_with(&["a"]);
    let mut session = ReviewSession::start(&store).unwrap();
    fs::create_dir(store.path_for("a")).unwrap();
    fs::write(store.path_for("a").join("keep"), "").unwrap();

    let err = session.apply(Action::Accept).unwrap_err();
    assert!(matches!(err, ReviewError::Snapshot(_)));
    assert_eq!(session.phase(), Phase::Reviewing(0));
    assert!(session.summary().is_empty());

    assert_eq!(session.apply(Action::Skip).unwrap(), Phase::Done);
    assert!(matches!(
        session.apply(Action::Skip),
        Err(ReviewError::Triage(_))
    ));
}

#[test]
fn review_session_leaves_out_unreadable_records() {
    let (_dir, store) = store_with(&["good"]);
    fs::write(store.root().join("bad.snap.new"), "not a snapshot").unwrap();

    let session = ReviewSession::start(&store).unwrap();
    assert_eq!(session.unreadable().len(), 1);
    assert_eq!(session.position(), Some((1, 1)));
    assert_eq!(session.current().unwrap().name, "good");
}

#[test]
fn review_session_without_pending_is_done() {
    let (_dir, store) = store_with(&[]);
    let session = ReviewSession::start(&store).unwrap();
    assert_eq!(session.phase(), Phase::Done);
    assert!(session.summary().is_empty());
}

#[test]
fn harness_capture_then_review() {
    let dir = tempfile::tempdir().unwrap();
    let harness = Harness::new(SnapshotStore::new(dir.path()));
    let assertion = Assertion::new("tests::pair", "tests/lifecycle.rs", 10);

    assert!(matches!(
        harness.check(&assertion, &(1u8, "x")).unwrap(),
        Comparison::Created(_)
    ));

    let store = harness.store().clone();
    let mut session = ReviewSession::start(&store).unwrap();
    assert_eq!(session.current().unwrap().name, "tests::pair");
    session.apply(Action::Accept).unwrap();

    assert_eq!(
        harness.check(&assertion, &(1u8, "x")).unwrap(),
        Comparison::Matched
    );
}
