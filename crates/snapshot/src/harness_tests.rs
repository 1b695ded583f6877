// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::record::Status;
use rstest::rstest;

#[rstest]
#[case("my_crate::tests::renders", "tests::renders")]
#[case("my_crate::tests::renders::{{closure}}", "tests::renders")]
#[case("my_crate::a::{{closure}}::{{closure}}", "a")]
#[case("main", "main")]
fn test_test_name(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(test_name(path), expected);
}

#[test]
fn test_function_path_names_enclosing_function() {
    let path = crate::__function_path!();
    assert!(path.ends_with("harness::tests::test_function_path_names_enclosing_function"));
}

fn harness() -> (tempfile::TempDir, Harness) {
    let dir = tempfile::tempdir().unwrap();
    let harness = Harness::new(SnapshotStore::new(dir.path()));
    (dir, harness)
}

#[test]
fn test_first_capture_is_created() {
    let (_dir, harness) = harness();
    let assertion = Assertion::new("list", "tests/a.rs", 3);

    let Comparison::Created(record) = harness.check(&assertion, &vec![1u8]).unwrap() else {
        panic!("expected a new snapshot");
    };
    assert_eq!(record.status, Status::Pending);
    assert_eq!(record.content, "Vec<u8>{\n  1,\n}\n");
    assert_eq!(record.source, SourceLocation::new("tests/a.rs", 3));
}

#[test]
fn test_accepted_capture_matches() {
    let (_dir, harness) = harness();
    let assertion = Assertion::new("n", "tests/a.rs", 1);
    let Comparison::Created(record) = harness.check(&assertion, &5i32).unwrap() else {
        panic!("expected a new snapshot");
    };
    harness.store().accept(&record).unwrap();

    assert_eq!(harness.check(&assertion, &5i32).unwrap(), Comparison::Matched);
    assert!(!record.path.exists());
}

#[test]
fn test_changed_capture_carries_diff() {
    let (_dir, harness) = harness();
    let assertion = Assertion::new("word", "tests/a.rs", 1);
    let Comparison::Created(record) = harness.check(&assertion, "A").unwrap() else {
        panic!("expected a new snapshot");
    };
    harness.store().accept(&record).unwrap();

    let Comparison::Changed { record, diff } = harness.check(&assertion, "B").unwrap() else {
        panic!("expected a changed snapshot");
    };
    assert!(diff.lines().any(|l| l == "-\"A\""));
    assert!(diff.lines().any(|l| l == "+\"B\""));
    assert!(harness.store().has_difference(&record).unwrap());
}

#[test]
fn test_assert_snapshot_passes_on_match() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("shutter.toml"),
        "[snapshots]\ndir = \"snaps\"\n",
    )
    .unwrap();
    let harness = Harness::new(SnapshotStore::new(dir.path().join("snaps")));
    let assertion = Assertion::new("ok", "tests/a.rs", 1);
    let Comparison::Created(record) = harness.check(&assertion, &true).unwrap() else {
        panic!("expected a new snapshot");
    };
    harness.store().accept(&record).unwrap();

    assert_snapshot(dir.path(), &assertion, &true);
}

#[test]
#[should_panic(expected = "stored new snapshot")]
fn test_assert_snapshot_fails_on_new() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("shutter.toml"),
        "[snapshots]\ndir = \"snaps\"\n",
    )
    .unwrap();
    assert_snapshot(dir.path(), &Assertion::new("fresh", "tests/a.rs", 1), &1u8);
}
