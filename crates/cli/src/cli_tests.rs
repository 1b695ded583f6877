// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn test_parse_accept() {
    let cli = Cli::try_parse_from(["shutter", "accept"]).unwrap();
    assert_eq!(cli.command, Command::Accept);
    assert!(!cli.verbose);
    assert_eq!(cli.root, None);
}

#[test]
fn test_parse_pending_alias() {
    let cli = Cli::try_parse_from(["shutter", "pending-snapshots"]).unwrap();
    assert_eq!(cli.command, Command::Pending { json: false });
}

#[test]
fn test_parse_pending_json() {
    let cli = Cli::try_parse_from(["shutter", "pending", "--json"]).unwrap();
    assert_eq!(cli.command, Command::Pending { json: true });
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "shutter", "review", "--root", "/work", "--color", "never", "--width", "100", "-v",
    ])
    .unwrap();
    assert_eq!(cli.command, Command::Review);
    assert_eq!(cli.root, Some(PathBuf::from("/work")));
    assert_eq!(cli.color, Some(ColorChoice::Never));
    assert_eq!(cli.width, Some(100));
    assert!(cli.verbose);
}

#[test]
fn test_missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["shutter"]).is_err());
}

#[test]
fn test_unknown_color_is_an_error() {
    assert!(Cli::try_parse_from(["shutter", "accept", "--color", "sometimes"]).is_err());
}
