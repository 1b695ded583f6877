// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use clap::Parser;
use serial_test::serial;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["shutter"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
    dir
}

#[test]
fn test_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    assert_eq!(ProjectConfig::load(dir.path()).unwrap(), ProjectConfig::default());
}

#[test]
fn test_load_both_tables() {
    let dir = project(
        r#"
[snapshots]
dir = "snaps"

[display]
color = "never"
width = 90
"#,
    );
    let config = ProjectConfig::load(dir.path()).unwrap();
    assert_eq!(config.snapshots.dir, Some(PathBuf::from("snaps")));
    assert_eq!(config.display.color, Some(ColorChoice::Never));
    assert_eq!(config.display.width, Some(90));
}

#[test]
fn test_unknown_table_is_rejected() {
    let dir = project("[review]\nkeys = \"vim\"\n");
    let err = ProjectConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn test_bad_color_is_rejected() {
    let dir = project("[display]\ncolor = \"sometimes\"\n");
    assert!(ProjectConfig::load(dir.path()).is_err());
}

#[test]
#[serial]
fn test_resolve_defaults() {
    std::env::remove_var(env::SHUTTER_SNAPSHOT_DIR);
    let dir = TempDir::new().unwrap();
    let settings = Settings::resolve(&parse(&["accept"]), dir.path()).unwrap();
    assert_eq!(settings.root, dir.path());
    assert_eq!(settings.snapshot_dir, dir.path().join("tests/snapshots"));
    assert_eq!(settings.color, ColorChoice::Auto);
    assert_eq!(settings.width, None);
    assert!(!settings.verbose);
}

#[test]
#[serial]
fn test_flags_beat_file() {
    std::env::remove_var(env::SHUTTER_SNAPSHOT_DIR);
    let dir = project("[display]\ncolor = \"always\"\nwidth = 80\n");
    let cli = parse(&["review", "--color", "never", "--width", "120"]);
    let settings = Settings::resolve(&cli, dir.path()).unwrap();
    assert_eq!(settings.color, ColorChoice::Never);
    assert_eq!(settings.width, Some(120));
    assert_eq!(settings.display_width(), 120);
}

#[test]
#[serial]
fn test_file_fills_in_missing_flags() {
    std::env::remove_var(env::SHUTTER_SNAPSHOT_DIR);
    let dir = project("[display]\ncolor = \"always\"\nwidth = 80\n");
    let settings = Settings::resolve(&parse(&["review"]), dir.path()).unwrap();
    assert_eq!(settings.color, ColorChoice::Always);
    assert_eq!(settings.display_width(), 80);
}

#[test]
#[serial]
fn test_env_beats_file_for_snapshot_dir() {
    let dir = project("[snapshots]\ndir = \"from-file\"\n");
    std::env::set_var(env::SHUTTER_SNAPSHOT_DIR, "from-env");
    let settings = Settings::resolve(&parse(&["pending"]), dir.path());
    std::env::remove_var(env::SHUTTER_SNAPSHOT_DIR);
    assert_eq!(settings.unwrap().snapshot_dir, dir.path().join("from-env"));
}

#[test]
#[serial]
fn test_root_flag_is_relative_to_cwd() {
    std::env::remove_var(env::SHUTTER_SNAPSHOT_DIR);
    let cwd = TempDir::new().unwrap();
    std::fs::create_dir(cwd.path().join("app")).unwrap();
    let settings = Settings::resolve(&parse(&["accept", "--root", "app"]), cwd.path()).unwrap();
    assert_eq!(settings.root, cwd.path().join("app"));
    assert_eq!(settings.snapshot_dir, cwd.path().join("app/tests/snapshots"));
}

#[test]
fn test_zero_width_is_clamped() {
    let settings = Settings {
        root: PathBuf::from("."),
        snapshot_dir: PathBuf::from("."),
        color: ColorChoice::Never,
        width: Some(0),
        verbose: false,
    };
    assert_eq!(settings.display_width(), 1);
}
