// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot review binary entry point.

use std::io::{self, IsTerminal, Write};

use clap::error::ErrorKind;
use clap::Parser;

use shutter::cli::Cli;
use shutter::commands::{self, exit_codes, Context};
use shutter::config::Settings;
use shutter::diagnostic::Diagnostics;
use shutter::theme::Theme;
use shutter::{env, logging};
use shutter_snapshot::SnapshotStore;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_codes::USAGE);
        }
    };
    logging::init(cli.verbose);
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let early = Diagnostics::stderr(cli.color.unwrap_or_default());
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            early.error(format_args!("Failed to read current directory: {e}"));
            return exit_codes::ERROR;
        }
    };
    let settings = match Settings::resolve(cli, &cwd) {
        Ok(settings) => settings,
        Err(e) => {
            early.error(&e);
            return exit_codes::ERROR;
        }
    };
    tracing::debug!(
        root = %settings.root.display(),
        snapshots = %settings.snapshot_dir.display(),
        "resolved settings"
    );

    let color = settings
        .color
        .enabled(io::stdout().is_terminal(), env::no_color());
    let ctx = Context {
        store: SnapshotStore::new(settings.root.clone())
            .with_search_root(settings.snapshot_dir.clone()),
        theme: Theme::new(color),
        diagnostics: Diagnostics::stderr(settings.color),
        width: settings.display_width(),
    };

    let mut stdout = io::stdout().lock();
    let code = match commands::run(&cli.command, &ctx, &mut stdout) {
        Ok(code) => code,
        Err(e) => {
            let _ = stdout.flush();
            ctx.diagnostics.error(&e);
            e.exit_code()
        }
    };
    let _ = stdout.flush();
    code
}
