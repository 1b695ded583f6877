// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive review.
//!
//! One record at a time on the alternate screen: header, a scrollable diff
//! and a key help footer. Decisions go through [`ReviewSession`], so a
//! failed accept or reject keeps the record on screen with the error.

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use shutter_snapshot::{Action, Phase, ReviewError, ReviewSession};

use crate::commands::{exit_codes, CommandError, Context, NOTHING_PENDING};
use crate::report::{diff_lines, header_lines, render_summary, rule, RecordView};
use crate::theme::Theme;

/// Rows assumed when the terminal does not report a size.
const DEFAULT_HEIGHT: usize = 24;

/// A key press the review loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Act(Action),
    /// Scroll the diff by lines; negative is up
    Scroll(isize),
    /// Scroll the diff by screens; negative is up
    Page(isize),
}

/// Map a key to an input. Releases and unbound keys map to nothing.
pub fn input_for_key(key: &KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Act(Action::Quit)),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('a') => Some(Input::Act(Action::Accept)),
        KeyCode::Char('r') => Some(Input::Act(Action::Reject)),
        KeyCode::Char('s') => Some(Input::Act(Action::Skip)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Act(Action::Quit)),
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Scroll(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Scroll(1)),
        KeyCode::PageUp => Some(Input::Page(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Input::Page(1)),
        _ => None,
    }
}

/// One screen of the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    /// Rows available to the diff
    pub body_height: usize,
    /// Largest useful scroll offset
    pub max_scroll: usize,
}

/// Footer: progress and key help, plus the last error if any.
pub fn footer_lines(
    position: (usize, usize),
    width: usize,
    status: Option<&str>,
    theme: &Theme,
) -> Vec<String> {
    let (index, total) = position;
    let mut lines = vec![
        rule(width),
        format!(
            "{}[{}]",
            theme.bold("  Reviewing: "),
            theme.name(&format!("{index}/{total}"))
        ),
        String::new(),
        format!("  {} accept {}", theme.added("a"), theme.muted("keep the new snapshot")),
        format!("  {} reject {}", theme.removed("r"), theme.muted("reject the new snapshot")),
        format!("  {} skip   {}", theme.heading_skipped("s"), theme.muted("keep both for now")),
        format!("  {}{}", theme.heading_rejected("q quit   "), theme.muted("stop reviewing")),
    ];
    if let Some(status) = status {
        lines.push(theme.removed(&format!("  Error: {status}")));
    }
    lines
}

/// Lay out a record in a `width` x `height` screen, with the diff scrolled
/// by `scroll` rows (clamped).
pub fn frame(
    view: &RecordView<'_>,
    position: (usize, usize),
    scroll: usize,
    (width, height): (usize, usize),
    status: Option<&str>,
    theme: &Theme,
) -> Frame {
    let header = header_lines(view, width, theme);
    let footer = footer_lines(position, width, status, theme);
    let diff = diff_lines(view, width, theme);

    let body_height = height.saturating_sub(header.len() + footer.len()).max(1);
    let max_scroll = diff.len().saturating_sub(body_height);
    let scroll = scroll.min(max_scroll);

    let mut lines = header;
    lines.extend(diff.into_iter().skip(scroll).take(body_height));
    lines.extend(footer);
    Frame {
        lines,
        body_height,
        max_scroll,
    }
}

/// Raw mode and the alternate screen for as long as it lives.
struct TerminalGuard {
    out: io::Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row), Print(line))?;
        }
        self.out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, Show, LeaveAlternateScreen) {
            tracing::debug!(error = %e, "failed to leave the alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "failed to disable raw mode");
        }
    }
}

/// Review every pending snapshot, then print the summary to `out`.
pub fn run<W: Write>(ctx: &Context, out: &mut W) -> Result<i32, CommandError> {
    let mut session = ReviewSession::start(&ctx.store)?;
    if session.phase() == Phase::Done {
        writeln!(out, "{NOTHING_PENDING}")?;
        return Ok(exit_codes::SUCCESS);
    }
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(CommandError::NotATerminal);
    }

    {
        let mut tty = TerminalGuard::enter()?;
        interact(&mut session, ctx, &mut tty)?;
    }
    write!(out, "{}", render_summary(session.summary(), &ctx.theme))?;
    Ok(exit_codes::SUCCESS)
}

fn interact(
    session: &mut ReviewSession<'_>,
    ctx: &Context,
    tty: &mut TerminalGuard,
) -> Result<(), CommandError> {
    let mut scroll = 0usize;
    let mut status: Option<String> = None;

    loop {
        let height = terminal::size()
            .map(|(_, rows)| usize::from(rows))
            .unwrap_or(DEFAULT_HEIGHT);
        let Some(position) = session.position() else {
            return Ok(());
        };
        let screen = match session.current() {
            Some(record) => {
                let view = RecordView::load(session.store(), record)?;
                frame(
                    &view,
                    position,
                    scroll,
                    (ctx.width, height),
                    status.as_deref(),
                    &ctx.theme,
                )
            }
            None => return Ok(()),
        };
        scroll = scroll.min(screen.max_scroll);
        tty.draw(&screen.lines)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(input) = input_for_key(&key) else {
            continue;
        };
        match input {
            Input::Scroll(rows) => {
                scroll = scroll.saturating_add_signed(rows).min(screen.max_scroll);
            }
            Input::Page(pages) => {
                let rows = pages.saturating_mul(isize::try_from(screen.body_height).unwrap_or(1));
                scroll = scroll.saturating_add_signed(rows).min(screen.max_scroll);
            }
            Input::Act(action) => match session.apply(action) {
                Ok(Phase::Done) => return Ok(()),
                Ok(_) => {
                    scroll = 0;
                    status = None;
                }
                Err(ReviewError::Snapshot(e)) => status = Some(e.to_string()),
                Err(e) => return Err(e.into()),
            },
        }
    }
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
