// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Triage of pending snapshots.
//!
//! [`Triage`] is a pure state machine over
//! `Idle -> Discovering -> {Done | Reviewing(i)}`. It never touches the file
//! system: [`Triage::plan`] describes the [`Effect`] an action needs, the
//! caller performs it, and [`Triage::commit`] records the outcome.
//! [`ReviewSession`] wires the machine to a [`SnapshotStore`] for an event
//! loop to drive one key press at a time.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{BatchError, ReviewError, SnapshotError, TriageError};
use crate::record::SnapshotRecord;
use crate::store::SnapshotStore;

/// Where a triage run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Discovering,
    /// Waiting for a decision on the record at this index.
    Reviewing(usize),
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => f.write_str("idle"),
            Phase::Discovering => f.write_str("discovering"),
            Phase::Reviewing(index) => write!(f, "reviewing snapshot {}", index + 1),
            Phase::Done => f.write_str("done"),
        }
    }
}

/// A decision about the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accept,
    Reject,
    Skip,
    /// Stop reviewing; the remaining records stay pending.
    Quit,
}

/// File system work a transition depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Accept(SnapshotRecord),
    Reject(SnapshotRecord),
}

/// A planned step, applied with [`Triage::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub from: Phase,
    pub next: Phase,
    pub effect: Option<Effect>,
}

/// Records grouped by the decision taken on them, in decision order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: Vec<SnapshotRecord>,
    pub rejected: Vec<SnapshotRecord>,
    pub skipped: Vec<SnapshotRecord>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty() && self.skipped.is_empty()
    }
}

/// The triage state machine.
#[derive(Debug, Clone)]
pub struct Triage {
    phase: Phase,
    records: Vec<SnapshotRecord>,
    summary: Summary,
}

impl Default for Triage {
    fn default() -> Self {
        Self::new()
    }
}

impl Triage {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            records: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn records(&self) -> &[SnapshotRecord] {
        &self.records
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn into_summary(self) -> Summary {
        self.summary
    }

    /// The record awaiting a decision.
    pub fn current(&self) -> Option<&SnapshotRecord> {
        match self.phase {
            Phase::Reviewing(index) => self.records.get(index),
            _ => None,
        }
    }

    /// One-based position of the current record and the total count.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.phase {
            Phase::Reviewing(index) => Some((index + 1, self.records.len())),
            _ => None,
        }
    }

    pub fn start_discovery(&mut self) -> Result<(), TriageError> {
        self.expect_phase("start discovery", |phase| phase == Phase::Idle)?;
        self.phase = Phase::Discovering;
        Ok(())
    }

    /// Hand over the discovered records; an empty list finishes at once.
    pub fn discovered(&mut self, records: Vec<SnapshotRecord>) -> Result<Phase, TriageError> {
        self.expect_phase("accept discovered records", |phase| {
            phase == Phase::Discovering
        })?;
        self.phase = if records.is_empty() {
            Phase::Done
        } else {
            Phase::Reviewing(0)
        };
        self.records = records;
        Ok(self.phase)
    }

    /// Work out what `action` does to the current record, without doing it.
    pub fn plan(&self, action: Action) -> Result<Transition, TriageError> {
        let Phase::Reviewing(index) = self.phase else {
            return Err(self.invalid("plan an action"));
        };
        let record = self
            .records
            .get(index)
            .ok_or_else(|| self.invalid("plan an action"))?;

        let advance = if index + 1 < self.records.len() {
            Phase::Reviewing(index + 1)
        } else {
            Phase::Done
        };
        let (next, effect) = match action {
            Action::Accept => (advance, Some(Effect::Accept(record.clone()))),
            Action::Reject => (advance, Some(Effect::Reject(record.clone()))),
            Action::Skip => (advance, None),
            Action::Quit => (Phase::Done, None),
        };
        Ok(Transition {
            action,
            from: self.phase,
            next,
            effect,
        })
    }

    /// Record a planned transition whose effect has been carried out.
    pub fn commit(&mut self, transition: Transition) -> Result<Phase, TriageError> {
        if transition.from != self.phase {
            return Err(self.invalid("commit a stale transition"));
        }
        if let Some(record) = self.current().cloned() {
            match transition.action {
                Action::Accept => self.summary.accepted.push(record),
                Action::Reject => self.summary.rejected.push(record),
                Action::Skip => self.summary.skipped.push(record),
                Action::Quit => {}
            }
        }
        self.phase = transition.next;
        Ok(self.phase)
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: impl Fn(Phase) -> bool,
    ) -> Result<(), TriageError> {
        if allowed(self.phase) {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> TriageError {
        TriageError::InvalidTransition {
            operation,
            phase: self.phase,
        }
    }
}

/// A [`Triage`] run backed by a [`SnapshotStore`].
#[derive(Debug)]
pub struct ReviewSession<'s> {
    store: &'s SnapshotStore,
    triage: Triage,
    unreadable: Vec<(PathBuf, SnapshotError)>,
}

impl<'s> ReviewSession<'s> {
    /// Discover and read the pending records under the store root.
    ///
    /// A discovery failure aborts; a record that cannot be read is logged
    /// and left out of the review.
    pub fn start(store: &'s SnapshotStore) -> Result<Self, ReviewError> {
        let mut triage = Triage::new();
        triage.start_discovery()?;

        let mut records = Vec::new();
        let mut unreadable = Vec::new();
        for path in store.discover()? {
            match store.read(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable snapshot");
                    unreadable.push((path, e));
                }
            }
        }
        triage.discovered(records)?;

        Ok(Self {
            store,
            triage,
            unreadable,
        })
    }

    pub fn store(&self) -> &SnapshotStore {
        self.store
    }

    pub fn triage(&self) -> &Triage {
        &self.triage
    }

    pub fn phase(&self) -> Phase {
        self.triage.phase()
    }

    pub fn current(&self) -> Option<&SnapshotRecord> {
        self.triage.current()
    }

    pub fn position(&self) -> Option<(usize, usize)> {
        self.triage.position()
    }

    /// Pending files that could not be read, with the reason.
    pub fn unreadable(&self) -> &[(PathBuf, SnapshotError)] {
        &self.unreadable
    }

    /// Apply `action` to the current record.
    ///
    /// The transition is committed only after its effect succeeded; on
    /// failure the record stays current.
    pub fn apply(&mut self, action: Action) -> Result<Phase, ReviewError> {
        let transition = self.triage.plan(action)?;
        match &transition.effect {
            Some(Effect::Accept(record)) => self.store.accept(record)?,
            Some(Effect::Reject(record)) => self.store.reject(record)?,
            None => {}
        }
        Ok(self.triage.commit(transition)?)
    }

    pub fn summary(&self) -> &Summary {
        self.triage.summary()
    }

    pub fn into_summary(self) -> Summary {
        self.triage.into_summary()
    }
}

/// Accept every pending file in `paths`, in order, stopping at the first
/// failure.
pub fn accept_all<P: AsRef<Path>>(
    store: &SnapshotStore,
    paths: &[P],
) -> Result<Vec<SnapshotRecord>, BatchError> {
    batch(paths, |path| {
        let record = store.read(path)?;
        store.accept(&record)?;
        Ok(record)
    })
}

/// Reject every pending file in `paths`, in order, stopping at the first
/// failure.
pub fn reject_all<P: AsRef<Path>>(
    store: &SnapshotStore,
    paths: &[P],
) -> Result<Vec<SnapshotRecord>, BatchError> {
    batch(paths, |path| {
        let record = store.read(path)?;
        store.reject(&record)?;
        Ok(record)
    })
}

fn batch<P, F>(paths: &[P], mut step: F) -> Result<Vec<SnapshotRecord>, BatchError>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<SnapshotRecord, SnapshotError>,
{
    let mut processed = Vec::with_capacity(paths.len());
    for path in paths {
        match step(path.as_ref()) {
            Ok(record) => processed.push(record),
            Err(source) => return Err(BatchError { processed, source }),
        }
    }
    Ok(processed)
}

#[cfg(test)]
#[path = "triage_tests.rs"]
mod tests;
