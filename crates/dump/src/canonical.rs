// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical traversal order and labels for multiply-visited targets.
//!
//! The render pass and the labelling pre-pass must walk a graph in exactly
//! the same order, so both go through [`ordered_items`] and
//! [`ordered_entries`].

use std::collections::HashMap;

use crate::render::sort_key;
use crate::value::{Graph, Mapping, RefId, Sequence, Value};

/// Labels of the reference targets reached more than once, numbered in
/// first-discovery order.
#[derive(Debug, Default)]
pub(crate) struct Labels {
    by_target: HashMap<RefId, usize>,
}

impl Labels {
    /// Walk the graph from `root` once and label every target visited twice
    /// or more.
    pub(crate) fn collect<'g>(graph: &'g Graph, root: &'g Value) -> Self {
        let mut visits = Visits::default();
        visits.walk(graph, root);

        let mut by_target = HashMap::new();
        for id in visits.order {
            if visits.counts.get(&id).is_some_and(|count| *count > 1) {
                let label = by_target.len();
                by_target.insert(id, label);
            }
        }
        Self { by_target }
    }

    pub(crate) fn get(&self, id: RefId) -> Option<usize> {
        self.by_target.get(&id).copied()
    }
}

#[derive(Default)]
struct Visits {
    counts: HashMap<RefId, usize>,
    order: Vec<RefId>,
}

impl Visits {
    fn walk<'g>(&mut self, graph: &'g Graph, value: &'g Value) {
        match value {
            Value::Reference(id) => {
                let count = {
                    let count = self.counts.entry(*id).or_insert(0);
                    *count += 1;
                    *count
                };
                // Targets are only descended into once; this is what keeps
                // cyclic graphs finite.
                if count == 1 {
                    self.order.push(*id);
                    if let Some(target) = graph.target(*id) {
                        self.walk(graph, target);
                    }
                }
            }
            Value::Sequence(seq) => {
                for item in ordered_items(graph, seq, &[]) {
                    self.walk(graph, item);
                }
            }
            Value::Mapping(map) => {
                for (key, value) in ordered_entries(graph, map, &[]) {
                    self.walk(graph, key);
                    self.walk(graph, value);
                }
            }
            Value::Record(record) => {
                for (_, value) in &record.fields {
                    self.walk(graph, value);
                }
            }
            _ => {}
        }
    }
}

/// Items of `seq` in render order.
///
/// Unordered sequences are sorted by the [`sort_key`] of each item. `path`
/// holds the targets being expanded around `seq` while computing an outer
/// sort key, and is empty for the render itself.
pub(crate) fn ordered_items<'g>(
    graph: &'g Graph,
    seq: &'g Sequence,
    path: &[RefId],
) -> Vec<&'g Value> {
    if !seq.unordered || seq.items.len() < 2 {
        return seq.items.iter().collect();
    }
    let mut keyed: Vec<(String, &Value)> = seq
        .items
        .iter()
        .map(|item| (sort_key(graph, item, path), item))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Entries of `map` in render order: by key sort key, then by value sort
/// key for keys that tie. `path` is as for [`ordered_items`].
pub(crate) fn ordered_entries<'g>(
    graph: &'g Graph,
    map: &'g Mapping,
    path: &[RefId],
) -> Vec<&'g (Value, Value)> {
    if map.entries.len() < 2 {
        return map.entries.iter().collect();
    }
    let mut keyed: Vec<(String, &(Value, Value))> = map
        .entries
        .iter()
        .map(|entry| (sort_key(graph, &entry.0, path), entry))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut ordered = Vec::with_capacity(keyed.len());
    let mut start = 0;
    while start < keyed.len() {
        let mut end = start + 1;
        while end < keyed.len() && keyed[end].0 == keyed[start].0 {
            end += 1;
        }
        if end - start == 1 {
            ordered.push(keyed[start].1);
        } else {
            let mut tied: Vec<(String, &(Value, Value))> = keyed[start..end]
                .iter()
                .map(|(_, entry)| (sort_key(graph, &entry.1, path), *entry))
                .collect();
            tied.sort_by(|a, b| a.0.cmp(&b.0));
            ordered.extend(tied.into_iter().map(|(_, entry)| entry));
        }
        start = end;
    }
    ordered
}

#[cfg(test)]
#[path = "canonical_tests.rs"]
mod tests;
