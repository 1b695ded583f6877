// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render pass: a [`Graph`] to canonical text.
//!
//! Composite values open a `Type{` block with one entry per line, indented
//! two spaces per depth, and close with `}` at the parent's indentation.
//! A target reached more than once is expanded on its first visit, marked
//! with a trailing `// pN` comment, and written as `pN` afterwards.

use std::collections::HashSet;
use std::fmt::{self, Write};

use crate::canonical::{ordered_entries, ordered_items, Labels};
use crate::value::{Float, Graph, Mapping, Record, RefId, Sequence, Value};

const INDENT: &str = "  ";

/// Stands in for a target inside its own sort key.
const BACK_REFERENCE: &str = "&<cycle>";

/// Render a captured graph to text.
pub fn render(graph: &Graph) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = render_to(&mut out, graph);
    out
}

pub(crate) fn render_to<W: Write>(out: &mut W, graph: &Graph) -> fmt::Result {
    render_value_to(out, graph, &graph.root)
}

/// Text that orders mapping keys and unordered sequence items.
///
/// The node is rendered without labels. A target already being expanded on
/// `path`, or further down this rendering, is written as
/// [`BACK_REFERENCE`] instead of being expanded again, so cycles through
/// keys stay finite.
pub(crate) fn sort_key<'g>(graph: &'g Graph, value: &'g Value, path: &[RefId]) -> String {
    let mut out = String::new();
    let mut renderer = Renderer {
        out: &mut out,
        graph,
        labels: Labels::default(),
        depth: 0,
        expanded: HashSet::new(),
        pending: Vec::new(),
        path: Some(path.to_vec()),
    };
    // Writing into a `String` cannot fail.
    let _ = renderer.value(value);
    out
}

fn render_value_to<'g, W: Write>(out: &mut W, graph: &'g Graph, root: &'g Value) -> fmt::Result {
    let labels = Labels::collect(graph, root);
    let mut renderer = Renderer {
        out,
        graph,
        labels,
        depth: 0,
        expanded: HashSet::new(),
        pending: Vec::new(),
        path: None,
    };
    renderer.value(root)?;
    renderer.flush_labels()
}

struct Renderer<'o, 'g, W> {
    out: &'o mut W,
    graph: &'g Graph,
    labels: Labels,
    depth: usize,
    /// Labelled targets whose content has already been written.
    expanded: HashSet<RefId>,
    /// Labels to announce at the end of the current line.
    pending: Vec<usize>,
    /// Targets under expansion; only tracked for sort keys.
    path: Option<Vec<RefId>>,
}

impl<'g, W: Write> Renderer<'_, 'g, W> {
    fn value(&mut self, value: &'g Value) -> fmt::Result {
        match value {
            Value::Absent => self.out.write_str("None"),
            Value::Bool(b) => write!(self.out, "{b}"),
            Value::Int(i) => write!(self.out, "{i}"),
            Value::Uint(u) => write!(self.out, "{u}"),
            Value::Float(f) => self.float(*f),
            Value::Complex(re, im) => self.complex(*re, *im),
            Value::Text(text) => write!(self.out, "{text:?}"),
            Value::Sequence(seq) => self.sequence(seq),
            Value::Mapping(map) => self.mapping(map),
            Value::Record(record) => self.record(record),
            Value::Reference(id) => self.reference(*id),
            Value::Opaque(signature) => self.out.write_str(signature),
            Value::Custom(text) => self.out.write_str(text),
        }
    }

    fn float(&mut self, f: Float) -> fmt::Result {
        match f {
            Float::F32(f) => write!(self.out, "{f:?}"),
            Float::F64(f) => write!(self.out, "{f:?}"),
        }
    }

    fn complex(&mut self, re: Float, im: Float) -> fmt::Result {
        let bits = match re {
            Float::F32(_) => 64,
            Float::F64(_) => 128,
        };
        write!(self.out, "complex{bits}(")?;
        self.float(re)?;
        if !im.is_sign_negative() {
            self.out.write_char('+')?;
        }
        self.float(im)?;
        self.out.write_str("i)")
    }

    fn sequence(&mut self, seq: &'g Sequence) -> fmt::Result {
        self.out.write_str(&seq.type_name)?;
        if seq.items.is_empty() {
            return self.out.write_str("{}");
        }
        self.open()?;
        let path = self.path.clone().unwrap_or_default();
        for item in ordered_items(self.graph, seq, &path) {
            self.indent()?;
            self.value(item)?;
            self.out.write_char(',')?;
            self.newline()?;
        }
        self.close()
    }

    fn mapping(&mut self, map: &'g Mapping) -> fmt::Result {
        self.out.write_str(&map.type_name)?;
        if map.entries.is_empty() {
            return self.out.write_str("{}");
        }
        self.open()?;
        let path = self.path.clone().unwrap_or_default();
        for (key, value) in ordered_entries(self.graph, map, &path) {
            self.indent()?;
            self.value(key)?;
            self.out.write_str(": ")?;
            self.value(value)?;
            self.out.write_char(',')?;
            self.newline()?;
        }
        self.close()
    }

    fn record(&mut self, record: &'g Record) -> fmt::Result {
        self.out.write_str(&record.type_name)?;
        if record.fields.is_empty() {
            return self.out.write_str("{}");
        }
        self.open()?;
        for (name, value) in &record.fields {
            self.indent()?;
            self.out.write_str(name)?;
            self.out.write_str(": ")?;
            self.value(value)?;
            self.out.write_char(',')?;
            self.newline()?;
        }
        self.close()
    }

    fn reference(&mut self, id: RefId) -> fmt::Result {
        let Some(target) = self.graph.target(id) else {
            return self.out.write_str("None");
        };
        match self.labels.get(id) {
            Some(label) if self.expanded.contains(&id) => write!(self.out, "p{label}"),
            Some(label) => {
                self.expanded.insert(id);
                self.pending.push(label);
                self.out.write_char('&')?;
                self.value(target)
            }
            None => match self.path.as_mut() {
                Some(path) if path.contains(&id) => self.out.write_str(BACK_REFERENCE),
                Some(path) => {
                    path.push(id);
                    let written = self.out.write_char('&').and_then(|()| self.value(target));
                    if let Some(path) = self.path.as_mut() {
                        path.pop();
                    }
                    written
                }
                None => {
                    self.out.write_char('&')?;
                    self.value(target)
                }
            },
        }
    }

    fn open(&mut self) -> fmt::Result {
        self.out.write_char('{')?;
        self.newline()?;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) -> fmt::Result {
        self.depth -= 1;
        self.indent()?;
        self.out.write_char('}')
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str(INDENT)?;
        }
        Ok(())
    }

    fn newline(&mut self) -> fmt::Result {
        self.flush_labels()?;
        self.out.write_char('\n')
    }

    fn flush_labels(&mut self) -> fmt::Result {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.out.write_str(" // ")?;
        for (i, label) in self.pending.drain(..).enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            write!(self.out, "p{label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
