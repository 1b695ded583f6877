// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The closed set of value kinds the renderer understands.

use crate::inspect::{Inspect, Inspector};

/// Surrogate identity of a reference target inside one [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefId(pub(crate) usize);

impl RefId {
    /// Position of the target in the graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A floating point number, keeping its source width for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Float {
    F32(f32),
    F64(f64),
}

impl Float {
    pub(crate) fn is_sign_negative(self) -> bool {
        match self {
            Float::F32(f) => f.is_sign_negative(),
            Float::F64(f) => f.is_sign_negative(),
        }
    }
}

/// An ordered run of values, e.g. a `Vec` or a tuple.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub type_name: String,
    pub items: Vec<Value>,
    /// Items have no meaningful order (hash sets) and are sorted by their
    /// rendered text instead.
    pub unordered: bool,
}

/// Key/value entries in whatever order the source produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    pub type_name: String,
    pub entries: Vec<(Value, Value)>,
}

/// Named fields in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub type_name: String,
    pub fields: Vec<(String, Value)>,
}

/// One node of an inspected value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `None`, a dead weak pointer, or any other missing value.
    Absent,
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(Float),
    /// Real and imaginary parts, both of the same width.
    Complex(Float, Float),
    Text(String),
    Sequence(Sequence),
    Mapping(Mapping),
    Record(Record),
    /// A value with identity; its content lives in [`Graph::target`].
    Reference(RefId),
    /// Callables and channels, rendered by type signature only.
    Opaque(String),
    /// Text supplied by the value itself, emitted verbatim.
    Custom(String),
}

impl Value {
    /// Build a complex number from its parts.
    pub fn complex64(re: f32, im: f32) -> Self {
        Value::Complex(Float::F32(re), Float::F32(im))
    }

    /// Build a complex number from its parts.
    pub fn complex128(re: f64, im: f64) -> Self {
        Value::Complex(Float::F64(re), Float::F64(im))
    }

    /// Text the renderer emits verbatim.
    pub fn custom(text: impl Into<String>) -> Self {
        Value::Custom(text.into())
    }
}

/// An inspected value: the root node plus the arena of reference targets.
///
/// A graph is always finite, even when the inspected value is cyclic: a
/// reference target is stored once and every path to it is a
/// [`Value::Reference`].
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    pub root: Value,
    pub(crate) targets: Vec<Value>,
}

impl Graph {
    /// Inspect `value` into a graph.
    pub fn capture<T: Inspect + ?Sized>(value: &T) -> Self {
        let mut inspector = Inspector::new();
        let root = value.inspect(&mut inspector);
        inspector.finish(root)
    }

    /// Content of a reference target.
    pub fn target(&self, id: RefId) -> Option<&Value> {
        self.targets.get(id.0)
    }

    /// Number of distinct reference targets.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}
