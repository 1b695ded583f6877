// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic text rendering of runtime values for snapshot tests.
//!
//! Values are first turned into a [`Graph`] of [`Value`] nodes by the
//! [`Inspect`] adapter, then rendered to canonical, diff-friendly text:
//! mapping entries are sorted by their rendered keys, and values reachable
//! more than once (shared `Rc`/`Arc` targets, cycles) are expanded once and
//! referred to by a label afterwards.
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut scores = HashMap::new();
//! scores.insert("b", 2);
//! scores.insert("a", 1);
//!
//! assert_eq!(
//!     shutter_dump::dump(&scores),
//!     "HashMap<&str, i32>{\n  \"a\": 1,\n  \"b\": 2,\n}"
//! );
//! ```

mod canonical;
mod inspect;
mod render;
mod serialized;
mod type_name;
mod value;

pub use inspect::{
    Described, Inspect, Inspector, MappingBuilder, RecordBuilder, SequenceBuilder,
};
pub use render::render;
pub use serialized::{SerializeError, Serialized, UnorderedSeqs};
pub use type_name::type_name_of;
pub use value::{Float, Graph, Mapping, Record, RefId, Sequence, Value};

use std::fmt;

/// Render `value` to its canonical text.
pub fn dump<T: Inspect + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = dump_to(&mut out, value);
    out
}

/// Render `value` into `out`, stopping at the first write error.
pub fn dump_to<W: fmt::Write, T: Inspect + ?Sized>(out: &mut W, value: &T) -> fmt::Result {
    let graph = Graph::capture(value);
    render::render_to(out, &graph)
}
