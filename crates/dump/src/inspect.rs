// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The introspection adapter: the only place runtime values become [`Value`]s.
//!
//! Implement [`Inspect`] for your own types with the builders on
//! [`Inspector`]:
//!
//! ```
//! use shutter_dump::{dump, Inspect, Inspector, Value};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Inspect for Point {
//!     fn inspect(&self, ins: &mut Inspector) -> Value {
//!         ins.record("Point").field("x", &self.x).field("y", &self.y).finish()
//!     }
//! }
//!
//! assert_eq!(dump(&Point { x: 1, y: 2 }), "Point{\n  x: 1,\n  y: 2,\n}");
//! ```

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::rc::{self, Rc};
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{self, Arc, Mutex, RwLock, TryLockError};
use std::time::Duration;

use crate::type_name::type_name_of;
use crate::value::{Float, Graph, Mapping, Record, RefId, Sequence, Value};

/// Conversion of a runtime value into a [`Value`] node.
pub trait Inspect {
    fn inspect(&self, ins: &mut Inspector) -> Value;
}

/// Inspection state for one value graph.
///
/// Tracks the identity of every shared target seen so far, so that a target
/// reached a second time (including through a cycle) becomes a
/// [`Value::Reference`] instead of being expanded again.
#[derive(Debug, Default)]
pub struct Inspector {
    seen: HashMap<usize, RefId>,
    targets: Vec<Option<Value>>,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect a nested value.
    pub fn value<T: Inspect + ?Sized>(&mut self, value: &T) -> Value {
        value.inspect(self)
    }

    /// Inspect a value that has identity, keyed by the address it lives at.
    ///
    /// The target is inspected the first time an address is seen; later
    /// visits only produce the reference.
    pub fn shared<T: Inspect + ?Sized>(&mut self, ptr: *const T, target: &T) -> Value {
        let addr = ptr.cast::<()>() as usize;
        if let Some(id) = self.seen.get(&addr) {
            return Value::Reference(*id);
        }

        let id = RefId(self.targets.len());
        self.seen.insert(addr, id);
        self.targets.push(None);
        let content = target.inspect(self);
        self.targets[id.0] = Some(content);
        Value::Reference(id)
    }

    /// Start a record with named fields.
    pub fn record(&mut self, type_name: impl Into<String>) -> RecordBuilder<'_> {
        RecordBuilder {
            ins: self,
            record: Record {
                type_name: type_name.into(),
                fields: Vec::new(),
            },
        }
    }

    /// Start an ordered sequence.
    pub fn sequence(&mut self, type_name: impl Into<String>) -> SequenceBuilder<'_> {
        SequenceBuilder {
            ins: self,
            sequence: Sequence {
                type_name: type_name.into(),
                items: Vec::new(),
                unordered: false,
            },
        }
    }

    /// Start a mapping; entries may be added in any order.
    pub fn mapping(&mut self, type_name: impl Into<String>) -> MappingBuilder<'_> {
        MappingBuilder {
            ins: self,
            mapping: Mapping {
                type_name: type_name.into(),
                entries: Vec::new(),
            },
        }
    }

    /// Close inspection and produce the graph rooted at `root`.
    pub fn finish(self, root: Value) -> Graph {
        Graph {
            root,
            targets: self
                .targets
                .into_iter()
                .map(|t| t.unwrap_or(Value::Absent))
                .collect(),
        }
    }
}

/// Builder returned by [`Inspector::record`].
pub struct RecordBuilder<'a> {
    ins: &'a mut Inspector,
    record: Record,
}

impl RecordBuilder<'_> {
    pub fn field<T: Inspect + ?Sized>(mut self, name: impl Into<String>, value: &T) -> Self {
        let value = value.inspect(self.ins);
        self.record.fields.push((name.into(), value));
        self
    }

    pub fn finish(self) -> Value {
        Value::Record(self.record)
    }
}

/// Builder returned by [`Inspector::sequence`].
pub struct SequenceBuilder<'a> {
    ins: &'a mut Inspector,
    sequence: Sequence,
}

impl SequenceBuilder<'_> {
    pub fn item<T: Inspect + ?Sized>(mut self, value: &T) -> Self {
        let value = value.inspect(self.ins);
        self.sequence.items.push(value);
        self
    }

    pub fn items<'v, T, I>(mut self, values: I) -> Self
    where
        T: Inspect + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        for value in values {
            self = self.item(value);
        }
        self
    }

    /// Render items sorted by their text rather than in insertion order.
    pub fn unordered(mut self) -> Self {
        self.sequence.unordered = true;
        self
    }

    pub fn finish(self) -> Value {
        Value::Sequence(self.sequence)
    }
}

/// Builder returned by [`Inspector::mapping`].
pub struct MappingBuilder<'a> {
    ins: &'a mut Inspector,
    mapping: Mapping,
}

impl MappingBuilder<'_> {
    pub fn entry<K, V>(mut self, key: &K, value: &V) -> Self
    where
        K: Inspect + ?Sized,
        V: Inspect + ?Sized,
    {
        let key = key.inspect(self.ins);
        let value = value.inspect(self.ins);
        self.mapping.entries.push((key, value));
        self
    }

    pub fn finish(self) -> Value {
        Value::Mapping(self.mapping)
    }
}

/// Renders a value through its `Display` impl, skipping structural traversal.
///
/// ```
/// use shutter_dump::{dump, Described};
/// use std::net::Ipv4Addr;
///
/// assert_eq!(dump(&Described(Ipv4Addr::LOCALHOST)), "127.0.0.1");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Described<T>(pub T);

impl<T: Display> Inspect for Described<T> {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Custom(self.0.to_string())
    }
}

// Primitives

impl Inspect for bool {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! inspect_signed {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self, _ins: &mut Inspector) -> Value {
                Value::Int(i128::from(*self))
            }
        }
    )*};
}

macro_rules! inspect_unsigned {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self, _ins: &mut Inspector) -> Value {
                Value::Uint(u128::from(*self))
            }
        }
    )*};
}

inspect_signed!(i8, i16, i32, i64, i128);
inspect_unsigned!(u8, u16, u32, u64, u128);

impl Inspect for isize {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Int(*self as i128)
    }
}

impl Inspect for usize {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Uint(*self as u128)
    }
}

impl Inspect for f32 {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Float(Float::F32(*self))
    }
}

impl Inspect for f64 {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Float(Float::F64(*self))
    }
}

impl Inspect for char {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Custom(format!("{self:?}"))
    }
}

impl Inspect for str {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Text(self.to_string())
    }
}

impl Inspect for String {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Text(self.clone())
    }
}

impl Inspect for () {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Custom("()".to_string())
    }
}

impl Inspect for Path {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Text(self.to_string_lossy().into_owned())
    }
}

impl Inspect for PathBuf {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        self.as_path().inspect(ins)
    }
}

impl Inspect for Duration {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Custom(format!("{self:?}"))
    }
}

// Transparent wrappers

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        (**self).inspect(ins)
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        (**self).inspect(ins)
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        (**self).inspect(ins)
    }
}

impl<T> Inspect for Cow<'_, T>
where
    T: Inspect + ToOwned + ?Sized,
{
    fn inspect(&self, ins: &mut Inspector) -> Value {
        (**self).inspect(ins)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        match self {
            Some(value) => value.inspect(ins),
            None => Value::Absent,
        }
    }
}

// Values with identity

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.shared(Rc::as_ptr(self), &**self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.shared(Arc::as_ptr(self), &**self)
    }
}

impl<T: Inspect + ?Sized> Inspect for rc::Weak<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        match self.upgrade() {
            Some(strong) => strong.inspect(ins),
            None => Value::Absent,
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for sync::Weak<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        match self.upgrade() {
            Some(strong) => strong.inspect(ins),
            None => Value::Absent,
        }
    }
}

// Interior mutability

impl<T: Inspect + Copy> Inspect for Cell<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        self.get().inspect(ins)
    }
}

impl<T: Inspect + ?Sized> Inspect for RefCell<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        match self.try_borrow() {
            Ok(inner) => inner.inspect(ins),
            Err(_) => Value::Custom("<borrowed>".to_string()),
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for Mutex<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        match self.try_lock() {
            Ok(inner) => inner.inspect(ins),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().inspect(ins),
            Err(TryLockError::WouldBlock) => Value::Custom("<locked>".to_string()),
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for RwLock<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        match self.try_read() {
            Ok(inner) => inner.inspect(ins),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().inspect(ins),
            Err(TryLockError::WouldBlock) => Value::Custom("<locked>".to_string()),
        }
    }
}

// Sequences

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.sequence(type_name_of::<[T]>()).items(self).finish()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.sequence(type_name_of::<[T; N]>()).items(self).finish()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.sequence(format!("Vec<{}>", type_name_of::<T>()))
            .items(self)
            .finish()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.sequence(format!("VecDeque<{}>", type_name_of::<T>()))
            .items(self)
            .finish()
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.sequence(format!("BTreeSet<{}>", type_name_of::<T>()))
            .items(self)
            .finish()
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        ins.sequence(format!("HashSet<{}>", type_name_of::<T>()))
            .items(self)
            .unordered()
            .finish()
    }
}

macro_rules! inspect_tuple {
    ($($name:ident),+) => {
        impl<$($name: Inspect),+> Inspect for ($($name,)+) {
            #[allow(non_snake_case)]
            fn inspect(&self, ins: &mut Inspector) -> Value {
                let ($($name,)+) = self;
                ins.sequence(type_name_of::<Self>())
                    $(.item($name))+
                    .finish()
            }
        }
    };
}

inspect_tuple!(A);
inspect_tuple!(A, B);
inspect_tuple!(A, B, C);
inspect_tuple!(A, B, C, D);
inspect_tuple!(A, B, C, D, E);
inspect_tuple!(A, B, C, D, E, F);

// Mappings

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        let type_name = format!("HashMap<{}, {}>", type_name_of::<K>(), type_name_of::<V>());
        self.iter()
            .fold(ins.mapping(type_name), |map, (k, v)| map.entry(k, v))
            .finish()
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self, ins: &mut Inspector) -> Value {
        let type_name = format!("BTreeMap<{}, {}>", type_name_of::<K>(), type_name_of::<V>());
        self.iter()
            .fold(ins.mapping(type_name), |map, (k, v)| map.entry(k, v))
            .finish()
    }
}

// Callables and channels

macro_rules! inspect_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for fn($($arg),*) -> R {
            fn inspect(&self, _ins: &mut Inspector) -> Value {
                Value::Opaque(type_name_of::<Self>())
            }
        }
    };
}

inspect_fn!();
inspect_fn!(A);
inspect_fn!(A, B);
inspect_fn!(A, B, C);
inspect_fn!(A, B, C, D);

impl<T> Inspect for Sender<T> {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Opaque(format!("Sender<{}>", type_name_of::<T>()))
    }
}

impl<T> Inspect for SyncSender<T> {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Opaque(format!("SyncSender<{}>", type_name_of::<T>()))
    }
}

impl<T> Inspect for Receiver<T> {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        Value::Opaque(format!("Receiver<{}>", type_name_of::<T>()))
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
