// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inspection of any `serde::Serialize` value.
//!
//! Structs become records with fields in declaration order, maps become
//! mappings, and enum variants are named `Enum::Variant`. serde exposes no
//! pointer identity, so shared values are expanded at every occurrence.
//!
//! serde also serializes sets and lists alike, so sequences keep the order
//! the value produced them in. A `HashSet` iterates in a per-process order;
//! wrap values holding one with [`Serialized::unordered_seqs`].

use serde::ser::{self, Serialize};
use thiserror::Error;

use crate::inspect::{Inspect, Inspector};
use crate::value::{Float, Mapping, Record, Sequence, Value};

/// Inspect the wrapped value through its `Serialize` impl.
///
/// ```
/// use shutter_dump::{dump, Serialized};
///
/// #[derive(serde::Serialize)]
/// struct Config {
///     name: &'static str,
///     retries: u8,
/// }
///
/// let config = Config { name: "db", retries: 3 };
/// assert_eq!(
///     dump(&Serialized(&config)),
///     "Config{\n  name: \"db\",\n  retries: 3,\n}"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Serialized<T>(pub T);

impl<T> Serialized<T> {
    /// Sort the items of every serde sequence by their rendered text, as
    /// for a `HashSet`. Tuples keep their order.
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use shutter_dump::{dump, Serialized};
    ///
    /// let tags: HashSet<&str> = ["b", "a"].into_iter().collect();
    /// assert_eq!(
    ///     dump(&Serialized(&tags).unordered_seqs()),
    ///     "Seq{\n  \"a\",\n  \"b\",\n}"
    /// );
    /// ```
    pub fn unordered_seqs(self) -> UnorderedSeqs<T> {
        UnorderedSeqs(self.0)
    }
}

/// A [`Serialized`] value whose sequences render sorted.
#[derive(Clone, Copy, Debug)]
pub struct UnorderedSeqs<T>(pub T);

impl<T: Serialize> Inspect for Serialized<T> {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        to_value(&self.0, ValueSerializer::default())
    }
}

impl<T: Serialize> Inspect for UnorderedSeqs<T> {
    fn inspect(&self, _ins: &mut Inspector) -> Value {
        to_value(
            &self.0,
            ValueSerializer {
                unordered_seqs: true,
            },
        )
    }
}

fn to_value<T: Serialize>(value: &T, serializer: ValueSerializer) -> Value {
    value
        .serialize(serializer)
        .unwrap_or_else(|e| Value::Custom(format!("<unserializable: {e}>")))
}

/// Error raised by a `Serialize` impl while being inspected.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SerializeError(String);

impl ser::Error for SerializeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        SerializeError(msg.to_string())
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct ValueSerializer {
    unordered_seqs: bool,
}

fn variant_name(name: &str, variant: &str) -> String {
    format!("{name}::{variant}")
}

fn record(type_name: impl Into<String>, fields: Vec<(String, Value)>) -> Value {
    Value::Record(Record {
        type_name: type_name.into(),
        fields,
    })
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SerializeError;
    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = RecordSerializer;
    type SerializeTupleVariant = RecordSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = RecordSerializer;
    type SerializeStructVariant = RecordSerializer;

    fn serialize_bool(self, v: bool) -> Result<Value, SerializeError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, SerializeError> {
        Ok(Value::Int(i128::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, SerializeError> {
        Ok(Value::Int(i128::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, SerializeError> {
        Ok(Value::Int(i128::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, SerializeError> {
        Ok(Value::Int(i128::from(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, SerializeError> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u128::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u128::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u128::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u128::from(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, SerializeError> {
        Ok(Value::Uint(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, SerializeError> {
        Ok(Value::Float(Float::F32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, SerializeError> {
        Ok(Value::Float(Float::F64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value, SerializeError> {
        Ok(Value::Custom(format!("{v:?}")))
    }

    fn serialize_str(self, v: &str) -> Result<Value, SerializeError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, SerializeError> {
        Ok(Value::Sequence(Sequence {
            type_name: "[u8]".to_string(),
            items: v.iter().map(|b| Value::Uint(u128::from(*b))).collect(),
            unordered: false,
        }))
    }

    fn serialize_none(self) -> Result<Value, SerializeError> {
        Ok(Value::Absent)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, SerializeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, SerializeError> {
        Ok(Value::Custom("()".to_string()))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, SerializeError> {
        Ok(record(name, Vec::new()))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, SerializeError> {
        Ok(Value::Custom(variant_name(name, variant)))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Value, SerializeError> {
        let inner = value.serialize(self)?;
        Ok(record(name, vec![("0".to_string(), inner)]))
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, SerializeError> {
        let inner = value.serialize(self)?;
        Ok(record(
            variant_name(name, variant),
            vec![("0".to_string(), inner)],
        ))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqSerializer, SerializeError> {
        Ok(SeqSerializer::new(self, "Seq", len.unwrap_or(0), self.unordered_seqs))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer, SerializeError> {
        Ok(SeqSerializer::new(self, "Tuple", len, false))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<RecordSerializer, SerializeError> {
        Ok(RecordSerializer::new(self, name, len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<RecordSerializer, SerializeError> {
        Ok(RecordSerializer::new(self, variant_name(name, variant), len))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapSerializer, SerializeError> {
        Ok(MapSerializer {
            ser: self,
            entries: Vec::with_capacity(len.unwrap_or(0)),
            key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<RecordSerializer, SerializeError> {
        Ok(RecordSerializer::new(self, name, len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<RecordSerializer, SerializeError> {
        Ok(RecordSerializer::new(self, variant_name(name, variant), len))
    }
}

struct SeqSerializer {
    ser: ValueSerializer,
    type_name: &'static str,
    items: Vec<Value>,
    unordered: bool,
}

impl SeqSerializer {
    fn new(ser: ValueSerializer, type_name: &'static str, len: usize, unordered: bool) -> Self {
        Self {
            ser,
            type_name,
            items: Vec::with_capacity(len),
            unordered,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.items.push(value.serialize(self.ser)?);
        Ok(())
    }

    fn finish(self) -> Value {
        Value::Sequence(Sequence {
            type_name: self.type_name.to_string(),
            items: self.items,
            unordered: self.unordered,
        })
    }
}

impl ser::SerializeSeq for SeqSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

struct RecordSerializer {
    ser: ValueSerializer,
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl RecordSerializer {
    fn new(ser: ValueSerializer, type_name: impl Into<String>, len: usize) -> Self {
        Self {
            ser,
            type_name: type_name.into(),
            fields: Vec::with_capacity(len),
        }
    }

    fn named<T: ?Sized + Serialize>(&mut self, name: &str, value: &T) -> Result<(), SerializeError> {
        let value = value.serialize(self.ser)?;
        self.fields.push((name.to_string(), value));
        Ok(())
    }

    fn positional<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        let name = self.fields.len().to_string();
        self.named(&name, value)
    }

    fn finish(self) -> Value {
        record(self.type_name, self.fields)
    }
}

impl ser::SerializeTupleStruct for RecordSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.positional(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for RecordSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.positional(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for RecordSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializeError> {
        self.named(key, value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for RecordSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializeError> {
        self.named(key, value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

struct MapSerializer {
    ser: ValueSerializer,
    entries: Vec<(Value, Value)>,
    key: Option<Value>,
}

impl ser::SerializeMap for MapSerializer {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), SerializeError> {
        self.key = Some(key.serialize(self.ser)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializeError> {
        let key = self
            .key
            .take()
            .ok_or_else(|| SerializeError("map value serialized before its key".to_string()))?;
        self.entries.push((key, value.serialize(self.ser)?));
        Ok(())
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(Value::Mapping(Mapping {
            type_name: "Map".to_string(),
            entries: self.entries,
        }))
    }
}

#[cfg(test)]
#[path = "serialized_tests.rs"]
mod tests;
