//! Value types for typed documents
//!
//! This module defines:
//! - Value: the sum type flowing through the codec
//! - ValueKind: fieldless tag for each variant
//! - Mapping: insertion-ordered key/value tree node
//!
//! ## Value Model
//!
//! JSON-safe variants: `Null`, `Bool`, `Number`, `Text`, `Mapping`, `Sequence`.
//! Richer variants: `Identifier`, `Timestamp`. A tree holding no richer
//! variant anywhere is JSON-safe and can be persisted as-is.
//!
//! `Number` is opaque to the codec. Integers and floats keep whatever
//! distinction `serde_json::Number` carries and nothing more.

use crate::timestamp::Timestamp;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde_json::Number;
use uuid::Uuid;

/// Key/value tree node
///
/// Keys are unique. Iteration follows insertion order, but equality ignores
/// order.
pub type Mapping = IndexMap<String, Value>;

/// A node of a typed document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer or finite floating-point number
    Number(Number),
    /// UTF-8 string
    Text(String),
    /// 128-bit universally-unique identifier
    Identifier(Uuid),
    /// ISO-8601 instant
    Timestamp(Timestamp),
    /// Nested key/value tree
    Mapping(Mapping),
    /// Ordered list of values
    Sequence(Vec<Value>),
}

/// Variant tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Value::Null`
    Null,
    /// `Value::Bool`
    Bool,
    /// `Value::Number`
    Number,
    /// `Value::Text`
    Text,
    /// `Value::Identifier`
    Identifier,
    /// `Value::Timestamp`
    Timestamp,
    /// `Value::Mapping`
    Mapping,
    /// `Value::Sequence`
    Sequence,
}

impl ValueKind {
    /// Get the type name as a string
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Identifier => "identifier",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Mapping => "mapping",
            ValueKind::Sequence => "sequence",
        }
    }

    /// Check if values of this kind need flattening before storage
    pub fn is_richer(self) -> bool {
        matches!(self, ValueKind::Identifier | ValueKind::Timestamp)
    }
}

impl Value {
    /// Get the variant tag
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Identifier(_) => ValueKind::Identifier,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Sequence(_) => ValueKind::Sequence,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Check if this is an identifier value
    pub fn is_identifier(&self) -> bool {
        matches!(self, Value::Identifier(_))
    }

    /// Check if this is a timestamp value
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    /// Check if this is a mapping value
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Check if this is a sequence value
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Check that no richer value remains anywhere in this tree
    pub fn is_json_safe(&self) -> bool {
        match self {
            v if v.kind().is_richer() => false,
            Value::Mapping(m) => m.values().all(Value::is_json_safe),
            Value::Sequence(s) => s.iter().all(Value::is_json_safe),
            _ => true,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if this is a Number value
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as Uuid if this is an Identifier value
    pub fn as_identifier(&self) -> Option<Uuid> {
        match self {
            Value::Identifier(u) => Some(*u),
            _ => None,
        }
    }

    /// Get as Timestamp if this is a Timestamp value
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Value::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// Get as &Mapping if this is a Mapping value
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Get as &[Value] if this is a Sequence value
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(i.into())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(i.into())
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(u.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON form and become `Null`
    fn from(f: f64) -> Self {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Identifier(u)
    }
}

impl From<Timestamp> for Value {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Timestamp(dt.into())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(dt.into())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::Timestamp(dt.into())
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Build a [`Mapping`] from `key => value` pairs
///
/// Values go through `Into<Value>`, so plain Rust types, `Uuid` and chrono
/// date-times can be used directly.
///
/// ```
/// use typedoc_core::{mapping, Value};
///
/// let doc = mapping! {
///     "note" => "hello",
///     "count" => 3i64,
///     "nested" => mapping! { "flag" => true },
/// };
/// assert_eq!(doc["note"], Value::from("hello"));
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut m = $crate::Mapping::new();
        $(
            m.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        m
    }};
}
