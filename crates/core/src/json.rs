//! Bridge between typed trees and `serde_json`
//!
//! Stored documents are plain JSON. This module moves trees across that
//! boundary without interpreting strings:
//!
//! - [`Value::from_json`]: JSON -> primitive `Value` tree (never produces richer variants)
//! - [`Value::to_json`]: `Value` -> JSON (richer leaves use the canonical string rule)
//! - [`parse_document`] / [`render_document`]: stored text <-> `Mapping`
//!
//! Type recovery is the decoder's job, not this module's.

use crate::codec::encoder::{identifier_to_text, timestamp_to_text};
use crate::error::{Error, Result};
use crate::value::{Mapping, Value};

/// Name of a JSON value's type, for error messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Value {
    /// Convert a JSON value into a primitive tree
    pub fn from_json(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(obj) => Value::Mapping(mapping_from_json(obj)),
        }
    }

    /// Convert into JSON
    ///
    /// Total: an identifier or timestamp still present in the tree is
    /// rendered with the same string form the encoder uses.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Identifier(u) => serde_json::Value::String(identifier_to_text(u)),
            Value::Timestamp(t) => serde_json::Value::String(timestamp_to_text(t)),
            Value::Mapping(m) => serde_json::Value::Object(mapping_to_json(m)),
            Value::Sequence(s) => serde_json::Value::Array(s.iter().map(Value::to_json).collect()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from_json(value)
    }
}

/// Convert a JSON object into a `Mapping`, preserving key order
pub fn mapping_from_json(obj: serde_json::Map<String, serde_json::Value>) -> Mapping {
    obj.into_iter()
        .map(|(k, v)| (k, Value::from_json(v)))
        .collect()
}

/// Convert a `Mapping` into a JSON object, preserving key order
pub fn mapping_to_json(mapping: &Mapping) -> serde_json::Map<String, serde_json::Value> {
    mapping
        .iter()
        .map(|(k, v)| (k.clone(), v.to_json()))
        .collect()
}

/// Parse stored document text into a primitive `Mapping`
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the text is not JSON, and
/// [`Error::NotAnObject`] if the root is not an object.
pub fn parse_document(text: &str) -> Result<Mapping> {
    match serde_json::from_str::<serde_json::Value>(text)? {
        serde_json::Value::Object(obj) => Ok(mapping_from_json(obj)),
        other => Err(Error::NotAnObject(json_type_name(&other))),
    }
}

/// Render a `Mapping` as compact document text
pub fn render_document(mapping: &Mapping) -> Result<String> {
    Ok(serde_json::to_string(&serde_json::Value::Object(
        mapping_to_json(mapping),
    ))?)
}
