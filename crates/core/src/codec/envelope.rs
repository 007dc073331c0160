//! Tagged envelope wire format
//!
//! Richer values are stored as a two-key object instead of a bare string:
//!
//! ```json
//! {"$type": "uuid", "$value": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}
//! {"$type": "datetime", "$value": "2024-01-15T10:30:00+00:00"}
//! ```
//!
//! Decoding an envelope is unambiguous, so plain strings are never promoted.
//! An object that has exactly these two keys with a known tag and a
//! parseable value is still read back as the richer value.

use super::encoder::{identifier_to_text, timestamp_to_text};
use crate::timestamp::Timestamp;
use crate::value::{Mapping, Value};
use uuid::Uuid;

/// Key holding the type tag
pub const TYPE_KEY: &str = "$type";

/// Key holding the canonical string
pub const VALUE_KEY: &str = "$value";

/// Tag for identifiers
pub const IDENTIFIER_TAG: &str = "uuid";

/// Tag for timestamps
pub const TIMESTAMP_TAG: &str = "datetime";

fn wrap(tag: &str, text: String) -> Value {
    let mut m = Mapping::with_capacity(2);
    m.insert(TYPE_KEY.to_string(), Value::Text(tag.to_string()));
    m.insert(VALUE_KEY.to_string(), Value::Text(text));
    Value::Mapping(m)
}

/// Identifier -> `{"$type": "uuid", "$value": ...}`
pub fn encode_identifier_tagged(value: &Value) -> Value {
    match value {
        Value::Identifier(id) => wrap(IDENTIFIER_TAG, identifier_to_text(id)),
        other => other.clone(),
    }
}

/// Timestamp -> `{"$type": "datetime", "$value": ...}`
pub fn encode_timestamp_tagged(value: &Value) -> Value {
    match value {
        Value::Timestamp(ts) => wrap(TIMESTAMP_TAG, timestamp_to_text(ts)),
        other => other.clone(),
    }
}

/// Recover the richer value from an envelope
///
/// Returns `None` unless `mapping` is a well-formed envelope.
pub fn unwrap(mapping: &Mapping) -> Option<Value> {
    if mapping.len() != 2 {
        return None;
    }
    let tag = mapping.get(TYPE_KEY)?.as_str()?;
    let text = mapping.get(VALUE_KEY)?.as_str()?;
    match tag {
        IDENTIFIER_TAG => Uuid::parse_str(text).ok().map(Value::Identifier),
        TIMESTAMP_TAG => Timestamp::parse(text).map(Value::Timestamp),
        _ => None,
    }
}
