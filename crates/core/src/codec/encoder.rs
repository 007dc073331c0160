//! Write-path encoder
//!
//! Walks a typed tree and replaces every richer leaf with its JSON-safe
//! form. Rule selection is a table keyed by [`ValueKind`], built once when
//! the encoder is constructed and never mutated afterwards. Kinds with no
//! rule pass through unchanged.

use super::envelope;
use crate::config::{CodecConfig, SequencePolicy, WireFormat};
use crate::timestamp::Timestamp;
use crate::value::{Mapping, Value, ValueKind};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// A leaf encode rule
///
/// Rules are total: a value outside the rule's kind is returned unchanged.
pub type EncodeFn = fn(&Value) -> Value;

/// Canonical text of an identifier: 36 lowercase hex digits and hyphens
pub fn identifier_to_text(id: &Uuid) -> String {
    id.hyphenated().to_string()
}

/// Canonical text of a timestamp (see [`Timestamp::to_iso_string`])
pub fn timestamp_to_text(ts: &Timestamp) -> String {
    ts.to_iso_string()
}

/// Identifier -> bare canonical string
pub fn encode_identifier(value: &Value) -> Value {
    match value {
        Value::Identifier(id) => Value::Text(identifier_to_text(id)),
        other => other.clone(),
    }
}

/// Timestamp -> bare canonical ISO-8601 string
pub fn encode_timestamp(value: &Value) -> Value {
    match value {
        Value::Timestamp(ts) => Value::Text(timestamp_to_text(ts)),
        other => other.clone(),
    }
}

/// Encoder over typed trees
#[derive(Clone)]
pub struct Encoder {
    rules: HashMap<ValueKind, EncodeFn>,
    sequences: SequencePolicy,
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&'static str> = self.rules.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("Encoder")
            .field("rules", &kinds)
            .field("sequences", &self.sequences)
            .finish()
    }
}

impl Encoder {
    /// Build an encoder with the rule table for `config.wire_format`
    pub fn new(config: &CodecConfig) -> Self {
        let mut rules: HashMap<ValueKind, EncodeFn> = HashMap::new();
        match config.wire_format {
            WireFormat::Heuristic => {
                rules.insert(ValueKind::Identifier, encode_identifier);
                rules.insert(ValueKind::Timestamp, encode_timestamp);
            }
            WireFormat::Tagged => {
                rules.insert(ValueKind::Identifier, envelope::encode_identifier_tagged);
                rules.insert(ValueKind::Timestamp, envelope::encode_timestamp_tagged);
            }
        }
        Self {
            rules,
            sequences: config.sequences,
        }
    }

    /// Encode every value of a mapping, recursing into nested mappings
    ///
    /// Keys and their order are preserved.
    pub fn encode(&self, mapping: &Mapping) -> Mapping {
        mapping
            .iter()
            .map(|(key, value)| (key.clone(), self.encode_value(value)))
            .collect()
    }

    /// Encode a single value of any shape
    pub fn encode_value(&self, value: &Value) -> Value {
        match value {
            Value::Mapping(m) => Value::Mapping(self.encode(m)),
            Value::Sequence(items) if self.sequences == SequencePolicy::Recurse => {
                Value::Sequence(items.iter().map(|v| self.encode_value(v)).collect())
            }
            leaf => self.apply_rule(leaf),
        }
    }

    /// Apply the rule registered for the value's kind, or identity
    pub fn apply_rule(&self, value: &Value) -> Value {
        match self.rules.get(&value.kind()) {
            Some(rule) => rule(value),
            None => value.clone(),
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}
