//! Read-path decoder
//!
//! Walks a primitive tree read back from storage and reconstructs richer
//! leaves. Decoding never fails: a leaf that cannot be reconstructed is
//! returned exactly as it was.
//!
//! ## Heuristic Rules
//!
//! Only `Text` leaves are candidates. Rules run in a fixed order and the
//! first one that parses wins:
//!
//! 1. `identifier`: exactly [`IDENTIFIER_LENGTH`] characters in hyphenated hex form
//! 2. `timestamp`: a full ISO-8601 date-time, including signed years
//!
//! ## Known Ambiguity
//!
//! The stored JSON carries no type tag. A plain string that happens to be a
//! hyphenated UUID or an ISO-8601 date-time is promoted on read, even if it
//! was written as text. `WireFormat::Tagged` avoids this at the cost of a
//! different stored layout.

use super::envelope;
use crate::config::{CodecConfig, SequencePolicy, WireFormat};
use crate::timestamp::{Timestamp, MIN_TIMESTAMP_LENGTH};
use crate::value::{Mapping, Value};
use std::fmt;
use tracing::trace;
use uuid::Uuid;

/// Length of a hyphenated identifier; shorter or longer strings are never
/// tried as identifiers
pub const IDENTIFIER_LENGTH: usize = 36;

/// One step of the heuristic pipeline
#[derive(Clone, Copy)]
pub struct DecodeRule {
    /// Rule name, used in trace output
    pub name: &'static str,
    /// Cheap prefilter; `parse` runs only when this returns true
    pub accepts: fn(&str) -> bool,
    /// Parser; `None` leaves the text for the next rule
    pub parse: fn(&str) -> Option<Value>,
}

impl fmt::Debug for DecodeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeRule").field("name", &self.name).finish()
    }
}

fn identifier_accepts(text: &str) -> bool {
    text.len() == IDENTIFIER_LENGTH
}

fn identifier_parse(text: &str) -> Option<Value> {
    Uuid::parse_str(text).ok().map(Value::Identifier)
}

fn timestamp_accepts(text: &str) -> bool {
    text.len() >= MIN_TIMESTAMP_LENGTH
        && matches!(text.as_bytes()[0], b'0'..=b'9' | b'+' | b'-')
}

fn timestamp_parse(text: &str) -> Option<Value> {
    Timestamp::parse(text).map(Value::Timestamp)
}

/// Hyphenated identifier rule
pub const IDENTIFIER_RULE: DecodeRule = DecodeRule {
    name: "identifier",
    accepts: identifier_accepts,
    parse: identifier_parse,
};

/// ISO-8601 timestamp rule
pub const TIMESTAMP_RULE: DecodeRule = DecodeRule {
    name: "timestamp",
    accepts: timestamp_accepts,
    parse: timestamp_parse,
};

/// Heuristic rules in priority order
pub const HEURISTIC_RULES: [DecodeRule; 2] = [IDENTIFIER_RULE, TIMESTAMP_RULE];

/// Decoder over primitive trees
#[derive(Debug, Clone)]
pub struct Decoder {
    rules: Vec<DecodeRule>,
    sequences: SequencePolicy,
    wire_format: WireFormat,
}

impl Decoder {
    /// Build a decoder for `config`
    ///
    /// The tagged format only recognises envelopes, so its string pipeline
    /// is empty.
    pub fn new(config: &CodecConfig) -> Self {
        let rules = match config.wire_format {
            WireFormat::Heuristic => HEURISTIC_RULES.to_vec(),
            WireFormat::Tagged => Vec::new(),
        };
        Self {
            rules,
            sequences: config.sequences,
            wire_format: config.wire_format,
        }
    }

    /// Names of the string rules, in the order they run
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Decode every value of a mapping, recursing into nested mappings
    ///
    /// Keys and their order are preserved.
    pub fn decode(&self, mapping: Mapping) -> Mapping {
        mapping
            .into_iter()
            .map(|(key, value)| (key, self.decode_value(value)))
            .collect()
    }

    /// Decode a single value of any shape
    pub fn decode_value(&self, value: Value) -> Value {
        match value {
            Value::Mapping(m) => {
                if self.wire_format == WireFormat::Tagged {
                    if let Some(unwrapped) = envelope::unwrap(&m) {
                        return unwrapped;
                    }
                }
                Value::Mapping(self.decode(m))
            }
            Value::Sequence(items) if self.sequences == SequencePolicy::Recurse => {
                Value::Sequence(items.into_iter().map(|v| self.decode_value(v)).collect())
            }
            leaf => self.apply_decoders(leaf),
        }
    }

    /// Run the string rules over a leaf, stopping at the first success
    ///
    /// Non-text values are returned untouched.
    pub fn apply_decoders(&self, value: Value) -> Value {
        if let Value::Text(text) = &value {
            for rule in &self.rules {
                if !(rule.accepts)(text) {
                    continue;
                }
                if let Some(decoded) = (rule.parse)(text) {
                    trace!(rule = rule.name, "promoted text leaf");
                    return decoded;
                }
            }
        }
        value
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}
