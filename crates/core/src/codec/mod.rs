//! Typed-value codec
//!
//! - Encoder: typed tree -> JSON-safe tree, before a write
//! - Decoder: JSON-safe tree -> typed tree, after a read
//!
//! Both are pure, allocation-only functions with no shared mutable state;
//! a [`Codec`] can be shared across threads freely.
//!
//! ## Round-Trip Law
//!
//! For any mapping `T` built from `Null`, `Bool`, `Number`, `Text`,
//! `Identifier`, `Timestamp`, `Mapping` (and `Sequence` under
//! `SequencePolicy::Recurse`), `decode(encode(T)) == T`, provided no `Text`
//! leaf of `T` is itself shaped like an identifier or a timestamp.

pub mod decoder;
pub mod encoder;
pub mod envelope;

pub use decoder::{DecodeRule, Decoder, HEURISTIC_RULES, IDENTIFIER_LENGTH};
pub use encoder::{EncodeFn, Encoder};

use crate::config::CodecConfig;
use crate::value::{Mapping, Value};
use once_cell::sync::Lazy;

static STANDARD: Lazy<Codec> = Lazy::new(|| Codec::new(CodecConfig::default()));

/// The default codec, built on first use and never modified
pub fn standard() -> &'static Codec {
    &STANDARD
}

/// Encode with the default codec
pub fn encode(mapping: &Mapping) -> Mapping {
    standard().encode(mapping)
}

/// Decode with the default codec
pub fn decode(mapping: Mapping) -> Mapping {
    standard().decode(mapping)
}

/// An encoder and decoder built from the same configuration
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    /// Build both halves from `config`
    pub fn new(config: CodecConfig) -> Self {
        Self {
            encoder: Encoder::new(&config),
            decoder: Decoder::new(&config),
            config,
        }
    }

    /// The configuration this codec was built from
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The write-path half
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The read-path half
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Flatten richer leaves for storage
    pub fn encode(&self, mapping: &Mapping) -> Mapping {
        self.encoder.encode(mapping)
    }

    /// Reconstruct richer leaves after a read
    pub fn decode(&self, mapping: Mapping) -> Mapping {
        self.decoder.decode(mapping)
    }

    /// Flatten a single value of any shape
    pub fn encode_value(&self, value: &Value) -> Value {
        self.encoder.encode_value(value)
    }

    /// Reconstruct a single value of any shape
    pub fn decode_value(&self, value: Value) -> Value {
        self.decoder.decode_value(value)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}
