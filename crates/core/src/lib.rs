//! Core types and codec for typed documents
//!
//! This crate defines the foundational types and the typed-value codec:
//! - Value: Unified value enum for document trees (JSON primitives plus identifiers and timestamps)
//! - Timestamp: ISO-8601 instant with optional offset
//! - Encoder / Decoder: write-path flattening and read-path type recovery
//! - CodecConfig: `typedoc.toml` configuration (array handling, wire format)
//! - JSON bridge: stored text <-> primitive trees
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod codec;
pub mod config;
pub mod error;
pub mod json;
pub mod timestamp;
pub mod value;

// Re-export commonly used types and functions
pub use codec::{decode, encode, standard, Codec, Decoder, Encoder, IDENTIFIER_LENGTH};
pub use config::{CodecConfig, SequencePolicy, WireFormat, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use json::{parse_document, render_document};
pub use timestamp::Timestamp;
pub use value::{Mapping, Value, ValueKind};

// Identifier leaf type
pub use uuid::Uuid;
