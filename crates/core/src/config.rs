//! Codec configuration via `typedoc.toml`
//!
//! Two knobs exist, both fixed when a [`Codec`](crate::Codec) is built:
//!
//! - `sequences`: whether the codec walks into array elements
//! - `wire_format`: how richer values are laid out in the stored JSON
//!
//! A missing file or an empty file yields the defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name used next to the database file.
pub const CONFIG_FILE_NAME: &str = "typedoc.toml";

/// How the codec treats arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequencePolicy {
    /// Encode and decode every element, recursively
    #[default]
    Recurse,
    /// Pass arrays through untouched; richer values inside them are not
    /// encoded and strings inside them are not promoted
    Opaque,
}

/// How richer values are laid out in stored JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    /// Bare strings; type is recovered on read from the string's shape
    #[default]
    Heuristic,
    /// `{"$type": ..., "$value": ...}` envelopes; plain strings are never
    /// promoted on read. Not compatible with documents written heuristically.
    Tagged,
}

/// Codec configuration loaded from `typedoc.toml`.
///
/// # Example
///
/// ```toml
/// sequences = "recurse"
/// wire_format = "heuristic"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Array handling: `"recurse"` (default) or `"opaque"`.
    #[serde(default)]
    pub sequences: SequencePolicy,
    /// Stored layout: `"heuristic"` (default) or `"tagged"`.
    #[serde(default)]
    pub wire_format: WireFormat,
}

impl CodecConfig {
    /// Configuration matching the historical behaviour: bare strings and
    /// arrays left untouched.
    pub fn reference() -> Self {
        Self {
            sequences: SequencePolicy::Opaque,
            wire_format: WireFormat::Heuristic,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Typed document codec configuration
#
# Array handling: "recurse" (default) or "opaque"
#   "recurse" = identifiers and timestamps inside arrays are encoded and decoded
#   "opaque"  = arrays are stored and returned exactly as given
sequences = "recurse"

# Stored layout: "heuristic" (default) or "tagged"
#   "heuristic" = bare strings, type recovered from the string's shape on read
#   "tagged"    = {"$type": ..., "$value": ...} envelopes, no guessing on read
# Switching an existing database between layouts is not supported.
wire_format = "heuristic"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for malformed TOML or unknown values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
