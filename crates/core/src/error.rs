//! Error types for typedoc-core
//!
//! The encoder and decoder have no error path: every input produces an
//! output. Errors only arise at the edges of the codec, when turning stored
//! text into a tree or when loading configuration.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for typedoc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the codec edges
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading or writing a config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stored text is not valid JSON, or a tree could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored document is valid JSON but its root is not an object
    #[error("Document root must be an object, found {0}")]
    NotAnObject(&'static str),

    /// Configuration could not be parsed or holds an unsupported value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
