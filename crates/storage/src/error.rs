//! Error types for typedoc-storage
//!
//! Driver errors are carried unchanged; the codec never masks them.

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the document store
#[derive(Debug, Error)]
pub enum Error {
    /// Error raised by the SQLite driver (connection, constraint, SQL)
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Stored text could not be turned into a document, or config failed to load
    #[error("Codec error: {0}")]
    Codec(#[from] typedoc_core::Error),

    /// A bookkeeping column holds a value the store never writes
    #[error("Data corruption: {0}")]
    Corruption(String),
}
