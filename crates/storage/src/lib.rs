//! Storage binding for typed documents
//!
//! This crate connects the typed-value codec to SQLite:
//! - DocumentColumn: encode on bind, decode on read, SQL `NULL` untouched
//! - TypedDocument: `ToSql`/`FromSql` through the default codec
//! - DocumentStore: one-table document store used by applications and tests
//!
//! Driver failures are never caught here; they surface as `Error::Storage`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column;
pub mod error;
pub mod store;

pub use column::{DocumentColumn, TypedDocument};
pub use error::{Error, Result};
pub use store::{DocumentStore, StoredDocument, TABLE_NAME};
