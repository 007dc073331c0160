//! Typedoc - typed documents for schemaless JSON columns
//!
//! Stores nested key/value trees in a JSON document column while keeping
//! identifiers and timestamps as real types on both sides of the column.
//!
//! # Quick Start
//!
//! ```
//! use typedoc::{mapping, DocumentStore, Timestamp, Uuid};
//!
//! let store = DocumentStore::open_in_memory()?;
//! let id = Uuid::new_v4();
//! let doc = mapping! {
//!     "owner" => Uuid::new_v4(),
//!     "seen" => Timestamp::now_utc(),
//!     "note" => "hello",
//! };
//! store.insert(id, Some(&doc))?;
//!
//! let row = store.get(id)?.expect("row exists");
//! assert_eq!(row.data, Some(doc));
//! # Ok::<(), typedoc::StorageError>(())
//! ```
//!
//! # Architecture
//!
//! - `typedoc-core`: value model, encoder, decoder, configuration
//! - `typedoc-storage`: SQLite column adapter and document store

pub use typedoc_core::*;
pub use typedoc_storage::{
    DocumentColumn, DocumentStore, Error as StorageError, Result as StorageResult,
    StoredDocument, TypedDocument,
};
