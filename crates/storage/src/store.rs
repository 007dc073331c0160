//! DocumentStore: SQLite-backed typed document table
//!
//! ## Design: THIN FACADE
//!
//! DocumentStore holds a `rusqlite::Connection` and a [`DocumentColumn`].
//! No caches. Every call is one SQL statement; callers that need several
//! statements to commit together open their own transaction on
//! [`DocumentStore::connection`].
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE documents (
//!     id TEXT PRIMARY KEY,        -- hyphenated identifier
//!     data JSON,                  -- encoded document, NULL allowed
//!     created_at TEXT NOT NULL    -- canonical ISO-8601, UTC
//! )
//! ```
//!
//! `created_at` is stamped in-process with [`Timestamp::now_utc`] when the
//! row is inserted.
//!
//! ## Configuration
//!
//! [`DocumentStore::open`] reads `typedoc.toml` from the database's
//! directory, creating it with defaults on first open.

use crate::column::DocumentColumn;
use crate::error::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};
use typedoc_core::codec::encoder::identifier_to_text;
use typedoc_core::{Codec, CodecConfig, Mapping, Timestamp, Uuid, CONFIG_FILE_NAME};

/// Name of the document table
pub const TABLE_NAME: &str = "documents";

/// A row read back from the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Row identifier
    pub id: Uuid,
    /// Decoded document; `None` when the column is SQL `NULL`
    pub data: Option<Mapping>,
    /// When the row was inserted
    pub created_at: Timestamp,
}

/// Typed document table over one SQLite connection
#[derive(Debug)]
pub struct DocumentStore {
    conn: Connection,
    column: DocumentColumn,
}

impl DocumentStore {
    /// Open a transient in-memory store with the default codec
    pub fn open_in_memory() -> Result<Self> {
        Self::with_codec(Connection::open_in_memory()?, Codec::default())
    }

    /// Open (or create) a store file
    ///
    /// The codec is configured from `typedoc.toml` next to the database
    /// file; a default one is written if it is missing.
    pub fn open(path: &Path) -> Result<Self> {
        let config_path = path.with_file_name(CONFIG_FILE_NAME);
        CodecConfig::write_default_if_missing(&config_path)?;
        let config = CodecConfig::from_file(&config_path)?;
        info!(
            path = %path.display(),
            sequences = ?config.sequences,
            wire_format = ?config.wire_format,
            "opening document store"
        );
        Self::with_codec(Connection::open(path)?, Codec::new(config))
    }

    /// Wrap an existing connection, creating the table if needed
    pub fn with_codec(conn: Connection, codec: Codec) -> Result<Self> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {TABLE_NAME} (
                id TEXT PRIMARY KEY,
                data JSON,
                created_at TEXT NOT NULL
            )"
        ))?;
        Ok(Self {
            conn,
            column: DocumentColumn::new(codec),
        })
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The codec applied to the `data` column
    pub fn codec(&self) -> &Codec {
        self.column.codec()
    }

    /// Insert a new row
    ///
    /// # Errors
    ///
    /// A duplicate `id` fails with the driver's constraint error, unchanged.
    pub fn insert(&self, id: Uuid, data: Option<&Mapping>) -> Result<()> {
        let text = self.column.bind(data)?;
        let created_at = Timestamp::now_utc().to_iso_string();
        self.conn.execute(
            &format!("INSERT INTO {TABLE_NAME} (id, data, created_at) VALUES (?1, ?2, ?3)"),
            params![identifier_to_text(&id), text, created_at],
        )?;
        debug!(%id, null = data.is_none(), "inserted document");
        Ok(())
    }

    /// Replace the document of an existing row
    ///
    /// Returns `false` if no row has this `id`.
    pub fn update(&self, id: Uuid, data: Option<&Mapping>) -> Result<bool> {
        let text = self.column.bind(data)?;
        let changed = self.conn.execute(
            &format!("UPDATE {TABLE_NAME} SET data = ?2 WHERE id = ?1"),
            params![identifier_to_text(&id), text],
        )?;
        debug!(%id, changed, "updated document");
        Ok(changed > 0)
    }

    /// Fetch a row by `id`
    pub fn get(&self, id: Uuid) -> Result<Option<StoredDocument>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT data, created_at FROM {TABLE_NAME} WHERE id = ?1"),
                params![identifier_to_text(&id)],
                |row| Ok((row.get::<_, Option<String>>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        let (data, created_at) = match row {
            Some(row) => row,
            None => return Ok(None),
        };
        let created_at = Timestamp::parse(&created_at)
            .ok_or_else(|| Error::Corruption(format!("created_at '{created_at}' for {id}")))?;
        Ok(Some(StoredDocument {
            id,
            data: self.column.read(data.as_deref())?,
            created_at,
        }))
    }

    /// Delete a row
    ///
    /// Returns `false` if no row had this `id`.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {TABLE_NAME} WHERE id = ?1"),
            params![identifier_to_text(&id)],
        )?;
        debug!(%id, changed, "deleted document");
        Ok(changed > 0)
    }

    /// All row identifiers, in insertion order
    pub fn list_ids(&self) -> Result<Vec<Uuid>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id FROM {TABLE_NAME} ORDER BY rowid"))?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        ids.iter()
            .map(|text| {
                Uuid::parse_str(text).map_err(|_| Error::Corruption(format!("row id '{text}'")))
            })
            .collect()
    }

    /// Number of rows
    pub fn len(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {TABLE_NAME}"),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Check if the store holds no rows
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
