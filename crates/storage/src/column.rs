//! Typed document column
//!
//! The storage-side shim around the codec. One column holds one JSON
//! document per row; this module encodes before a bind and decodes after a
//! fetch. SQL `NULL` passes through as `None` without touching the codec.
//!
//! Two ways in:
//!
//! - [`DocumentColumn`]: explicit `bind`/`read` with a caller-chosen [`Codec`]
//! - [`TypedDocument`]: `rusqlite::ToSql`/`FromSql` using the default codec,
//!   so a document can go straight into `params!` and `row.get`
//!
//! Keys are never altered and entry order is preserved.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::ops::{Deref, DerefMut};
use tracing::{debug, warn};
use typedoc_core::{codec, parse_document, render_document, Codec, Mapping, Result};

/// Encode/decode adapter for one document column
#[derive(Debug, Clone, Default)]
pub struct DocumentColumn {
    codec: Codec,
}

impl DocumentColumn {
    /// Create a column adapter around `codec`
    pub fn new(codec: Codec) -> Self {
        Self { codec }
    }

    /// The codec applied on bind and read
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Write path: encode and render a document for binding
    ///
    /// `None` binds SQL `NULL`.
    pub fn bind(&self, value: Option<&Mapping>) -> Result<Option<String>> {
        let mapping = match value {
            Some(mapping) => mapping,
            None => return Ok(None),
        };
        let encoded = self.codec.encode(mapping);
        let text = render_document(&encoded)?;
        debug!(keys = encoded.len(), bytes = text.len(), "bound document");
        Ok(Some(text))
    }

    /// Read path: parse stored text and decode it
    ///
    /// `None` (SQL `NULL`) reads back as `None`.
    ///
    /// # Errors
    ///
    /// Fails only when the stored text is not a JSON object.
    pub fn read(&self, stored: Option<&str>) -> Result<Option<Mapping>> {
        let text = match stored {
            Some(text) => text,
            None => return Ok(None),
        };
        let primitive = parse_document(text).map_err(|e| {
            warn!(error = %e, "stored document failed to parse");
            e
        })?;
        debug!(keys = primitive.len(), "read document");
        Ok(Some(self.codec.decode(primitive)))
    }
}

/// A document bound and fetched through the default codec
///
/// Use `Option<TypedDocument>` for nullable columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedDocument(pub Mapping);

impl TypedDocument {
    /// Wrap a mapping
    pub fn new(mapping: Mapping) -> Self {
        TypedDocument(mapping)
    }

    /// Unwrap into the mapping
    pub fn into_inner(self) -> Mapping {
        self.0
    }
}

impl From<Mapping> for TypedDocument {
    fn from(mapping: Mapping) -> Self {
        TypedDocument(mapping)
    }
}

impl From<TypedDocument> for Mapping {
    fn from(doc: TypedDocument) -> Self {
        doc.0
    }
}

impl Deref for TypedDocument {
    type Target = Mapping;

    fn deref(&self) -> &Mapping {
        &self.0
    }
}

impl DerefMut for TypedDocument {
    fn deref_mut(&mut self) -> &mut Mapping {
        &mut self.0
    }
}

impl ToSql for TypedDocument {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let text = render_document(&codec::encode(&self.0))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        Ok(ToSqlOutput::Owned(rusqlite::types::Value::Text(text)))
    }
}

impl FromSql for TypedDocument {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        let primitive = parse_document(text).map_err(|e| FromSqlError::Other(Box::new(e)))?;
        Ok(TypedDocument(codec::decode(primitive)))
    }
}
