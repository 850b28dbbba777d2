//! Error types for table operations.
//!
//! [`TableError`] covers model lookups, style resolution and the format
//! adapters. Every failure is surfaced immediately; nothing is retried.

/// Errors produced by the table model, the style catalog and format adapters.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A by-name column lookup found no matching header.
    #[error("Column '{0}' not found.")]
    ColumnNotFound(String),

    /// A row index was outside `0..row_count`.
    #[error("Row index {0} is invalid.")]
    InvalidRowIndex(usize),

    /// Import or export was requested for an unknown format name.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The style catalog has no entry under this name.
    #[error("Style \"{0}\" is not registered.")]
    StyleNotRegistered(String),

    /// A format adapter failed to encode or decode.
    #[error("serialization error: {0}")]
    SerializationFailure(String),
}

impl TableError {
    /// Create a serialization failure from any displayable message.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationFailure(msg.into())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::SerializationFailure(err.to_string())
    }
}

impl From<quick_xml::Error> for TableError {
    fn from(err: quick_xml::Error) -> Self {
        TableError::SerializationFailure(err.to_string())
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::SerializationFailure(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for TableError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        TableError::SerializationFailure(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for TableError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TableError::SerializationFailure(err.to_string())
    }
}
