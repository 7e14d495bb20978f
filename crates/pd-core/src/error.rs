//! Error types for the export pipeline.

use thiserror::Error;

/// Boxed driver error carried unchanged inside [`ExportError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while exporting rows.
///
/// Driver errors are kept as the source so callers see them unmodified.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Could not open the data-source connection.
    #[error("database connection failed: {0}")]
    Connection(#[source] BoxError),

    /// The query could not be executed.
    #[error("query failed: {0}")]
    Query(#[source] BoxError),

    /// A row could not be fetched or decoded.
    #[error("row fetch failed: {0}")]
    Row(#[source] BoxError),

    /// Releasing a cursor or connection failed.
    #[error("failed to close {resource}: {source}")]
    Close {
        resource: &'static str,
        #[source]
        source: BoxError,
    },

    /// Local I/O error (e.g. runtime setup).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn connection(err: impl Into<BoxError>) -> Self {
        ExportError::Connection(err.into())
    }

    pub fn query(err: impl Into<BoxError>) -> Self {
        ExportError::Query(err.into())
    }

    pub fn row(err: impl Into<BoxError>) -> Self {
        ExportError::Row(err.into())
    }

    pub fn close(resource: &'static str, err: impl Into<BoxError>) -> Self {
        ExportError::Close {
            resource,
            source: err.into(),
        }
    }
}
