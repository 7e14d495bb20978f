//! Error types for the redaction crate.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactionError>;

/// Errors that can occur while building redaction components.
///
/// Applying a redaction never fails; only construction-time validation does.
#[derive(Error, Debug)]
pub enum RedactionError {
    /// A field name cannot be matched by the `key=value` tokenizer.
    #[error("invalid field name {0:?}: expected [A-Za-z0-9_.-]+")]
    InvalidField(String),

    /// I/O error while writing a formatted record to a sink.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
