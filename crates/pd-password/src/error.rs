//! Error types for password hashing.

use thiserror::Error;

/// Result type for password operations.
pub type Result<T> = std::result::Result<T, PasswordError>;

/// Errors raised by the password hasher.
///
/// A wrong password is not an error: verification returns `false`.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// The stored hash is not a structurally valid bcrypt string.
    /// The message names the problem, never the hash itself.
    #[error("invalid hash format: {0}")]
    InvalidHashFormat(String),

    /// Cost factor outside the range bcrypt accepts.
    #[error("invalid bcrypt cost {0}: expected {min}..={max}", min = crate::MIN_COST, max = crate::MAX_COST)]
    InvalidCost(u32),

    /// The hashing primitive failed (e.g. the entropy source was unavailable).
    #[error("hashing failed: {0}")]
    Hashing(String),
}

impl From<bcrypt::BcryptError> for PasswordError {
    fn from(err: bcrypt::BcryptError) -> Self {
        PasswordError::Hashing(err.to_string())
    }
}
