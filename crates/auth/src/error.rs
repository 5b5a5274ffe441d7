//! Error model for the credential utilities.

use thiserror::Error;

/// Result type used across this crate.
pub type AuthResult<T> = Result<T, AuthError>;

/// Credential-level error.
///
/// Digesting itself cannot fail; the only fallible surface is validating a
/// stored digest read back from persistence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A stored digest failed format validation (wrong length, non-hex).
    #[error("invalid password digest: {0}")]
    InvalidDigest(String),
}

impl AuthError {
    pub fn invalid_digest(msg: impl Into<String>) -> Self {
        Self::InvalidDigest(msg.into())
    }
}
