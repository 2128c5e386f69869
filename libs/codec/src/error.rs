//! Error types for UUID codec and classifier operations.

use thiserror::Error;

/// Errors that can occur when converting or declaring UUID columns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    /// The input is neither a hyphenated UUID string nor exactly 16 bytes.
    #[error("invalid UUID format: {message}")]
    InvalidFormat { message: String },

    /// The backend name is outside the supported set.
    #[error("unsupported backend: '{0}'")]
    UnsupportedBackend(String),

    /// No column type with this logical name is registered.
    #[error("unknown column type: '{0}'")]
    UnknownType(String),
}

impl UuidError {
    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        UuidError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Returns true if this error rejects malformed UUID input.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, UuidError::InvalidFormat { .. })
    }

    /// Returns true if this error rejects a backend name.
    pub fn is_unsupported_backend(&self) -> bool {
        matches!(self, UuidError::UnsupportedBackend(_))
    }
}
