//! Core error type for ass-script operations
//!
//! Provides the main `CoreError` enum that every fallible operation in the
//! crate returns. Line-level parser errors convert into it via `From`.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling
//! - Name the offending field and raw value so scripts can be fixed by hand
//! - Keep structural fallbacks (skipped lines, comment parts) out of this type;
//!   only hard construction failures are reported as errors

use thiserror::Error;

use crate::parser::errors::ParseError;

/// Main error type for ass-script operations
///
/// Returned when a `Style`, `Dialogue`, attachment or whole script cannot be
/// constructed. Recoverable oddities never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Line-level parsing error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Color value could not be decoded
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Numeric value could not be decoded
    #[error("Invalid numeric value: {0}")]
    InvalidNumeric(String),

    /// Time value could not be decoded
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// A field decoded successfully but failed its validator
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidFieldValue {
        /// Field name as declared by the format specifier
        field: String,
        /// Raw text found in the script
        value: String,
    },

    /// A mandatory field is absent from the line
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// Embedded attachment data is malformed
    #[error("Invalid attachment '{filename}': {reason}")]
    InvalidAttachment {
        /// Attachment file name
        filename: String,
        /// What went wrong
        reason: String,
    },

    /// Reading from a `Stream` failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Tag handler registration conflict
    #[error("Tag handler '{0}' already registered")]
    DuplicateTagHandler(String),

    /// Internal consistency error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Create field validation error
    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create internal error (indicates a bug)
    pub fn internal<T: core::fmt::Display>(message: T) -> Self {
        Self::Internal(message.to_string())
    }

    /// Check if the error only affects the line it was raised for
    ///
    /// Line-scoped errors let whole-script ingestion skip the offending
    /// line and continue.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Internal(_))
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
