//! Error categorization for filtering and grouping
//!
//! Lets callers bucket errors (for example when collecting per-line
//! failures during whole-script ingestion) without matching every variant.

use super::CoreError;
use core::fmt;

/// Error category for filtering and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Structural problems with script lines
    Parsing,

    /// Problems with value formats like colors, numbers or times
    Format,

    /// Values that decoded but are out of their valid domain
    Validation,

    /// Failures reading the underlying stream
    Io,

    /// Tag registry configuration problems
    Configuration,

    /// Internal consistency errors
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsing => write!(f, "parsing"),
            Self::Format => write!(f, "format"),
            Self::Validation => write!(f, "validation"),
            Self::Io => write!(f, "io"),
            Self::Configuration => write!(f, "configuration"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

impl CoreError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) | Self::MissingField(_) => ErrorCategory::Parsing,
            Self::InvalidColor(_)
            | Self::InvalidNumeric(_)
            | Self::InvalidTime(_)
            | Self::InvalidAttachment { .. } => ErrorCategory::Format,
            Self::InvalidFieldValue { .. } => ErrorCategory::Validation,
            Self::Io(_) => ErrorCategory::Io,
            Self::DuplicateTagHandler(_) => ErrorCategory::Configuration,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Get suggested action for this error
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidColor(_) => Some("Use format like '&H00FF00FF' for colors"),
            Self::InvalidTime(_) => Some("Use format like '0:01:30.50' for times"),
            Self::InvalidNumeric(_) => Some("Check numeric format and range"),
            Self::Parse(_) => Some("Declare a 'Format:' line before style and event lines"),
            Self::Internal(_) => Some("Please report this bug to the maintainers"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_group_variants() {
        assert_eq!(
            CoreError::InvalidColor("x".into()).category(),
            ErrorCategory::Format
        );
        assert_eq!(
            CoreError::invalid_field("Outline", "-1").category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
    }

    #[test]
    fn suggestions_for_format_errors() {
        assert!(CoreError::InvalidTime("x".into()).suggestion().is_some());
        assert!(CoreError::MissingField("Name".into()).suggestion().is_none());
    }
}
