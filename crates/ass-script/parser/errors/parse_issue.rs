//! Parse issue types for recoverable ingestion problems
//!
//! Whole-script ingestion keeps going when a single line fails to build.
//! Each such line is recorded as a `ParseIssue` so callers can inspect what
//! was skipped after the fact.

use core::fmt;

/// Parse issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueSeverity {
    /// Information that doesn't affect the parsed result
    Info,

    /// Something was ignored or defaulted
    Warning,

    /// A line was rejected and is missing from the result
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Issue categories for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Script structure issues (sections, format lines)
    Structure,

    /// Style definition problems
    Style,

    /// Event/dialogue issues
    Event,

    /// Script Info header problems
    Properties,

    /// Embedded font/graphic problems
    Attachment,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Style => write!(f, "style"),
            Self::Event => write!(f, "event"),
            Self::Properties => write!(f, "properties"),
            Self::Attachment => write!(f, "attachment"),
        }
    }
}

/// Recoverable problem observed while ingesting a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based)
    pub line: usize,
}

impl ParseIssue {
    /// Create new parse issue
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
        }
    }

    /// Create warning-level issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Create error-level issue
    #[must_use]
    pub const fn error(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Error, category, message, line)
    }

    /// Format issue for display in a console
    #[must_use]
    pub fn format_for_display(&self) -> String {
        format!(
            "[{}:{}] {}: {}",
            self.line, self.category, self.severity, self.message
        )
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_for_display())
    }
}
