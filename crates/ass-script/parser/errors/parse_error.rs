//! Line-level parse error type
//!
//! Contains the `ParseError` enum for structural problems with a single
//! script line that prevent building the value it describes. Problems that
//! only lose information (unknown tags, short coordinate groups) are not
//! errors at all; they degrade inside the grammar.

use thiserror::Error;

/// Structural parse error for one script line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `Style:`/`Dialogue:` line seen before the section's `Format:` line
    #[error("Missing format specification for [{section}] section")]
    MissingFormat {
        /// Section whose format line is missing
        section: String,
    },

    /// `Format:` line without any field names
    #[error("Invalid format line: {reason}")]
    InvalidFormatLine {
        /// Why the line was rejected
        reason: String,
    },

    /// SRT block without a `-->` timing line
    #[error("SRT block {index} has no timing line")]
    MissingSrtTiming {
        /// 1-based block number in the file
        index: usize,
    },

    /// Data line seen in a section that cannot hold it
    #[error("Unexpected line in [{section}] section")]
    UnexpectedLine {
        /// Section name
        section: String,
    },
}
