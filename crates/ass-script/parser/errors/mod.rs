//! Parser error types for ASS and SRT script ingestion
//!
//! # Error Philosophy
//!
//! - Prefer recovery over failure where possible
//! - Record skipped lines with their line number
//!
//! # Module Organization
//!
//! - `parse_error` - Structural errors for a single line
//! - `parse_issue` - Recoverable issues collected during whole-script ingestion

pub mod parse_error;
pub mod parse_issue;

pub use parse_error::ParseError;
pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};
