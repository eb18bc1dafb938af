//! Parser configuration
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::ParserConfig;
//!
//! let config = ParserConfig::default()
//!     .with_debug_parse_warnings(true)
//!     .with_strict(true);
//! assert!(config.strict);
//! ```

/// Options for whole-script ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Log a warning when a parsed dialogue still contains a comment with a
    /// backslash, which usually means an unsupported or malformed tag
    pub debug_parse_warnings: bool,
    /// Abort on the first line that fails to build instead of recording it
    /// as an issue and continuing
    pub strict: bool,
    /// Keep `Comment:` events as dialogues marked with
    /// [`Dialogue::is_comment`](crate::parser::ast::Dialogue::is_comment)
    pub keep_comment_events: bool,
}

impl ParserConfig {
    /// Set `debug_parse_warnings`
    #[must_use]
    pub const fn with_debug_parse_warnings(mut self, enabled: bool) -> Self {
        self.debug_parse_warnings = enabled;
        self
    }

    /// Set `strict`
    #[must_use]
    pub const fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Set `keep_comment_events`
    #[must_use]
    pub const fn with_comment_events(mut self, enabled: bool) -> Self {
        self.keep_comment_events = enabled;
        self
    }
}
