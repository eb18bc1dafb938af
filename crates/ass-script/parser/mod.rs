//! Script parser module
//!
//! Turns ASS and SRT text into a [`Script`]: typed properties, a
//! name-indexed style table, dialogues whose text is decomposed into
//! [`Part`](crate::tags::Part)s, and embedded attachments.
//!
//! Tabular lines (`Style:`, `Dialogue:`) are read through the field layout
//! declared by the preceding `Format:` line, see [`template`]. Whole scripts
//! are fed line by line through [`StreamParser`].
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::{ParserConfig, Script, ScriptFormat};
//!
//! let script_text = r#"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! "#;
//!
//! let script = Script::from_str_with_config(script_text, ScriptFormat::Ass, ParserConfig::default())?;
//! assert_eq!(script.properties().extra("Title"), Some("Example"));
//! assert_eq!(script.dialogues()[0].raw_text(), "Hello World!");
//! # Ok::<(), ass_script::CoreError>(())
//! ```

pub mod ast;
pub mod config;
pub mod errors;
pub mod script;
pub mod srt;
pub mod streaming;
pub mod template;

pub use ast::{Attachment, AttachmentType, Dialogue, ScriptProperties, Style};
pub use config::ParserConfig;
pub use errors::{IssueCategory, IssueSeverity, ParseError, ParseIssue};
pub use script::{Script, ScriptFormat};
pub use streaming::{ReaderStream, Stream, StreamParser, StringStream};
pub use template::{parse_format_line, parse_line_template, FormatSpecifier, LineKind, TypedTemplate};
