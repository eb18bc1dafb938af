//! # ass-script
//!
//! Subtitle script parser for ASS (Advanced `SubStation` Alpha) and SRT.
//! Produces the typed model a renderer consumes: script properties, a
//! name-indexed style table, dialogues, embedded attachments, and for each
//! dialogue a sequence of typed parts decoded from its override tags.
//!
//! ## Features
//!
//! - **Format-driven tables**: `Style:` and `Dialogue:` lines are read through
//!   the section's `Format:` line, in any column order
//! - **Forgiving tag grammar**: unknown or malformed override tags degrade to
//!   comments instead of failing the line
//! - **Lazy dialogue parsing**: dialogue text is decomposed on first access
//!   and memoized
//! - **Pluggable tags**: custom [`tags::TagHandler`]s can extend the grammar
//! - **SRT ingestion**: SubRip blocks and their HTML-like markup map onto the
//!   same model
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_script::{Part, Script};
//!
//! let script_text = r#"
//! [Script Info]
//! ScriptType: v4.00+
//! PlayResX: 1280
//! PlayResY: 720
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,{\pos(640,360)}Hello World!
//! "#;
//!
//! let script = Script::parse(script_text)?;
//! let dialogue = &script.dialogues()[0];
//!
//! assert_eq!(script.properties().resolution_x(), 1280);
//! assert_eq!(dialogue.end(), 5.0);
//! assert_eq!(dialogue.parts()[1], Part::Text("Hello World!".to_string()));
//! # Ok::<(), ass_script::CoreError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod drawing;
pub mod parser;
pub mod tags;
pub mod utils;

pub use drawing::Instruction;
pub use parser::{Dialogue, ParseIssue, ParserConfig, Script, ScriptFormat, Style};
pub use tags::{BoldWeight, Part};
pub use utils::{Color, CoreError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
