//! Override-tag grammar for dialogue text
//!
//! Dialogue text is a sequence of plain runs and `{...}` override blocks.
//! Plain runs become [`Part::Text`] (with `\h` as a non-breaking space) and
//! [`Part::NewLine`]. Inside a block every backslash starts a tag that is
//! dispatched through the [`TagRegistry`]; text that is not a recognised tag
//! is kept verbatim as [`Part::Comment`] so malformed or unsupported tags
//! never abort parsing.
//!
//! # Modules
//!
//! - [`grammar`] - Ordered-choice value alternatives shared by the tags
//! - [`formatting`] - `\b`, `\i`, `\u`, `\s`
//! - [`font`] - `\fn`, `\fs`, `\fscx`, `\fscy`, `\fsp`
//! - [`advanced`] - `\bord`, `\shad`, `\be`, `\blur`
//! - [`rotation`] - `\frx`, `\fry`, `\frz`, `\fax`, `\fay`
//! - [`color`] - `\c`, `\1c`-`\4c`, `\alpha`, `\1a`-`\4a`
//! - [`alignment`] - `\an`, `\a`, `\q`
//! - [`position`] - `\pos`, `\move`, `\org`
//! - [`karaoke`] - `\k`, `\K`, `\kf`, `\ko`
//! - [`animation`] - `\fad`, `\fade`, `\t`
//! - [`clipping`] - `\clip`, `\iclip`
//! - [`drawing_mode`] - `\p`, `\pbo`
//! - [`misc`] - `\r`
//!
//! # Example
//!
//! ```rust
//! use ass_script::tags::{parse_enclosed_tags, parse_dialogue_parts, BoldWeight, Part};
//!
//! assert_eq!(
//!     parse_enclosed_tags(r"{\b10}"),
//!     vec![Part::Bold(Some(BoldWeight::Toggle(true))), Part::Comment("0".to_string())]
//! );
//!
//! let parts = parse_dialogue_parts(r"{\i1}Hello\Nworld");
//! assert_eq!(parts, vec![
//!     Part::Italic(Some(true)),
//!     Part::Text("Hello".to_string()),
//!     Part::NewLine,
//!     Part::Text("world".to_string()),
//! ]);
//! ```

use once_cell::sync::Lazy;

pub mod advanced;
pub mod alignment;
pub mod animation;
pub mod clipping;
pub mod color;
pub mod drawing_mode;
pub mod font;
pub mod formatting;
pub mod grammar;
pub mod karaoke;
pub mod misc;
pub mod part;
pub mod position;
pub mod registry;
pub mod rotation;

pub use part::{BoldWeight, Part};
pub use registry::{TagHandler, TagRegistry};

use crate::drawing::parse_drawing_instructions;

/// Registry with every standard tag, built on first use
static STANDARD_TAGS: Lazy<TagRegistry> = Lazy::new(TagRegistry::with_standard_tags);

/// Every standard override tag handler
#[must_use]
pub fn create_standard_handlers() -> Vec<Box<dyn TagHandler>> {
    let mut handlers = formatting::create_formatting_handlers();
    handlers.extend(font::create_font_handlers());
    handlers.extend(advanced::create_advanced_handlers());
    handlers.extend(rotation::create_rotation_handlers());
    handlers.extend(color::create_color_handlers());
    handlers.extend(alignment::create_alignment_handlers());
    handlers.extend(position::create_position_handlers());
    handlers.extend(karaoke::create_karaoke_handlers());
    handlers.extend(animation::create_animation_handlers());
    handlers.extend(clipping::create_clipping_handlers());
    handlers.extend(drawing_mode::create_drawing_mode_handlers());
    handlers.extend(misc::create_misc_handlers());
    handlers
}

/// Shared registry of the standard tags
#[must_use]
pub fn standard_registry() -> &'static TagRegistry {
    &STANDARD_TAGS
}

/// Parse one tag from the text following a backslash
///
/// Returns the part and the bytes consumed including the tag name.
#[must_use]
pub fn parse_tag(input: &str) -> Option<(Part, usize)> {
    STANDARD_TAGS.parse_tag(input)
}

/// Convert a `0`-`255` transparency number into opacity
pub(crate) fn alpha_from_number(value: f64) -> f64 {
    (1.0 - value / 255.0).clamp(0.0, 1.0)
}

/// Parse the contents of one override block, braces excluded
///
/// Adjacent unrecognised text is merged into a single comment.
#[must_use]
pub fn parse_override_block(content: &str) -> Vec<Part> {
    parse_override_block_with(&STANDARD_TAGS, content)
}

/// Parse override block contents against a custom registry
#[must_use]
pub fn parse_override_block_with(registry: &TagRegistry, content: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut comment = String::new();
    let mut rest = content;

    while let Some(ch) = rest.chars().next() {
        if ch == '\\' {
            if let Some((part, consumed)) = registry.parse_tag(&rest[1..]) {
                if !comment.is_empty() {
                    parts.push(Part::Comment(core::mem::take(&mut comment)));
                }
                parts.push(part);
                rest = &rest[1 + consumed..];
                continue;
            }
        }

        comment.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    if !comment.is_empty() {
        parts.push(Part::Comment(comment));
    }

    parts
}

/// Parse override blocks including their braces, e.g. `{\b1\i1}{\fs20}`
///
/// Text outside braces is kept as [`Part::Text`].
#[must_use]
pub fn parse_enclosed_tags(input: &str) -> Vec<Part> {
    parse_dialogue_parts(input)
}

/// Accumulates plain text between override blocks
struct TextRun<'p> {
    /// Output
    parts: &'p mut Vec<Part>,
    /// Pending text
    buffer: String,
    /// Active `\p` scale, 0 when drawing mode is off
    drawing_scale: f64,
}

impl TextRun<'_> {
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = core::mem::take(&mut self.buffer);

        if self.drawing_scale != 0.0 {
            let instructions = parse_drawing_instructions(&text);
            if !instructions.is_empty() {
                self.parts.push(Part::DrawingInstructions(instructions));
            }
            return;
        }

        match self.parts.last_mut() {
            Some(Part::Text(previous)) => previous.push_str(&text),
            _ => self.parts.push(Part::Text(text)),
        }
    }

    fn push_tags(&mut self, tags: Vec<Part>) {
        self.flush();
        for part in &tags {
            if let Part::DrawingMode(scale) = part {
                self.drawing_scale = *scale;
            }
        }
        self.parts.extend(tags);
    }

    fn push_newline(&mut self) {
        self.flush();
        self.parts.push(Part::NewLine);
    }
}

/// Parse the raw text of an ASS dialogue into parts
///
/// An unmatched `{` is literal text. Consecutive text runs are merged into
/// one [`Part::Text`]. While `\p` is nonzero, text runs are drawing paths.
#[must_use]
pub fn parse_dialogue_parts(text: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut run = TextRun {
        parts: &mut parts,
        buffer: String::new(),
        drawing_scale: 0.0,
    };
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch == '{' {
            if let Some(close) = rest.find('}') {
                run.push_tags(parse_override_block(&rest[1..close]));
                rest = &rest[close + 1..];
                continue;
            }
        } else if ch == '\\' {
            match rest.as_bytes().get(1) {
                Some(b'N' | b'n') => {
                    run.push_newline();
                    rest = &rest[2..];
                    continue;
                }
                Some(b'h') => {
                    run.buffer.push('\u{a0}');
                    rest = &rest[2..];
                    continue;
                }
                _ => {}
            }
        }

        run.buffer.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    run.flush();
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Instruction;
    use pretty_assertions::assert_eq;

    fn comment(text: &str) -> Part {
        Part::Comment(text.to_string())
    }

    #[test]
    fn bold_fallback_leaves_comment() {
        assert_eq!(
            parse_enclosed_tags(r"{\b2}"),
            vec![Part::Bold(None), comment("2")]
        );
        assert_eq!(
            parse_enclosed_tags(r"{\b150}"),
            vec![Part::Bold(Some(BoldWeight::Toggle(true))), comment("50")]
        );
    }

    #[test]
    fn unsupported_transform_is_comment() {
        assert_eq!(
            parse_enclosed_tags(r"{\t(100,200)}"),
            vec![comment(r"\t(100,200)")]
        );
    }

    #[test]
    fn unknown_tags_and_text_merge_into_one_comment() {
        assert_eq!(
            parse_enclosed_tags(r"{\xyz1 note\b1}"),
            vec![
                comment(r"\xyz1 note"),
                Part::Bold(Some(BoldWeight::Toggle(true)))
            ]
        );
    }

    #[test]
    fn prefix_tags_dispatch_to_longest_name() {
        assert_eq!(
            parse_override_block(r"\bord2\be1\blur0.5\b1"),
            vec![
                Part::Border(Some(2.0)),
                Part::Blur(Some(1.0)),
                Part::GaussianBlur(Some(0.5)),
                Part::Bold(Some(BoldWeight::Toggle(true))),
            ]
        );
    }

    #[test]
    fn hard_space_and_newlines() {
        assert_eq!(
            parse_dialogue_parts(r"a\hb\nc"),
            vec![
                Part::Text("a\u{a0}b".to_string()),
                Part::NewLine,
                Part::Text("c".to_string()),
            ]
        );
    }

    #[test]
    fn empty_blocks_merge_surrounding_text() {
        assert_eq!(
            parse_dialogue_parts("Hel{}lo"),
            vec![Part::Text("Hello".to_string())]
        );
    }

    #[test]
    fn unclosed_brace_is_text() {
        assert_eq!(
            parse_dialogue_parts("{oops"),
            vec![Part::Text("{oops".to_string())]
        );
    }

    #[test]
    fn drawing_mode_turns_text_into_paths() {
        assert_eq!(
            parse_dialogue_parts(r"{\p1}m 0 0 l 5 5{\p0}done"),
            vec![
                Part::DrawingMode(1.0),
                Part::DrawingInstructions(vec![
                    Instruction::Move { x: 0.0, y: 0.0 },
                    Instruction::Line { x: 5.0, y: 5.0 },
                ]),
                Part::DrawingMode(0.0),
                Part::Text("done".to_string()),
            ]
        );
    }

    #[test]
    fn standard_registry_has_every_tag() {
        let registry = standard_registry();
        for name in ["b", "fs+", "fscx", "1c", "alpha", "an", "move", "kf", "t", "iclip", "pbo", "r"] {
            assert!(registry.contains(name), "missing \\{name}");
        }
    }

    #[test]
    fn alpha_numbers() {
        assert_eq!(alpha_from_number(0.0), 1.0);
        assert_eq!(alpha_from_number(255.0), 0.0);
        assert_eq!(alpha_from_number(400.0), 0.0);
    }
}
