//! Dialogue events from the `[Events]` section
//!
//! The raw text is stored as written and parsed into parts on first access.
//! The parsed list is memoized in a single-assignment cell, so every later
//! read returns the same slice.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::Style;
use crate::parser::config::ParserConfig;
use crate::parser::srt::parse_srt_text;
use crate::parser::template::{LineKind, TypedTemplate};
use crate::tags::{parse_dialogue_parts, Part};
use crate::utils::{parse_int, parse_time, CoreError, Result};

/// Markup language of the raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDialect {
    /// ASS override blocks
    #[default]
    Ass,
    /// SRT HTML-like subset
    Srt,
}

/// Parts with the values derived from them
#[derive(Debug, Clone)]
struct ParsedText {
    /// Post-processed parts
    parts: Vec<Part>,
    /// Effective alignment
    alignment: u8,
}

/// One subtitle event
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use ass_script::parser::ast::{Dialogue, Style};
/// use ass_script::tags::Part;
///
/// let style = Arc::new(Style::canonical_default()?);
/// let dialogue = Dialogue::new(1, style, 1.0, 4.0, 0, r"{\an8}Top");
///
/// assert_eq!(dialogue.alignment(), 8);
/// assert_eq!(dialogue.parts()[1], Part::Text("Top".to_string()));
/// # Ok::<(), ass_script::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dialogue {
    /// Sequence number within the owning script
    id: u64,
    /// Resolved style
    style: Arc<Style>,
    /// Start time in seconds
    start: f64,
    /// End time in seconds
    end: f64,
    /// Z order
    layer: u32,
    /// Raw text as written
    raw_text: String,
    /// Markup language of `raw_text`
    dialect: TextDialect,
    /// Came from a `Comment:` line
    comment: bool,
    /// Warn about suspicious comments after parsing
    debug_parse_warnings: bool,
    /// Parsed on first access
    parsed: OnceCell<ParsedText>,
}

impl Dialogue {
    /// Create an ASS dialogue directly
    pub fn new(
        id: u64,
        style: Arc<Style>,
        start: f64,
        end: f64,
        layer: u32,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            style,
            start,
            end,
            layer,
            raw_text: raw_text.into(),
            dialect: TextDialect::Ass,
            comment: false,
            debug_parse_warnings: false,
            parsed: OnceCell::new(),
        }
    }

    /// Build a dialogue from a `Dialogue:`/`Comment:` template
    ///
    /// `style` is the already-resolved style for the template's `Style`
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] without a `Text`, `Start` or `End`
    /// field and [`CoreError::InvalidTime`] when a time does not decode.
    pub fn from_template(
        template: &TypedTemplate,
        id: u64,
        style: Arc<Style>,
        config: &ParserConfig,
    ) -> Result<Self> {
        let raw_text = template
            .get("Text")
            .ok_or_else(|| CoreError::MissingField("Text".to_string()))?;

        let time = |field: &str| -> Result<f64> {
            template
                .get(field)
                .ok_or_else(|| CoreError::MissingField(field.to_string()))
                .and_then(parse_time)
        };
        let start = time("Start")?;
        let end = time("End")?;

        let layer = template.value_or_default("Layer", parse_int, None, "0")?;
        let layer = u32::try_from(layer.max(0)).unwrap_or(u32::MAX);

        let mut dialogue = Self::new(id, style, start, end, layer, raw_text);
        dialogue.comment = template.kind() == LineKind::Comment;
        dialogue.debug_parse_warnings = config.debug_parse_warnings;
        Ok(dialogue)
    }

    /// Create a dialogue whose text uses SRT markup
    pub fn from_srt(
        id: u64,
        style: Arc<Style>,
        start: f64,
        end: f64,
        raw_text: impl Into<String>,
    ) -> Self {
        let mut dialogue = Self::new(id, style, start, end, 0, raw_text);
        dialogue.dialect = TextDialect::Srt;
        dialogue
    }

    /// Enable or disable suspicious-comment warnings
    #[must_use]
    pub fn with_debug_parse_warnings(mut self, enabled: bool) -> Self {
        self.debug_parse_warnings = enabled;
        self
    }

    /// Sequence number within the owning script
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Resolved style
    #[must_use]
    pub fn style(&self) -> &Arc<Style> {
        &self.style
    }

    /// Start time in seconds
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// End time in seconds
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Visible duration in seconds
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Layer, higher is drawn on top
    #[must_use]
    pub const fn layer(&self) -> u32 {
        self.layer
    }

    /// Text exactly as written
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Markup language of the raw text
    #[must_use]
    pub const fn dialect(&self) -> TextDialect {
        self.dialect
    }

    /// Whether the event came from a `Comment:` line
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        self.comment
    }

    /// Whether `time` falls within `[start, end)`
    #[must_use]
    pub fn contains_time(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    /// Parsed parts, computed on first access
    pub fn parts(&self) -> &[Part] {
        &self.parsed().parts
    }

    /// Effective alignment: the first `\an`/`\a` in the text, else the
    /// style's alignment
    pub fn alignment(&self) -> u8 {
        self.parsed().alignment
    }

    /// Whether the parts have been computed yet
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }

    fn parsed(&self) -> &ParsedText {
        self.parsed.get_or_init(|| self.parse_text())
    }

    fn parse_text(&self) -> ParsedText {
        let mut parts = match self.dialect {
            TextDialect::Ass => parse_dialogue_parts(&self.raw_text),
            TextDialect::Srt => parse_srt_text(&self.raw_text),
        };

        let duration = self.duration();
        for part in &mut parts {
            fill_default_timing(part, duration);
        }

        let alignment = parts
            .iter()
            .find_map(|part| match part {
                Part::Alignment(alignment) => Some(*alignment),
                _ => None,
            })
            .unwrap_or_else(|| self.style.alignment());

        if self.debug_parse_warnings {
            for comment in parts.iter().filter_map(Part::as_comment) {
                if comment.contains('\\') {
                    log::warn!(
                        "dialogue {} possibly parsed incorrectly, leftover comment {comment:?} in {:?}",
                        self.id,
                        self.raw_text
                    );
                }
            }
        }

        ParsedText { parts, alignment }
    }
}

/// Default unspecified `\move` and `\t` bounds to the whole dialogue
fn fill_default_timing(part: &mut Part, duration: f64) {
    match part {
        Part::Move { t1, t2, .. } if t1.is_none() && t2.is_none() => {
            *t1 = Some(0.0);
            *t2 = Some(duration);
        }
        Part::Transform {
            start, end, accel, ..
        } => {
            start.get_or_insert(0.0);
            end.get_or_insert(duration);
            accel.get_or_insert(1.0);
        }
        _ => {}
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dialogue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Dialogue", 9)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("style", self.style.name())?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("layer", &self.layer)?;
        state.serialize_field("comment", &self.comment)?;
        state.serialize_field("text", &self.raw_text)?;
        state.serialize_field("parts", self.parts())?;
        state.serialize_field("alignment", &self.alignment())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::template::{parse_format_line, parse_line_template};
    use crate::tags::BoldWeight;
    use pretty_assertions::assert_eq;

    fn default_style() -> Arc<Style> {
        Arc::new(Style::canonical_default().unwrap())
    }

    #[test]
    fn parts_are_memoized() {
        let dialogue = Dialogue::new(1, default_style(), 0.0, 1.0, 0, r"{\b1}Hi");
        assert!(!dialogue.is_parsed());

        let first = dialogue.parts().as_ptr();
        let second = dialogue.parts().as_ptr();
        assert!(dialogue.is_parsed());
        assert_eq!(first, second);
    }

    #[test]
    fn first_alignment_part_wins() {
        let dialogue = Dialogue::new(1, default_style(), 0.0, 1.0, 0, r"{\an7}a{\an3}b");
        assert_eq!(dialogue.alignment(), 7);

        let plain = Dialogue::new(2, default_style(), 0.0, 1.0, 0, "b");
        assert_eq!(plain.alignment(), 2);
    }

    #[test]
    fn untimed_move_and_transform_span_the_dialogue() {
        let dialogue = Dialogue::new(
            1,
            default_style(),
            10.0,
            12.5,
            0,
            r"{\move(0,0,10,10)\t(\fs30)}x",
        );

        assert_eq!(
            dialogue.parts()[..2],
            [
                Part::Move {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 10.0,
                    y2: 10.0,
                    t1: Some(0.0),
                    t2: Some(2.5)
                },
                Part::Transform {
                    start: Some(0.0),
                    end: Some(2.5),
                    accel: Some(1.0),
                    tags: vec![Part::FontSize(Some(30.0))]
                },
            ]
        );
    }

    #[test]
    fn same_text_gives_same_parts_up_to_animation_bounds() {
        let text = r"{\move(0,0,10,10)\t(\b1)\b1}x";
        let short = Dialogue::new(1, default_style(), 0.0, 5.0, 0, text);
        let long = Dialogue::new(2, default_style(), 2.0, 10.0, 0, text);

        let is_animation = |part: &&Part| matches!(part, Part::Move { .. } | Part::Transform { .. });
        let still = |dialogue: &Dialogue| -> Vec<Part> {
            dialogue
                .parts()
                .iter()
                .filter(|part| !is_animation(part))
                .cloned()
                .collect()
        };
        assert_eq!(still(&short), still(&long));
        assert_eq!(
            still(&short),
            [
                Part::Bold(Some(BoldWeight::Toggle(true))),
                Part::Text("x".to_string())
            ]
        );

        for dialogue in [&short, &long] {
            let duration = dialogue.duration();
            for part in dialogue.parts() {
                match part {
                    Part::Move { t1, t2, .. } => {
                        assert_eq!((*t1, *t2), (Some(0.0), Some(duration)));
                    }
                    Part::Transform { start, end, tags, .. } => {
                        assert_eq!((*start, *end), (Some(0.0), Some(duration)));
                        assert_eq!(tags, &[Part::Bold(Some(BoldWeight::Toggle(true)))]);
                    }
                    _ => {}
                }
            }
        }
        assert_eq!((short.duration(), long.duration()), (5.0, 8.0));
    }

    #[test]
    fn template_construction() {
        let format = parse_format_line("Format: Layer, Start, End, Style, Text").unwrap();
        let template =
            parse_line_template("Dialogue: -3,0:00:01.00,0:00:02.50,Default,Hi, all", &format)
                .unwrap();

        let dialogue =
            Dialogue::from_template(&template, 4, default_style(), &ParserConfig::default())
                .unwrap();
        assert_eq!(dialogue.id(), 4);
        assert_eq!(dialogue.layer(), 0);
        assert_eq!(dialogue.start(), 1.0);
        assert_eq!(dialogue.end(), 2.5);
        assert_eq!(dialogue.raw_text(), "Hi, all");
        assert!(dialogue.contains_time(1.0));
        assert!(!dialogue.contains_time(2.5));
    }

    #[test]
    fn missing_text_or_bad_time_fails() {
        let format = parse_format_line("Format: Start, End, Style").unwrap();
        let template =
            parse_line_template("Dialogue: 0:00:01.00,0:00:02.00,Default", &format).unwrap();
        assert_eq!(
            Dialogue::from_template(&template, 1, default_style(), &ParserConfig::default())
                .unwrap_err(),
            CoreError::MissingField("Text".to_string())
        );

        let format = parse_format_line("Format: Start, End, Text").unwrap();
        let template = parse_line_template("Dialogue: soon,0:00:02.00,x", &format).unwrap();
        assert!(matches!(
            Dialogue::from_template(&template, 1, default_style(), &ParserConfig::default()),
            Err(CoreError::InvalidTime(_))
        ));
    }
}
