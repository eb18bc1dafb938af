//! Line template parser for `Format:`-driven sections
//!
//! `[V4+ Styles]` and `[Events]` declare their column order with a `Format:`
//! line. Every following data line is split by commas into exactly that many
//! values, except that the last declared field swallows the rest of the line
//! (dialogue text is free-form and may contain commas).
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::template::{parse_format_line, parse_line_template, LineKind};
//!
//! let format = parse_format_line("Format: Layer, Start, End, Style, Text").unwrap();
//! let template = parse_line_template("Dialogue: 0,0:00:01.00,0:00:02.00,Default,Hi, there", &format).unwrap();
//!
//! assert_eq!(template.kind(), LineKind::Dialogue);
//! assert_eq!(template.get("text"), Some("Hi, there"));
//! ```

use core::fmt;

use crate::utils::{value_or_default, Result};

/// Ordered field names declared by a `Format:` line
pub type FormatSpecifier = Vec<String>;

/// Kind keyword at the start of a tabular line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    /// `Style:` line
    Style,
    /// `Dialogue:` event
    Dialogue,
    /// `Comment:` event (never displayed)
    Comment,
    /// `Picture:` event
    Picture,
    /// `Sound:` event
    Sound,
    /// `Movie:` event
    Movie,
    /// `Command:` event
    Command,
}

impl LineKind {
    /// Recognise a kind keyword (case-insensitive, without the colon)
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        const KEYWORDS: [(&str, LineKind); 7] = [
            ("Style", LineKind::Style),
            ("Dialogue", LineKind::Dialogue),
            ("Comment", LineKind::Comment),
            ("Picture", LineKind::Picture),
            ("Sound", LineKind::Sound),
            ("Movie", LineKind::Movie),
            ("Command", LineKind::Command),
        ];

        let keyword = keyword.trim();
        KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(keyword))
            .map(|(_, kind)| *kind)
    }

    /// Keyword as written in scripts
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style => "Style",
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
            Self::Picture => "Picture",
            Self::Sound => "Sound",
            Self::Movie => "Movie",
            Self::Command => "Command",
        }
    }

    /// Whether this kind belongs to the `[Events]` section
    #[must_use]
    pub const fn is_event(self) -> bool {
        !matches!(self, Self::Style)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tabular line split according to a format specifier
///
/// Field order follows the `Format:` header; lookups ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedTemplate {
    /// Line kind keyword
    kind: LineKind,
    /// `(field name, raw value)` in declaration order
    fields: Vec<(String, String)>,
}

impl TypedTemplate {
    /// Build a template from already-split fields
    #[must_use]
    pub const fn new(kind: LineKind, fields: Vec<(String, String)>) -> Self {
        Self { kind, fields }
    }

    /// Line kind
    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    /// Raw value of a field (case-insensitive lookup)
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.as_str())
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the template has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Read a field with the default/validate policy
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFieldValue`](crate::CoreError::InvalidFieldValue)
    /// if the converted value fails `validate`.
    pub fn value_or_default<T, C>(
        &self,
        field: &str,
        convert: C,
        validate: Option<fn(&T) -> bool>,
        default: &str,
    ) -> Result<T>
    where
        C: Fn(&str) -> Result<T>,
    {
        value_or_default(field, self.get(field), convert, validate, default)
    }
}

/// Parse a `Format:` line into its field names
///
/// Returns `None` when the line is not a format line or declares no fields.
#[must_use]
pub fn parse_format_line(line: &str) -> Option<FormatSpecifier> {
    let (keyword, rest) = line.split_once(':')?;
    if !keyword.trim().eq_ignore_ascii_case("Format") {
        return None;
    }

    let fields: FormatSpecifier = rest
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(ToString::to_string)
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Split a tabular line according to a format specifier
///
/// The last declared field greedily absorbs the remainder of the line,
/// commas included, and is not trimmed. Every other value is trimmed.
///
/// Returns `None` if the kind keyword is not recognised or the line has
/// fewer values than declared fields; callers treat that as "not a
/// Style/Dialogue line" and move on.
#[must_use]
pub fn parse_line_template(line: &str, field_names: &[String]) -> Option<TypedTemplate> {
    if field_names.is_empty() {
        return None;
    }

    let (keyword, rest) = line.split_once(':')?;
    let kind = LineKind::from_keyword(keyword)?;

    let values: Vec<&str> = rest.trim_start().splitn(field_names.len(), ',').collect();
    if values.len() < field_names.len() {
        return None;
    }

    let last = field_names.len() - 1;
    let fields = field_names
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (name, value))| {
            let value = if index == last { value } else { value.trim() };
            (name.clone(), value.to_string())
        })
        .collect();

    Some(TypedTemplate::new(kind, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_format() -> Vec<String> {
        parse_format_line(
            "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text",
        )
        .unwrap()
    }

    #[test]
    fn format_line_fields_are_trimmed() {
        let fields = parse_format_line("Format:  Name ,Fontname,  Fontsize").unwrap();
        assert_eq!(fields, vec!["Name", "Fontname", "Fontsize"]);
        assert!(parse_format_line("Style: a,b").is_none());
        assert!(parse_format_line("Format:").is_none());
    }

    #[test]
    fn last_field_absorbs_commas() {
        let template = parse_line_template(
            "Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello, world, again",
            &events_format(),
        )
        .unwrap();

        assert_eq!(template.kind(), LineKind::Dialogue);
        assert_eq!(template.len(), 10);
        assert_eq!(template.get("Text"), Some("Hello, world, again"));
        assert_eq!(template.get("style"), Some("Default"));
        assert_eq!(template.get("Name"), Some(""));
    }

    #[test]
    fn last_field_keeps_whitespace() {
        let format = vec!["Style".to_string(), "Text".to_string()];
        let template = parse_line_template("Comment: Default,  padded  ", &format).unwrap();
        assert_eq!(template.kind(), LineKind::Comment);
        assert_eq!(template.get("Text"), Some("  padded  "));
    }

    #[test]
    fn values_are_trimmed_except_last() {
        let format = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let template = parse_line_template("Style:  x , y ,z ", &format).unwrap();
        let fields: Vec<_> = template.fields().collect();
        assert_eq!(fields, vec![("A", "x"), ("B", "y"), ("C", "z ")]);
    }

    #[test]
    fn unrecognised_or_short_lines_are_not_templates() {
        let format = events_format();
        assert!(parse_line_template("Banana: 1,2,3", &format).is_none());
        assert!(parse_line_template("Dialogue: 0,0:00:00.00", &format).is_none());
        assert!(parse_line_template("no colon here", &format).is_none());
        assert!(parse_line_template("Dialogue: a", &[]).is_none());
    }
}
