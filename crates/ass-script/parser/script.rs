//! Script aggregate root
//!
//! A [`Script`] owns the properties, the name-indexed style table, the
//! dialogue list, the attachments and the two `Format:` field lists used to
//! read later lines. It is filled line by line through [`Script::add_style`]
//! and [`Script::add_event`], either directly or by one of the whole-script
//! entry points.

use core::str::FromStr;
use std::io::BufRead;
use std::sync::Arc;

use super::ast::{
    normalize_style_name, Attachment, Dialogue, ScriptProperties, Style, DEFAULT_STYLE_NAME,
};
use super::config::ParserConfig;
use super::errors::{ParseError, ParseIssue};
use super::srt::{looks_like_srt, parse_srt};
use super::streaming::{ReaderStream, Stream, StreamParser};
use super::template::{parse_line_template, FormatSpecifier, LineKind};
use crate::utils::{create_hash_map, CoreError, HashMap, Result};

/// Input dialect for whole-script parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptFormat {
    /// Advanced SubStation Alpha (also accepts SSA v4)
    Ass,
    /// SubRip
    Srt,
    /// Decide from the first lines of the input
    #[default]
    Auto,
}

impl ScriptFormat {
    /// Resolve `Auto` against the input text
    #[must_use]
    pub fn resolve(self, text: &str) -> Self {
        match self {
            Self::Auto if looks_like_srt(text) => Self::Srt,
            Self::Auto => Self::Ass,
            explicit => explicit,
        }
    }
}

/// Parsed subtitle script
///
/// # Example
///
/// ```rust
/// use ass_script::Script;
///
/// let script = Script::parse(r"[Script Info]
/// PlayResX: 1280
///
/// [V4+ Styles]
/// Format: Name, Fontname, Fontsize, Alignment
/// Style: Sign,Arial,30,8
///
/// [Events]
/// Format: Layer, Start, End, Style, Text
/// Dialogue: 0,0:00:01.00,0:00:03.00,Sign,{\b1}Hello")?;
///
/// assert_eq!(script.properties().resolution_x(), 1280);
/// assert_eq!(script.dialogues().len(), 1);
/// assert_eq!(script.dialogues()[0].alignment(), 8);
/// # Ok::<(), ass_script::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Script {
    /// `[Script Info]`
    properties: ScriptProperties,
    /// Styles in declaration order
    styles: Vec<Arc<Style>>,
    /// Style name to position in `styles`
    style_index: HashMap<String, usize>,
    /// Dialogues in file order
    dialogues: Vec<Dialogue>,
    /// Embedded fonts and graphics
    attachments: Vec<Attachment>,
    /// Field names declared by the styles `Format:` line
    styles_format: Option<FormatSpecifier>,
    /// Field names declared by the events `Format:` line
    events_format: Option<FormatSpecifier>,
    /// Ingestion options
    config: ParserConfig,
    /// Lines that were skipped or rejected
    issues: Vec<ParseIssue>,
    /// Id of the next dialogue
    next_dialogue_id: u64,
}

impl Script {
    /// Create an empty script
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create an empty script with ingestion options
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            properties: ScriptProperties::default(),
            styles: Vec::new(),
            style_index: create_hash_map(),
            dialogues: Vec::new(),
            attachments: Vec::new(),
            styles_format: None,
            events_format: None,
            config,
            issues: Vec::new(),
            next_dialogue_id: 1,
        }
    }

    /// Parse a whole script, detecting ASS or SRT
    ///
    /// # Errors
    ///
    /// See [`Script::from_str_with_config`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_str_with_format(text, ScriptFormat::Auto)
    }

    /// Parse a whole script in the given format
    ///
    /// # Errors
    ///
    /// See [`Script::from_str_with_config`].
    pub fn from_str_with_format(text: &str, format: ScriptFormat) -> Result<Self> {
        Self::from_str_with_config(text, format, ParserConfig::default())
    }

    /// Parse a whole script with explicit options
    ///
    /// Lines that fail to build are recorded in [`Script::issues`] unless
    /// `config.strict` is set.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first line construction error.
    pub fn from_str_with_config(
        text: &str,
        format: ScriptFormat,
        config: ParserConfig,
    ) -> Result<Self> {
        match format.resolve(text) {
            ScriptFormat::Srt => parse_srt(text, config),
            _ => {
                let mut parser = StreamParser::new(config);
                for line in text.lines() {
                    parser.feed_line(line)?;
                }
                parser.finish()
            }
        }
    }

    /// Parse a script from a line stream
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the stream fails, otherwise see
    /// [`Script::from_str_with_config`].
    pub fn from_stream<S: Stream + ?Sized>(stream: &mut S, format: ScriptFormat) -> Result<Self> {
        Self::from_stream_with_config(stream, format, ParserConfig::default())
    }

    /// Parse a script from a line stream with explicit options
    ///
    /// ASS input is processed line by line as it arrives. SRT and
    /// auto-detected input is collected first.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the stream fails, otherwise see
    /// [`Script::from_str_with_config`].
    pub fn from_stream_with_config<S: Stream + ?Sized>(
        stream: &mut S,
        format: ScriptFormat,
        config: ParserConfig,
    ) -> Result<Self> {
        if format == ScriptFormat::Ass {
            let mut parser = StreamParser::new(config);
            while let Some(line) = stream.next_line()? {
                parser.feed_line(&line)?;
            }
            return parser.finish();
        }

        let mut text = String::new();
        while let Some(line) = stream.next_line()? {
            text.push_str(&line);
            text.push('\n');
        }
        Self::from_str_with_config(&text, format, config)
    }

    /// Parse a script from a buffered reader
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] on read failure, otherwise see
    /// [`Script::from_str_with_config`].
    pub fn from_reader<R: BufRead>(reader: R, format: ScriptFormat) -> Result<Self> {
        Self::from_stream(&mut ReaderStream::new(reader), format)
    }

    /// Script-wide properties
    #[must_use]
    pub const fn properties(&self) -> &ScriptProperties {
        &self.properties
    }

    /// Mutable script-wide properties, for header parsing
    pub fn properties_mut(&mut self) -> &mut ScriptProperties {
        &mut self.properties
    }

    /// Styles in declaration order
    #[must_use]
    pub fn styles(&self) -> &[Arc<Style>] {
        &self.styles
    }

    /// Look up a style by name, normalized with [`normalize_style_name`]
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&Arc<Style>> {
        self.style_index
            .get(normalize_style_name(name))
            .and_then(|&index| self.styles.get(index))
    }

    /// Dialogues in file order
    #[must_use]
    pub fn dialogues(&self) -> &[Dialogue] {
        &self.dialogues
    }

    /// Embedded fonts and graphics
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Ingestion options
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Lines that were skipped or rejected during ingestion
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Record an ingestion issue
    pub fn record_issue(&mut self, issue: ParseIssue) {
        self.issues.push(issue);
    }

    /// Field names declared for styles
    #[must_use]
    pub fn styles_format(&self) -> Option<&[String]> {
        self.styles_format.as_deref()
    }

    /// Field names declared for events
    #[must_use]
    pub fn events_format(&self) -> Option<&[String]> {
        self.events_format.as_deref()
    }

    /// Declare the styles format specifier
    pub fn set_styles_format(&mut self, fields: FormatSpecifier) {
        self.styles_format = Some(fields);
    }

    /// Declare the events format specifier
    pub fn set_events_format(&mut self, fields: FormatSpecifier) {
        self.events_format = Some(fields);
    }

    /// Add a style from a `Style:` line
    ///
    /// Returns `Ok(None)` for lines that are not style lines. A style with an
    /// existing name replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingFormat`] before a styles `Format:` line,
    /// or the construction error of [`Style::from_template`].
    pub fn add_style(&mut self, line: &str) -> Result<Option<Arc<Style>>> {
        let format = self.styles_format.as_deref().ok_or_else(|| {
            CoreError::from(ParseError::MissingFormat {
                section: "V4+ Styles".to_string(),
            })
        })?;

        let Some(template) = parse_line_template(line, format) else {
            return Ok(None);
        };
        if template.kind() != LineKind::Style {
            return Ok(None);
        }

        let style = Style::from_template(&template)?;
        Ok(Some(self.insert_style(style)))
    }

    /// Insert a style, replacing any style with the same name
    pub fn insert_style(&mut self, style: Style) -> Arc<Style> {
        let style = Arc::new(style);
        match self.style_index.get(style.name()) {
            Some(&index) => self.styles[index] = Arc::clone(&style),
            None => {
                self.style_index
                    .insert(style.name().to_string(), self.styles.len());
                self.styles.push(Arc::clone(&style));
            }
        }
        style
    }

    /// The `Default` style, synthesized and registered if absent
    ///
    /// # Errors
    ///
    /// Only fails if the built-in default style is inconsistent.
    pub fn default_style(&mut self) -> Result<Arc<Style>> {
        if let Some(style) = self.style(DEFAULT_STYLE_NAME) {
            return Ok(Arc::clone(style));
        }
        log::debug!("synthesizing fallback '{DEFAULT_STYLE_NAME}' style");
        let style = Style::canonical_default()?;
        Ok(self.insert_style(style))
    }

    /// Resolve a dialogue's style name, falling back to `Default`
    ///
    /// # Errors
    ///
    /// Only fails if the built-in default style is inconsistent.
    pub fn resolve_style(&mut self, name: Option<&str>) -> Result<Arc<Style>> {
        let found = name.and_then(|name| self.style(name)).map(Arc::clone);

        match found {
            Some(style) => Ok(style),
            None => self.default_style(),
        }
    }

    /// Add a dialogue from a `Dialogue:` line
    ///
    /// Returns `Ok(None)` for lines that are not dialogue lines. `Comment:`
    /// lines are kept only when
    /// [`ParserConfig::keep_comment_events`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingFormat`] before an events `Format:` line,
    /// or the construction error of [`Dialogue::from_template`].
    pub fn add_event(&mut self, line: &str) -> Result<Option<&Dialogue>> {
        let format = self.events_format.as_deref().ok_or_else(|| {
            CoreError::from(ParseError::MissingFormat {
                section: "Events".to_string(),
            })
        })?;

        let Some(template) = parse_line_template(line, format) else {
            return Ok(None);
        };
        match template.kind() {
            LineKind::Dialogue => {}
            LineKind::Comment if self.config.keep_comment_events => {}
            _ => return Ok(None),
        }
        if template.get("Text").is_none() {
            return Err(CoreError::MissingField("Text".to_string()));
        }

        let style = self.resolve_style(template.get("Style"))?;
        let dialogue = Dialogue::from_template(&template, self.next_dialogue_id, style, &self.config)?;
        Ok(Some(self.push_dialogue(dialogue)))
    }

    /// Add a dialogue whose text uses SRT markup, styled with `Default`
    ///
    /// # Errors
    ///
    /// Only fails if the built-in default style is inconsistent.
    pub fn add_srt_dialogue(&mut self, start: f64, end: f64, text: &str) -> Result<&Dialogue> {
        let style = self.default_style()?;
        let dialogue = Dialogue::from_srt(self.next_dialogue_id, style, start, end, text)
            .with_debug_parse_warnings(self.config.debug_parse_warnings);
        Ok(self.push_dialogue(dialogue))
    }

    fn push_dialogue(&mut self, dialogue: Dialogue) -> &Dialogue {
        self.next_dialogue_id += 1;
        self.dialogues.push(dialogue);
        &self.dialogues[self.dialogues.len() - 1]
    }

    /// Add an embedded attachment
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Script {
    type Err = CoreError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Script {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let styles: Vec<&Style> = self.styles.iter().map(|style| style.as_ref()).collect();
        let mut state = serializer.serialize_struct("Script", 4)?;
        state.serialize_field("properties", &self.properties)?;
        state.serialize_field("styles", &styles)?;
        state.serialize_field("dialogues", &self.dialogues)?;
        state.serialize_field("attachments", &self.attachments)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::template::parse_format_line;

    fn script_with_formats() -> Script {
        let mut script = Script::new();
        script.set_styles_format(parse_format_line("Format: Name, Fontname, Alignment").unwrap());
        script.set_events_format(
            parse_format_line("Format: Layer, Start, End, Style, Text").unwrap(),
        );
        script
    }

    #[test]
    fn add_before_format_fails() {
        let mut script = Script::new();
        assert!(matches!(
            script.add_style("Style: A,Arial,2"),
            Err(CoreError::Parse(ParseError::MissingFormat { .. }))
        ));
        assert!(matches!(
            script.add_event("Dialogue: 0,0:00:00.00,0:00:01.00,A,x"),
            Err(CoreError::Parse(ParseError::MissingFormat { .. }))
        ));
    }

    #[test]
    fn non_style_lines_are_skipped() {
        let mut script = script_with_formats();
        assert_eq!(script.add_style("Dialogue: a,b,c").unwrap(), None);
        assert_eq!(script.add_style("Style: short").unwrap(), None);
        assert!(script.styles().is_empty());
    }

    #[test]
    fn duplicate_style_names_replace() {
        let mut script = script_with_formats();
        script.add_style("Style: Main,Arial,2").unwrap();
        script.add_style("Style: Main,Verdana,8").unwrap();

        assert_eq!(script.styles().len(), 1);
        let main = script.style("Main").unwrap();
        assert_eq!(main.font_name(), "Verdana");
        assert_eq!(main.alignment(), 8);
    }

    #[test]
    fn unknown_style_falls_back_to_synthesized_default() {
        let mut script = script_with_formats();
        let dialogue = script
            .add_event("Dialogue: 0,0:00:00.00,0:00:01.00,Missing,Text")
            .unwrap()
            .unwrap();
        assert_eq!(dialogue.style().name(), "Default");
        assert_eq!(script.styles().len(), 1);

        script
            .add_event("Dialogue: 0,0:00:01.00,0:00:02.00,Other,Text")
            .unwrap();
        assert_eq!(script.styles().len(), 1);
        assert!(Arc::ptr_eq(
            script.dialogues()[0].style(),
            script.dialogues()[1].style()
        ));
    }

    #[test]
    fn dialogue_ids_increment() {
        let mut script = script_with_formats();
        script.add_style("Style: A,Arial,1").unwrap();
        for _ in 0..3 {
            script
                .add_event("Dialogue: 0,0:00:00.00,0:00:01.00,A,x")
                .unwrap();
        }
        let ids: Vec<u64> = script.dialogues().iter().map(Dialogue::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn comment_events_are_opt_in() {
        let mut script = script_with_formats();
        assert!(script
            .add_event("Comment: 0,0:00:00.00,0:00:01.00,A,note")
            .unwrap()
            .is_none());

        let mut script = Script::with_config(ParserConfig::default().with_comment_events(true));
        script.set_events_format(parse_format_line("Format: Start, End, Style, Text").unwrap());
        let dialogue = script
            .add_event("Comment: 0:00:00.00,0:00:01.00,A,note")
            .unwrap()
            .unwrap();
        assert!(dialogue.is_comment());
    }

    #[test]
    fn format_detection() {
        assert_eq!(
            ScriptFormat::Auto.resolve("1\n00:00:01,000 --> 00:00:02,000\nHi\n"),
            ScriptFormat::Srt
        );
        assert_eq!(
            ScriptFormat::Auto.resolve("[Script Info]\nTitle: x\n"),
            ScriptFormat::Ass
        );
        assert_eq!(ScriptFormat::Srt.resolve("[Script Info]"), ScriptFormat::Srt);
    }
}
