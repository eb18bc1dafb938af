//! Line processor that feeds a [`Script`] one line at a time
//!
//! Tracks the current section, routes each line to the matching builder and
//! turns per-line construction failures into [`ParseIssue`]s unless the
//! configuration is strict.

use super::state::SectionKind;
use crate::parser::ast::{Attachment, AttachmentType};
use crate::parser::config::ParserConfig;
use crate::parser::errors::{IssueCategory, IssueSeverity, ParseError, ParseIssue};
use crate::parser::template::{parse_format_line, FormatSpecifier};
use crate::parser::Script;
use crate::utils::{CoreError, Result};

/// Attachment whose data lines are still being collected
#[derive(Debug, Clone)]
struct PendingAttachment {
    /// Declared file name
    filename: String,
    /// Font or graphic
    attachment_type: AttachmentType,
    /// Encoded data lines
    lines: Vec<String>,
    /// Line number of the `fontname:`/`filename:` line
    line_number: usize,
}

/// Incremental ASS parser
///
/// # Example
///
/// ```rust
/// use ass_script::parser::{ParserConfig, StreamParser};
///
/// let mut parser = StreamParser::new(ParserConfig::default());
/// for line in ["[Events]", "Format: Start, End, Style, Text", "Dialogue: 0:00:00.00,0:00:01.00,Default,Hi"] {
///     parser.feed_line(line)?;
/// }
/// let script = parser.finish()?;
/// assert_eq!(script.dialogues()[0].raw_text(), "Hi");
/// # Ok::<(), ass_script::CoreError>(())
/// ```
#[derive(Debug)]
pub struct StreamParser {
    /// Script being filled
    script: Script,
    /// Current section
    section: SectionKind,
    /// Attachment being collected in `[Fonts]`/`[Graphics]`
    attachment: Option<PendingAttachment>,
    /// 1-based number of the last line fed
    line_number: usize,
}

impl StreamParser {
    /// Create a parser filling an empty script
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            script: Script::with_config(config),
            section: SectionKind::default(),
            attachment: None,
            line_number: 0,
        }
    }

    /// Section of the last line fed
    #[must_use]
    pub const fn section(&self) -> SectionKind {
        self.section
    }

    /// Number of lines fed so far
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Script as filled so far
    #[must_use]
    pub const fn script(&self) -> &Script {
        &self.script
    }

    /// Process one line
    ///
    /// # Errors
    ///
    /// In strict mode, returns the construction error of the line. Otherwise
    /// the error is recorded as an issue and `Ok` is returned.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;

        let mut line = raw.trim_end_matches(['\r', '\n']);
        if self.line_number == 1 {
            line = line.trim_start_matches('\u{feff}');
        }
        let trimmed = line.trim();

        if let Some(header) = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            let result = self.finish_attachment();
            self.section = SectionKind::from_header(header);
            log::trace!("line {}: entering [{header}] as {}", self.line_number, self.section);
            return self.recover(result, IssueCategory::Attachment);
        }

        if self.section.holds_attachments() {
            let result = self.attachment_line(trimmed);
            return self.recover(result, IssueCategory::Attachment);
        }

        if trimmed.is_empty() || trimmed.starts_with(';') {
            return Ok(());
        }

        match self.section {
            SectionKind::ScriptInfo => {
                let result = self.script_info_line(trimmed);
                self.recover(result, IssueCategory::Properties)
            }
            SectionKind::Styles => {
                let result = self.styles_line(trimmed);
                self.recover(result, IssueCategory::Style)
            }
            SectionKind::Events => {
                let result = self.events_line(line.trim_start());
                self.recover(result, IssueCategory::Event)
            }
            SectionKind::Preamble
            | SectionKind::Unknown
            | SectionKind::Fonts
            | SectionKind::Graphics => Ok(()),
        }
    }

    /// Flush pending state and return the script
    ///
    /// # Errors
    ///
    /// In strict mode, returns the error of an unterminated attachment with
    /// malformed data.
    pub fn finish(mut self) -> Result<Script> {
        let result = self.finish_attachment();
        self.recover(result, IssueCategory::Attachment)?;
        log::debug!(
            "parsed {} lines: {} styles, {} dialogues, {} attachments, {} issues",
            self.line_number,
            self.script.styles().len(),
            self.script.dialogues().len(),
            self.script.attachments().len(),
            self.script.issues().len()
        );
        Ok(self.script)
    }

    /// Record a recoverable error as an issue unless strict
    fn recover(&mut self, result: Result<()>, category: IssueCategory) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) if !self.script.config().strict && err.is_recoverable() => {
                log::debug!("line {}: skipped ({err})", self.line_number);
                self.script
                    .record_issue(ParseIssue::error(category, err.to_string(), self.line_number));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn script_info_line(&mut self, line: &str) -> Result<()> {
        match line.split_once(':') {
            Some((key, value)) => self.script.properties_mut().set(key, value),
            None => {
                self.script.record_issue(ParseIssue::warning(
                    IssueCategory::Properties,
                    format!("ignored header line without ':': {line}"),
                    self.line_number,
                ));
                Ok(())
            }
        }
    }

    fn styles_line(&mut self, line: &str) -> Result<()> {
        if let Some(fields) = format_fields(line)? {
            self.script.set_styles_format(fields);
            return Ok(());
        }
        if self.script.add_style(line)?.is_none() {
            self.skipped(IssueCategory::Style, line);
        }
        Ok(())
    }

    fn events_line(&mut self, line: &str) -> Result<()> {
        if let Some(fields) = format_fields(line)? {
            self.script.set_events_format(fields);
            return Ok(());
        }
        if self.script.add_event(line)?.is_none() {
            self.skipped(IssueCategory::Event, line);
        }
        Ok(())
    }

    /// Note a line that is neither data nor format
    fn skipped(&mut self, category: IssueCategory, line: &str) {
        log::debug!("line {}: not a data line, skipped", self.line_number);
        self.script.record_issue(ParseIssue::new(
            IssueSeverity::Info,
            category,
            format!("skipped line: {line}"),
            self.line_number,
        ));
    }

    fn attachment_line(&mut self, line: &str) -> Result<()> {
        if line.is_empty() {
            return self.finish_attachment();
        }

        let declaration = match self.section {
            SectionKind::Fonts => line.strip_prefix("fontname:"),
            _ => line.strip_prefix("filename:"),
        };

        if let Some(filename) = declaration {
            let result = self.finish_attachment();
            self.attachment = Some(PendingAttachment {
                filename: filename.trim().to_string(),
                attachment_type: if self.section == SectionKind::Fonts {
                    AttachmentType::Font
                } else {
                    AttachmentType::Graphic
                },
                lines: Vec::new(),
                line_number: self.line_number,
            });
            return result;
        }

        match self.attachment.as_mut() {
            Some(pending) => {
                pending.lines.push(line.to_string());
                Ok(())
            }
            None => Err(ParseError::UnexpectedLine {
                section: self.section.to_string(),
            }
            .into()),
        }
    }

    fn finish_attachment(&mut self) -> Result<()> {
        let Some(pending) = self.attachment.take() else {
            return Ok(());
        };

        let attachment = Attachment::from_encoded_lines(
            &pending.filename,
            pending.attachment_type,
            pending.lines.iter().map(String::as_str),
        )
        .map_err(|err| {
            log::debug!(
                "attachment declared on line {} rejected",
                pending.line_number
            );
            err
        })?;

        log::trace!(
            "attachment '{}' ({}) collected",
            attachment.filename(),
            attachment.attachment_type()
        );
        self.script.add_attachment(attachment);
        Ok(())
    }
}

/// Field names of a `Format:` line, `None` for any other line
fn format_fields(line: &str) -> Result<Option<FormatSpecifier>> {
    let Some((keyword, _)) = line.split_once(':') else {
        return Ok(None);
    };
    if !keyword.trim().eq_ignore_ascii_case("Format") {
        return Ok(None);
    }

    parse_format_line(line).map(Some).ok_or_else(|| {
        CoreError::from(ParseError::InvalidFormatLine {
            reason: "no field names".to_string(),
        })
    })
}
