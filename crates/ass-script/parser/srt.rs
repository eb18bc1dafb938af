//! SubRip (`.srt`) ingestion
//!
//! Blocks are separated by blank lines and laid out as
//!
//! ```text
//! 1
//! 00:00:10,500 --> 00:00:13,000 X1:0 X2:0 Y1:0 Y2:0
//! first line of text
//! second line
//! ```
//!
//! The index is discarded, positioning after the end time is ignored, and
//! the text keeps its line breaks. Text markup is a small HTML-like subset
//! converted to the same [`Part`]s that ASS override tags produce.
//!
//! # Example
//!
//! ```rust
//! use ass_script::parser::{srt::parse_srt, ParserConfig};
//! use ass_script::tags::Part;
//!
//! let script = parse_srt("1\n00:00:10,500 --> 00:00:13,000\nElephant's Dream", ParserConfig::default())?;
//! let dialogue = &script.dialogues()[0];
//!
//! assert_eq!(dialogue.start(), 10.5);
//! assert_eq!(dialogue.end(), 13.0);
//! assert_eq!(dialogue.parts(), [Part::Text("Elephant's Dream".to_string())]);
//! # Ok::<(), ass_script::CoreError>(())
//! ```

use super::config::ParserConfig;
use super::errors::{IssueCategory, ParseError, ParseIssue};
use super::Script;
use crate::tags::{BoldWeight, Part};
use crate::utils::{parse_srt_time, Color, CoreError, Result};

/// Separator between start and end time
const TIMING_ARROW: &str = "-->";

/// Whether `text` looks like SubRip rather than ASS
///
/// True when the first non-blank line is a block index and the line after
/// it carries a `-->` timing.
#[must_use]
pub fn looks_like_srt(text: &str) -> bool {
    let mut lines = text
        .trim_start_matches('\u{feff}')
        .lines()
        .skip_while(|line| line.trim().is_empty());

    let is_index = lines
        .next()
        .map(str::trim)
        .is_some_and(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()));

    is_index && lines.next().is_some_and(|line| line.contains(TIMING_ARROW))
}

/// One blank-line separated group of lines
struct Block<'a> {
    /// 1-based block number
    number: usize,
    /// 1-based line number of the first line
    first_line: usize,
    /// Non-blank lines
    lines: Vec<&'a str>,
}

/// Parse a whole SRT file into a script
///
/// Every dialogue uses the `Default` style. Blocks without a timing line or
/// with undecodable times are recorded as issues and skipped unless
/// `config.strict` is set.
///
/// # Errors
///
/// In strict mode, returns [`ParseError::MissingSrtTiming`] or
/// [`CoreError::InvalidTime`] for the first broken block.
pub fn parse_srt(text: &str, config: ParserConfig) -> Result<Script> {
    let mut script = Script::with_config(config);

    for block in split_blocks(text.trim_start_matches('\u{feff}')) {
        match add_block(&mut script, &block) {
            Ok(()) => {}
            Err(err) if !config.strict && err.is_recoverable() => {
                log::debug!("srt block {} skipped ({err})", block.number);
                script.record_issue(ParseIssue::error(
                    IssueCategory::Event,
                    err.to_string(),
                    block.first_line,
                ));
            }
            Err(err) => return Err(err),
        }
    }

    log::debug!(
        "parsed srt: {} dialogues, {} issues",
        script.dialogues().len(),
        script.issues().len()
    );
    Ok(script)
}

fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            blocks.extend(current.take());
            continue;
        }
        current
            .get_or_insert_with(|| Block {
                number: blocks.len() + 1,
                first_line: index + 1,
                lines: Vec::new(),
            })
            .lines
            .push(line);
    }

    blocks.extend(current);
    blocks
}

fn add_block(script: &mut Script, block: &Block<'_>) -> Result<()> {
    let timing = block
        .lines
        .iter()
        .take(2)
        .position(|line| line.contains(TIMING_ARROW))
        .ok_or(ParseError::MissingSrtTiming {
            index: block.number,
        })?;

    let (start, end) = parse_timing(block.lines[timing])?;
    let text = block.lines[timing + 1..].join("\n");
    script.add_srt_dialogue(start, end, &text)?;
    Ok(())
}

/// Decode `start --> end [positioning]`
fn parse_timing(line: &str) -> Result<(f64, f64)> {
    let (start, rest) = line
        .split_once(TIMING_ARROW)
        .ok_or_else(|| CoreError::InvalidTime(line.to_string()))?;
    let end = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| CoreError::InvalidTime(line.to_string()))?;

    Ok((parse_srt_time(start.trim())?, parse_srt_time(end)?))
}

/// Convert SRT text markup into parts
///
/// Line breaks become [`Part::NewLine`]. `<b>`, `<i>`, `<u>` and `<s>` with
/// their closing tags toggle the matching style. A `<font color="...">`
/// emits a [`Part::PrimaryColor`] and its `</font>` emits
/// `PrimaryColor(None)`; colored fonts still open at the end of the text are
/// closed the same way. Any other markup is kept as text.
#[must_use]
pub fn parse_srt_text(text: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut buffer = String::new();
    let mut fonts: Vec<bool> = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '\n' => {
                flush_text(&mut parts, &mut buffer);
                parts.push(Part::NewLine);
                rest = &rest[1..];
                continue;
            }
            '\r' => {
                rest = &rest[1..];
                continue;
            }
            '<' => {
                if let Some(close) = rest.find('>') {
                    let markup = rest[1..close].trim().to_ascii_lowercase();
                    if let Some(part) = markup_part(&markup, &mut fonts) {
                        flush_text(&mut parts, &mut buffer);
                        parts.extend(part);
                        rest = &rest[close + 1..];
                        continue;
                    }
                }
            }
            _ => {}
        }

        buffer.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush_text(&mut parts, &mut buffer);
    parts.extend(
        fonts
            .into_iter()
            .filter(|&colored| colored)
            .map(|_| Part::PrimaryColor(None)),
    );
    parts
}

fn flush_text(parts: &mut Vec<Part>, buffer: &mut String) {
    if buffer.is_empty() {
        return;
    }
    let text = core::mem::take(buffer);
    match parts.last_mut() {
        Some(Part::Text(previous)) => previous.push_str(&text),
        _ => parts.push(Part::Text(text)),
    }
}

/// Part for recognised markup
///
/// `None` means the markup is not recognised and stays literal. `Some(None)`
/// means it is consumed without emitting anything.
fn markup_part(markup: &str, fonts: &mut Vec<bool>) -> Option<Option<Part>> {
    let part = match markup {
        "b" => Part::Bold(Some(BoldWeight::Toggle(true))),
        "/b" => Part::Bold(Some(BoldWeight::Toggle(false))),
        "i" => Part::Italic(Some(true)),
        "/i" => Part::Italic(Some(false)),
        "u" => Part::Underline(Some(true)),
        "/u" => Part::Underline(Some(false)),
        "s" => Part::StrikeThrough(Some(true)),
        "/s" => Part::StrikeThrough(Some(false)),
        "/font" => {
            return Some(fonts.pop().unwrap_or(false).then_some(Part::PrimaryColor(None)));
        }
        _ => {
            let attributes = markup.strip_prefix("font")?;
            if !attributes.is_empty() && !attributes.starts_with(char::is_whitespace) {
                return None;
            }
            let color = attribute(attributes, "color").and_then(parse_html_color);
            fonts.push(color.is_some());
            return Some(color.map(|color| Part::PrimaryColor(Some(color))));
        }
    };
    Some(Some(part))
}

/// Value of `name=value` or `name="value"` in an attribute list
///
/// `name` only matches a whole attribute name, so `color` never matches
/// inside `bgcolor`.
fn attribute<'a>(attributes: &'a str, name: &str) -> Option<&'a str> {
    let mut offset = 0;
    while let Some(found) = attributes[offset..].find(name) {
        let start = offset + found;
        offset = start + name.len();

        let at_boundary = start == 0 || attributes[..start].ends_with(char::is_whitespace);
        let Some(value) = attributes[offset..].trim_start().strip_prefix('=') else {
            continue;
        };
        if !at_boundary {
            continue;
        }

        let value = value.trim_start();
        return Some(match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let value = &value[1..];
                value.find(quote).map_or(value, |end| &value[..end])
            }
            _ => value.split_whitespace().next().unwrap_or(""),
        });
    }
    None
}

/// Decode `#RRGGBB`, `RRGGBB` or a basic HTML color name
fn parse_html_color(value: &str) -> Option<Color> {
    let value = value.trim();
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        let packed = u32::from_str_radix(hex, 16).ok()?;
        let [_, red, green, blue] = packed.to_be_bytes();
        return Some(Color::new(red, green, blue, 1.0));
    }

    let (red, green, blue) = match value {
        "white" => (255, 255, 255),
        "black" => (0, 0, 0),
        "red" => (255, 0, 0),
        "lime" => (0, 255, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "purple" => (128, 0, 128),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(Color::new(red, green, blue, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> Part {
        Part::Text(value.to_string())
    }

    fn red() -> Part {
        Part::PrimaryColor(Some(Color::new(255, 0, 0, 1.0)))
    }

    #[test]
    fn single_block() {
        let script = parse_srt(
            "1\n00:00:10,500 --> 00:00:13,000\nElephant's Dream",
            ParserConfig::default(),
        )
        .unwrap();

        assert_eq!(script.dialogues().len(), 1);
        let dialogue = &script.dialogues()[0];
        assert_eq!(dialogue.start(), 10.5);
        assert_eq!(dialogue.end(), 13.0);
        assert_eq!(dialogue.parts(), [text("Elephant's Dream")]);
        assert_eq!(dialogue.style().name(), "Default");
    }

    #[test]
    fn blocks_with_crlf_bom_and_positioning() {
        let input = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,000 X1:10 X2:20\r\nOne\r\nTwo\r\n\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,500\r\nThree\r\n";
        let script = parse_srt(input, ParserConfig::default()).unwrap();

        let dialogues = script.dialogues();
        assert_eq!(dialogues.len(), 2);
        assert_eq!(dialogues[0].parts(), [text("One"), Part::NewLine, text("Two")]);
        assert_eq!(dialogues[1].start(), 3.0);
        assert_eq!(dialogues[1].end(), 4.5);
        assert_eq!(dialogues[1].id(), 2);
    }

    #[test]
    fn broken_blocks_become_issues() {
        let input = "1\nno timing here\n\n2\n00:00:01,000 --> 00:00:02,000\nok\n";
        let script = parse_srt(input, ParserConfig::default()).unwrap();
        assert_eq!(script.dialogues().len(), 1);
        assert_eq!(script.issues().len(), 1);
        assert_eq!(script.issues()[0].line, 1);

        assert_eq!(
            parse_srt(input, ParserConfig::default().with_strict(true)).unwrap_err(),
            CoreError::Parse(ParseError::MissingSrtTiming { index: 1 })
        );
    }

    #[test]
    fn font_color_scopes() {
        assert_eq!(
            parse_srt_text(r##"a <font color="#FF0000">b</font> c"##),
            vec![text("a "), red(), text("b"), Part::PrimaryColor(None), text(" c")]
        );
    }

    #[test]
    fn font_color_ignores_similar_attribute_names() {
        assert_eq!(
            parse_srt_text(r##"<font bgcolor="#ff0000" color="#0000ff">x</font>"##),
            vec![
                Part::PrimaryColor(Some(Color::new(0, 0, 255, 1.0))),
                text("x"),
                Part::PrimaryColor(None),
            ]
        );
        assert_eq!(
            parse_srt_text(r##"<font bgcolor="#ff0000">x</font>"##),
            vec![text("x")]
        );
        assert_eq!(attribute(r#" color = "red""#, "color"), Some("red"));
    }

    #[test]
    fn unterminated_font_is_closed() {
        assert_eq!(
            parse_srt_text("<font color=red>alert"),
            vec![red(), text("alert"), Part::PrimaryColor(None)]
        );
    }

    #[test]
    fn uncolored_font_closes_silently() {
        assert_eq!(
            parse_srt_text(r#"<font face="Arial">x</font>"#),
            vec![text("x")]
        );
    }

    #[test]
    fn style_toggles() {
        assert_eq!(
            parse_srt_text("<b>bold</b> <I>it</I>"),
            vec![
                Part::Bold(Some(BoldWeight::Toggle(true))),
                text("bold"),
                Part::Bold(Some(BoldWeight::Toggle(false))),
                text(" "),
                Part::Italic(Some(true)),
                text("it"),
                Part::Italic(Some(false)),
            ]
        );
    }

    #[test]
    fn unknown_markup_is_literal() {
        assert_eq!(parse_srt_text("1 < 2 <x> ok"), vec![text("1 < 2 <x> ok")]);
    }

    #[test]
    fn html_colors() {
        assert_eq!(parse_html_color("00ff80"), Some(Color::new(0, 255, 128, 1.0)));
        assert_eq!(parse_html_color("navy"), Some(Color::new(0, 0, 128, 1.0)));
        assert_eq!(parse_html_color("#12345"), None);
    }

    #[test]
    fn detection() {
        assert!(looks_like_srt("\n\n12\n00:00:01,000 --> 00:00:02,000\n"));
        assert!(!looks_like_srt("[Script Info]\n"));
        assert!(!looks_like_srt("12\nno arrow\n"));
    }
}
