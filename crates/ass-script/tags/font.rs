//! Font selection and metrics: `\fn`, `\fs`, `\fs+`, `\fs-`, `\fscx`, `\fscy`, `\fsp`

use super::grammar::{decimal, name_argument, Matcher, ValueTag};
use super::{Part, TagHandler};

const DECIMAL: &[Matcher<f64>] = &[decimal];
const FONT_NAME: &[Matcher<String>] = &[name_argument];

/// Scale percentage as a fraction
fn scale(input: &str) -> Option<(f64, usize)> {
    decimal(input).map(|(percent, consumed)| (percent / 100.0, consumed))
}

const SCALE: &[Matcher<f64>] = &[scale];

/// Create the font handlers
#[must_use]
pub fn create_font_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::optional("fn", FONT_NAME, Part::FontName)),
        Box::new(ValueTag::optional("fs", DECIMAL, Part::FontSize)),
        Box::new(ValueTag::required("fs+", DECIMAL, Part::FontSizePlus)),
        Box::new(ValueTag::required("fs-", DECIMAL, Part::FontSizeMinus)),
        Box::new(ValueTag::optional("fscx", SCALE, Part::FontScaleX)),
        Box::new(ValueTag::optional("fscy", SCALE, Part::FontScaleY)),
        Box::new(ValueTag::optional("fsp", DECIMAL, Part::LetterSpacing)),
    ]
}
