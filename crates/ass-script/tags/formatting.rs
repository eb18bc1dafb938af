//! Font style toggles: `\b`, `\i`, `\u`, `\s`
//!
//! `\b` additionally accepts a numeric weight in hundreds. A value that fits
//! no alternative leaves the toggle unspecified; the leftover digits become a
//! comment (`{\b2}` is `Bold(None)` followed by `Comment("2")`).

use super::grammar::{toggle, Matcher, ValueTag};
use super::{BoldWeight, Part, TagHandler};

/// `\b100` through `\b900`, multiples of 100 only
fn bold_weight(input: &str) -> Option<(BoldWeight, usize)> {
    let digits = input.get(..3)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let weight: u16 = digits.parse().ok()?;
    ((100..=900).contains(&weight) && weight % 100 == 0).then_some((BoldWeight::Numeric(weight), 3))
}

/// `\b0` or `\b1`
fn bold_toggle(input: &str) -> Option<(BoldWeight, usize)> {
    toggle(input).map(|(on, consumed)| (BoldWeight::Toggle(on), consumed))
}

const BOLD: &[Matcher<BoldWeight>] = &[bold_weight, bold_toggle];
const TOGGLE: &[Matcher<bool>] = &[toggle];

/// Create the font style toggle handlers
#[must_use]
pub fn create_formatting_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::optional("b", BOLD, Part::Bold)),
        Box::new(ValueTag::optional("i", TOGGLE, Part::Italic)),
        Box::new(ValueTag::optional("u", TOGGLE, Part::Underline)),
        Box::new(ValueTag::optional("s", TOGGLE, Part::StrikeThrough)),
    ]
}
