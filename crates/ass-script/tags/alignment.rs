//! Alignment and wrapping: `\an`, `\a`, `\q`
//!
//! `\a` uses the legacy SubStation layout: 1-3 bottom, 5-7 top and 9-11
//! middle row. It is mapped onto numpad positions so consumers only ever see
//! one convention.

use super::grammar::{integer, Matcher, ValueTag};
use super::{Part, TagHandler};
use crate::parser::ast::WrappingStyle;

/// `\an1` through `\an9`
fn numpad(input: &str) -> Option<(u8, usize)> {
    match input.as_bytes().first() {
        Some(digit @ b'1'..=b'9') => Some((digit - b'0', 1)),
        _ => None,
    }
}

/// Convert a legacy `\a` value into a numpad position
#[must_use]
pub const fn legacy_to_numpad(value: i64) -> Option<u8> {
    match value {
        1 => Some(1),
        2 => Some(2),
        3 => Some(3),
        5 => Some(7),
        6 => Some(8),
        7 => Some(9),
        9 => Some(4),
        10 => Some(5),
        11 => Some(6),
        _ => None,
    }
}

/// `\a` value, two digits tried before one
fn legacy(input: &str) -> Option<(u8, usize)> {
    let (value, consumed) = integer(input)?;
    if let Some(numpad) = legacy_to_numpad(value) {
        return Some((numpad, consumed));
    }
    let (first, _) = integer(input.get(..1)?)?;
    legacy_to_numpad(first).map(|numpad| (numpad, 1))
}

/// `\q0` through `\q3`
fn wrapping_style(input: &str) -> Option<(WrappingStyle, usize)> {
    let first = input.get(..1)?;
    let (value, consumed) = integer(first)?;
    WrappingStyle::from_value(value).map(|style| (style, consumed))
}

const NUMPAD: &[Matcher<u8>] = &[numpad];
const LEGACY: &[Matcher<u8>] = &[legacy];
const WRAPPING: &[Matcher<WrappingStyle>] = &[wrapping_style];

/// Create the alignment and wrapping handlers
#[must_use]
pub fn create_alignment_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::required("an", NUMPAD, Part::Alignment)),
        Box::new(ValueTag::required("a", LEGACY, Part::Alignment)),
        Box::new(ValueTag::required("q", WRAPPING, Part::WrappingStyle)),
    ]
}
