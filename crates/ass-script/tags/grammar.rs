//! Ordered-choice value grammar shared by the override tags
//!
//! Most tags have the same shape: a name followed by one value taken from an
//! ordered list of alternatives. [`ValueTag`] captures that shape as data.
//! The first alternative that matches a prefix of the remaining input wins.
//! When none does, an optional tag still matches with zero width and an
//! unspecified value, while a required tag fails and its text falls through
//! to a comment.
//!
//! # Example
//!
//! ```rust
//! use ass_script::tags::grammar::{decimal, Matcher, ValueTag};
//! use ass_script::tags::{Part, TagHandler};
//!
//! const DECIMAL: &[Matcher<f64>] = &[decimal];
//! let blur = ValueTag::optional("blur", DECIMAL, Part::GaussianBlur);
//!
//! assert_eq!(blur.parse("2.5"), Some((Part::GaussianBlur(Some(2.5)), 3)));
//! assert_eq!(blur.parse("x"), Some((Part::GaussianBlur(None), 0)));
//! ```

use super::{Part, TagHandler};
use crate::utils::color::{alpha_from_byte, color_from_packed, scan_hex_value};
use crate::utils::Color;

/// One value alternative: returns the value and the bytes it consumed
pub type Matcher<T> = fn(&str) -> Option<(T, usize)>;

/// Turns a matched value into a [`Part`]
pub enum Build<T: 'static> {
    /// Tag matches even without a value
    Optional(fn(Option<T>) -> Part),
    /// Tag fails without a value
    Required(fn(T) -> Part),
}

/// Tag described by its name and ordered value alternatives
pub struct ValueTag<T: 'static> {
    /// Tag name without the backslash
    name: &'static str,
    /// Alternatives, tried in order
    matchers: &'static [Matcher<T>],
    /// Part constructor
    build: Build<T>,
}

impl<T: 'static> ValueTag<T> {
    /// Tag whose value may be absent
    #[must_use]
    pub const fn optional(
        name: &'static str,
        matchers: &'static [Matcher<T>],
        build: fn(Option<T>) -> Part,
    ) -> Self {
        Self {
            name,
            matchers,
            build: Build::Optional(build),
        }
    }

    /// Tag that needs a value
    #[must_use]
    pub const fn required(
        name: &'static str,
        matchers: &'static [Matcher<T>],
        build: fn(T) -> Part,
    ) -> Self {
        Self {
            name,
            matchers,
            build: Build::Required(build),
        }
    }
}

impl<T: 'static> TagHandler for ValueTag<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, args: &str) -> Option<(Part, usize)> {
        let matched = self.matchers.iter().find_map(|matcher| matcher(args));

        match (matched, &self.build) {
            (Some((value, consumed)), Build::Optional(build)) => Some((build(Some(value)), consumed)),
            (Some((value, consumed)), Build::Required(build)) => Some((build(value), consumed)),
            (None, Build::Optional(build)) => Some((build(None), 0)),
            (None, Build::Required(_)) => None,
        }
    }
}

/// Length of the leading run of ASCII digits
fn digits(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// Signed decimal number: `-?\d*(\.\d+)?` with at least one digit
#[must_use]
pub fn decimal(input: &str) -> Option<(f64, usize)> {
    let bytes = input.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let integer = digits(&input[pos..]);
    pos += integer;

    let mut fraction = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction = digits(&input[pos + 1..]);
        if fraction > 0 {
            pos += 1 + fraction;
        }
    }

    if integer == 0 && fraction == 0 {
        return None;
    }

    input[..pos].parse().ok().map(|value| (value, pos))
}

/// Unsigned integer
#[must_use]
pub fn integer(input: &str) -> Option<(i64, usize)> {
    let len = digits(input);
    if len == 0 {
        return None;
    }
    input[..len].parse().ok().map(|value| (value, len))
}

/// Single `0` or `1`
#[must_use]
pub fn toggle(input: &str) -> Option<(bool, usize)> {
    match input.as_bytes().first() {
        Some(b'0') => Some((false, 1)),
        Some(b'1') => Some((true, 1)),
        _ => None,
    }
}

/// `&HBBGGRR&` color, alpha forced to 1
#[must_use]
pub fn color(input: &str) -> Option<(Color, usize)> {
    if !input.starts_with(['&', 'H', 'h']) {
        return None;
    }
    scan_hex_value(input).map(|(value, consumed)| (color_from_packed(value, false), consumed))
}

/// `&HAA&` alpha byte, as opacity
///
/// Wider values keep only their low byte, so `&H1FF&` is `&HFF&`.
#[must_use]
pub fn alpha(input: &str) -> Option<(f64, usize)> {
    if !input.starts_with(['&', 'H', 'h']) {
        return None;
    }
    scan_hex_value(input).map(|(value, consumed)| {
        let [byte, ..] = value.to_le_bytes();
        (alpha_from_byte(byte), consumed)
    })
}

/// Free text up to the next tag, trimmed; empty text does not match
#[must_use]
pub fn name_argument(input: &str) -> Option<(String, usize)> {
    let end = input.find('\\').unwrap_or(input.len());
    let name = input[..end].trim();
    if name.is_empty() {
        None
    } else {
        Some((name.to_string(), end))
    }
}

/// Contents of a balanced `( ... )` group and the bytes consumed
#[must_use]
pub fn parenthesized(input: &str) -> Option<(&str, usize)> {
    if !input.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (index, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[1..index], index + 1));
                }
            }
            _ => {}
        }
    }

    None
}

/// Whole-string decimal, surrounding whitespace ignored
#[must_use]
pub fn number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    match decimal(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => Some(value),
        _ => None,
    }
}

/// Parenthesized, comma-separated list of exactly `N` numbers
#[must_use]
pub fn number_list<const N: usize>(input: &str) -> Option<([f64; N], usize)> {
    let (inner, consumed) = parenthesized(input)?;
    let mut values = [0.0; N];
    let mut count = 0;

    for piece in inner.split(',') {
        if count == N {
            return None;
        }
        values[count] = number(piece)?;
        count += 1;
    }

    (count == N).then_some((values, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_shapes() {
        assert_eq!(decimal("12"), Some((12.0, 2)));
        assert_eq!(decimal("-1.5x"), Some((-1.5, 4)));
        assert_eq!(decimal(".5"), Some((0.5, 2)));
        assert_eq!(decimal("3."), Some((3.0, 1)));
        assert_eq!(decimal("-"), None);
        assert_eq!(decimal("abc"), None);
        assert_eq!(decimal(""), None);
    }

    #[test]
    fn color_and_alpha_values() {
        assert_eq!(
            color("&H0000FF&\\b1"),
            Some((Color::new(255, 0, 0, 1.0), 9))
        );
        assert_eq!(color("12"), None);
        assert_eq!(alpha("&HFF&"), Some((0.0, 5)));
        assert_eq!(alpha("&H00&"), Some((1.0, 5)));
    }

    #[test]
    fn wide_alpha_keeps_low_byte() {
        assert_eq!(alpha("&H1FF&"), Some((0.0, 6)));
        assert_eq!(alpha("&H100&"), Some((1.0, 6)));
    }

    #[test]
    fn parenthesized_groups_nest() {
        assert_eq!(parenthesized("(a(b)c)d"), Some(("a(b)c", 7)));
        assert_eq!(parenthesized("(open"), None);
        assert_eq!(parenthesized("x()"), None);
    }

    #[test]
    fn number_lists_need_exact_count() {
        assert_eq!(number_list::<2>("(1, 2.5)"), Some(([1.0, 2.5], 8)));
        assert_eq!(number_list::<2>("(1,2,3)"), None);
        assert_eq!(number_list::<2>("(1)"), None);
        assert_eq!(number_list::<2>("(1,x)"), None);
    }

    #[test]
    fn name_argument_stops_at_next_tag() {
        assert_eq!(
            name_argument(" Comic Sans \\b1"),
            Some(("Comic Sans".to_string(), 12))
        );
        assert_eq!(name_argument("\\b1"), None);
    }
}
