//! Fades and animated transforms: `\fad`, `\fade`, `\t`
//!
//! Times are milliseconds in the script and seconds in the parts. `\fade`
//! with only two arguments is read as `\fad`. `\t`
//! takes up to three leading numbers (`accel`, `t1,t2` or `t1,t2,accel`)
//! followed by a run of override tags, which is parsed recursively.

use super::grammar::{number, number_list, parenthesized, Matcher, ValueTag};
use super::{alpha_from_number, parse_override_block, Part, TagHandler};

/// `\fad(in,out)`
fn simple_fade(input: &str) -> Option<(Part, usize)> {
    number_list::<2>(input).map(|([start, end], consumed)| {
        let part = Part::Fade {
            start: start / 1000.0,
            end: end / 1000.0,
        };
        (part, consumed)
    })
}

/// `\fade(a1,a2,a3,t1,t2,t3,t4)`
fn complex_fade(input: &str) -> Option<(Part, usize)> {
    number_list::<7>(input).map(|([a1, a2, a3, t1, t2, t3, t4], consumed)| {
        let part = Part::ComplexFade {
            start: alpha_from_number(a1),
            middle: alpha_from_number(a2),
            end: alpha_from_number(a3),
            time1: t1 / 1000.0,
            time2: t2 / 1000.0,
            time3: t3 / 1000.0,
            time4: t4 / 1000.0,
        };
        (part, consumed)
    })
}

const FADE: &[Matcher<Part>] = &[simple_fade];
const COMPLEX_FADE: &[Matcher<Part>] = &[complex_fade, simple_fade];
const TRANSFORM: &[Matcher<Part>] = &[transform];

/// Split off up to three leading `number,` arguments
fn leading_numbers(mut content: &str) -> (Vec<f64>, &str) {
    let mut numbers = Vec::with_capacity(3);
    while numbers.len() < 3 {
        let Some((candidate, rest)) = content.split_once(',') else {
            break;
        };
        let Some(value) = number(candidate) else {
            break;
        };
        numbers.push(value);
        content = rest;
    }
    (numbers, content)
}

/// `\t(...)`
fn transform(input: &str) -> Option<(Part, usize)> {
    let (content, consumed) = parenthesized(input)?;
    let (numbers, tags) = leading_numbers(content);

    let tags = tags.trim_start();
    if !tags.starts_with('\\') {
        return None;
    }

    let (start, end, accel) = match numbers.as_slice() {
        [] => (None, None, None),
        [accel] => (None, None, Some(*accel)),
        [start, end] => (Some(start / 1000.0), Some(end / 1000.0), None),
        [start, end, accel, ..] => (Some(start / 1000.0), Some(end / 1000.0), Some(*accel)),
    };

    let part = Part::Transform {
        start,
        end,
        accel,
        tags: parse_override_block(tags),
    };
    Some((part, consumed))
}

/// Create the fade and transform handlers
#[must_use]
pub fn create_animation_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::required("fad", FADE, |part| part)),
        Box::new(ValueTag::required("fade", COMPLEX_FADE, |part| part)),
        Box::new(ValueTag::required("t", TRANSFORM, |part| part)),
    ]
}
