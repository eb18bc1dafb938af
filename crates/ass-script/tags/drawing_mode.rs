//! Drawing mode: `\p`, `\pbo`
//!
//! A nonzero `\p` scale turns the following text runs into drawing
//! instructions until `\p0`.

use super::grammar::{decimal, Matcher, ValueTag};
use super::{Part, TagHandler};

const DECIMAL: &[Matcher<f64>] = &[decimal];

/// Create the drawing mode handlers
#[must_use]
pub fn create_drawing_mode_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::required("p", DECIMAL, Part::DrawingMode)),
        Box::new(ValueTag::required("pbo", DECIMAL, Part::DrawingBaselineOffset)),
    ]
}
