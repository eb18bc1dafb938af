//! Color and alpha tags: `\c`, `\1c`-`\4c`, `\alpha`, `\1a`-`\4a`
//!
//! Color tags never carry alpha (`&HBBGGRR&`); transparency is set
//! separately through the alpha tags.

use super::grammar::{alpha, color, Matcher, ValueTag};
use super::{Part, TagHandler};
use crate::utils::Color;

const COLOR: &[Matcher<Color>] = &[color];
const ALPHA: &[Matcher<f64>] = &[alpha];

/// Create the color and alpha handlers
#[must_use]
pub fn create_color_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::optional("c", COLOR, Part::PrimaryColor)),
        Box::new(ValueTag::optional("1c", COLOR, Part::PrimaryColor)),
        Box::new(ValueTag::optional("2c", COLOR, Part::SecondaryColor)),
        Box::new(ValueTag::optional("3c", COLOR, Part::OutlineColor)),
        Box::new(ValueTag::optional("4c", COLOR, Part::ShadowColor)),
        Box::new(ValueTag::optional("alpha", ALPHA, Part::Alpha)),
        Box::new(ValueTag::optional("1a", ALPHA, Part::PrimaryAlpha)),
        Box::new(ValueTag::optional("2a", ALPHA, Part::SecondaryAlpha)),
        Box::new(ValueTag::optional("3a", ALPHA, Part::OutlineAlpha)),
        Box::new(ValueTag::optional("4a", ALPHA, Part::ShadowAlpha)),
    ]
}
