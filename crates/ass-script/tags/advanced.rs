//! Border, shadow and blur: `\bord`, `\xbord`, `\ybord`, `\shad`, `\xshad`,
//! `\yshad`, `\be`, `\blur`

use super::grammar::{decimal, Matcher, ValueTag};
use super::{Part, TagHandler};

const DECIMAL: &[Matcher<f64>] = &[decimal];

/// Create the border, shadow and blur handlers
#[must_use]
pub fn create_advanced_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::optional("bord", DECIMAL, Part::Border)),
        Box::new(ValueTag::optional("xbord", DECIMAL, Part::BorderX)),
        Box::new(ValueTag::optional("ybord", DECIMAL, Part::BorderY)),
        Box::new(ValueTag::optional("shad", DECIMAL, Part::Shadow)),
        Box::new(ValueTag::optional("xshad", DECIMAL, Part::ShadowX)),
        Box::new(ValueTag::optional("yshad", DECIMAL, Part::ShadowY)),
        Box::new(ValueTag::optional("be", DECIMAL, Part::Blur)),
        Box::new(ValueTag::optional("blur", DECIMAL, Part::GaussianBlur)),
    ]
}
