//! Rotation and shearing: `\frx`, `\fry`, `\frz`, `\fr`, `\fax`, `\fay`

use super::grammar::{decimal, Matcher, ValueTag};
use super::{Part, TagHandler};

const DECIMAL: &[Matcher<f64>] = &[decimal];

/// Create the rotation and skew handlers
///
/// `\fr` is shorthand for `\frz`.
#[must_use]
pub fn create_rotation_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::optional("frx", DECIMAL, Part::RotateX)),
        Box::new(ValueTag::optional("fry", DECIMAL, Part::RotateY)),
        Box::new(ValueTag::optional("frz", DECIMAL, Part::RotateZ)),
        Box::new(ValueTag::optional("fr", DECIMAL, Part::RotateZ)),
        Box::new(ValueTag::optional("fax", DECIMAL, Part::SkewX)),
        Box::new(ValueTag::optional("fay", DECIMAL, Part::SkewY)),
    ]
}
