//! Style reset: `\r`, `\rStyleName`

use super::grammar::{name_argument, Matcher, ValueTag};
use super::{Part, TagHandler};

const STYLE_NAME: &[Matcher<String>] = &[name_argument];

/// Create the reset handler
#[must_use]
pub fn create_misc_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![Box::new(ValueTag::optional("r", STYLE_NAME, Part::Reset))]
}
