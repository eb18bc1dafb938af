//! Clipping masks: `\clip`, `\iclip`
//!
//! Four numbers describe a rectangle. Anything else is a drawing path,
//! optionally preceded by a scale exponent. `\iclip` keeps what lies outside
//! the mask instead of inside.

use super::grammar::{number, number_list, parenthesized};
use super::{Part, TagHandler};
use crate::drawing::parse_drawing_instructions;

/// Clip tag parameterised by which side of the mask is kept
struct ClipTagHandler {
    /// `clip` or `iclip`
    name: &'static str,
    /// Keep the inside of the mask
    inside: bool,
}

impl ClipTagHandler {
    fn rectangle(&self, input: &str) -> Option<(Part, usize)> {
        number_list::<4>(input).map(|([x1, y1, x2, y2], consumed)| {
            let part = Part::RectangularClip {
                x1,
                y1,
                x2,
                y2,
                inside: self.inside,
            };
            (part, consumed)
        })
    }

    fn vector(&self, input: &str) -> Option<(Part, usize)> {
        let (content, consumed) = parenthesized(input)?;

        let (scale, path) = match content.split_once(',') {
            Some((scale, path)) => match number(scale) {
                Some(scale) => (scale, path),
                None => (1.0, content),
            },
            None => (1.0, content),
        };

        let instructions = parse_drawing_instructions(path);
        if instructions.is_empty() {
            return None;
        }

        let part = Part::VectorClip {
            scale,
            instructions,
            inside: self.inside,
        };
        Some((part, consumed))
    }
}

impl TagHandler for ClipTagHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn parse(&self, args: &str) -> Option<(Part, usize)> {
        self.rectangle(args).or_else(|| self.vector(args))
    }
}

/// Create the clip handlers
#[must_use]
pub fn create_clipping_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ClipTagHandler {
            name: "clip",
            inside: true,
        }),
        Box::new(ClipTagHandler {
            name: "iclip",
            inside: false,
        }),
    ]
}
