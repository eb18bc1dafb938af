//! Positioning: `\pos`, `\move`, `\org`
//!
//! `\move` times are written in milliseconds relative to the dialogue start
//! and stored in seconds. Without times the movement spans the whole
//! dialogue; the bounds are filled in once the dialogue's duration is known.

use super::grammar::{number_list, Matcher, ValueTag};
use super::{Part, TagHandler};

fn position(input: &str) -> Option<(Part, usize)> {
    number_list::<2>(input).map(|([x, y], consumed)| (Part::Position { x, y }, consumed))
}

fn origin(input: &str) -> Option<(Part, usize)> {
    number_list::<2>(input).map(|([x, y], consumed)| (Part::RotationOrigin { x, y }, consumed))
}

/// `\move(x1,y1,x2,y2,t1,t2)`
fn timed_move(input: &str) -> Option<(Part, usize)> {
    number_list::<6>(input).map(|([x1, y1, x2, y2, t1, t2], consumed)| {
        let part = Part::Move {
            x1,
            y1,
            x2,
            y2,
            t1: Some(t1 / 1000.0),
            t2: Some(t2 / 1000.0),
        };
        (part, consumed)
    })
}

/// `\move(x1,y1,x2,y2)`
fn untimed_move(input: &str) -> Option<(Part, usize)> {
    number_list::<4>(input).map(|([x1, y1, x2, y2], consumed)| {
        let part = Part::Move {
            x1,
            y1,
            x2,
            y2,
            t1: None,
            t2: None,
        };
        (part, consumed)
    })
}

const POSITION: &[Matcher<Part>] = &[position];
const ORIGIN: &[Matcher<Part>] = &[origin];
const MOVE: &[Matcher<Part>] = &[timed_move, untimed_move];

/// Create the positioning handlers
#[must_use]
pub fn create_position_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::required("pos", POSITION, |part| part)),
        Box::new(ValueTag::required("move", MOVE, |part| part)),
        Box::new(ValueTag::required("org", ORIGIN, |part| part)),
    ]
}
