//! Vector drawing instructions
//!
//! Drawing-mode text (`{\p1}m 0 0 l 10 0 10 10`) and vector clips share a
//! small path language: a letter selects the instruction and the following
//! numbers are consumed in groups of its arity. A group without a new letter
//! repeats the previous instruction.
//!
//! # Example
//!
//! ```rust
//! use ass_script::drawing::{parse_drawing_instructions, Instruction};
//!
//! let path = parse_drawing_instructions("m 984 425 l 985 445 985 542");
//! assert_eq!(path, vec![
//!     Instruction::Move { x: 984.0, y: 425.0 },
//!     Instruction::Line { x: 985.0, y: 445.0 },
//!     Instruction::Line { x: 985.0, y: 542.0 },
//! ]);
//! ```

use crate::tags::grammar::decimal;

/// One drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// `m`: close the current shape and move the pen
    Move {
        /// Target x
        x: f64,
        /// Target y
        y: f64,
    },
    /// `l`: straight line to a point
    Line {
        /// Target x
        x: f64,
        /// Target y
        y: f64,
    },
    /// `b`: cubic bezier curve through two control points
    CubicBezierCurve {
        /// First control point x
        x1: f64,
        /// First control point y
        y1: f64,
        /// Second control point x
        x2: f64,
        /// Second control point y
        y2: f64,
        /// End point x
        x3: f64,
        /// End point y
        y3: f64,
    },
}

/// Instruction selected by a letter token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// `m`
    Move,
    /// `l`
    Line,
    /// `b`
    Bezier,
}

impl Command {
    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'm' => Some(Self::Move),
            'l' => Some(Self::Line),
            'b' => Some(Self::Bezier),
            _ => None,
        }
    }

    const fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line => 2,
            Self::Bezier => 6,
        }
    }

    fn build(self, coordinates: &[f64]) -> Option<Instruction> {
        match (self, coordinates) {
            (Self::Move, &[x, y]) => Some(Instruction::Move { x, y }),
            (Self::Line, &[x, y]) => Some(Instruction::Line { x, y }),
            (Self::Bezier, &[x1, y1, x2, y2, x3, y3]) => Some(Instruction::CubicBezierCurve {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            }),
            _ => None,
        }
    }
}

/// Parse a drawing path into instructions
///
/// Unknown letters switch the parser off until the next known letter, so
/// their numbers are dropped along with them. A trailing group shorter than
/// the instruction's arity is dropped. Input without any complete
/// instruction gives an empty list.
#[must_use]
pub fn parse_drawing_instructions(input: &str) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut command: Option<Command> = None;
    let mut coordinates: Vec<f64> = Vec::with_capacity(6);
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch.is_ascii_alphabetic() {
            command = Command::from_letter(ch);
            coordinates.clear();
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if let Some((value, consumed)) = decimal(rest) {
            if let Some(active) = command {
                coordinates.push(value);
                if coordinates.len() == active.arity() {
                    instructions.extend(active.build(&coordinates));
                    coordinates.clear();
                }
            }
            rest = &rest[consumed..];
            continue;
        }

        rest = &rest[ch.len_utf8()..];
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_gives_no_instructions() {
        assert!(parse_drawing_instructions("").is_empty());
        assert!(parse_drawing_instructions("   \t ").is_empty());
    }

    #[test]
    fn bezier_groups_of_six() {
        let path = parse_drawing_instructions("m 0 0 b 1 2 3 4 5 6 7 8 9 10 11 12");
        assert_eq!(
            path,
            vec![
                Instruction::Move { x: 0.0, y: 0.0 },
                Instruction::CubicBezierCurve {
                    x1: 1.0,
                    y1: 2.0,
                    x2: 3.0,
                    y2: 4.0,
                    x3: 5.0,
                    y3: 6.0
                },
                Instruction::CubicBezierCurve {
                    x1: 7.0,
                    y1: 8.0,
                    x2: 9.0,
                    y2: 10.0,
                    x3: 11.0,
                    y3: 12.0
                },
            ]
        );
    }

    #[test]
    fn short_groups_and_unknown_letters_are_dropped() {
        let path = parse_drawing_instructions("m 1 2 l 3 q 7 7 l 4 5 6");
        assert_eq!(
            path,
            vec![
                Instruction::Move { x: 1.0, y: 2.0 },
                Instruction::Line { x: 4.0, y: 5.0 },
            ]
        );
    }

    #[test]
    fn numbers_before_any_letter_are_ignored() {
        let path = parse_drawing_instructions("5 5 m -1.5 2.25");
        assert_eq!(path, vec![Instruction::Move { x: -1.5, y: 2.25 }]);
    }

    #[test]
    fn compact_tokens_without_spaces() {
        let path = parse_drawing_instructions("m0 0l10 0");
        assert_eq!(
            path,
            vec![
                Instruction::Move { x: 0.0, y: 0.0 },
                Instruction::Line { x: 10.0, y: 0.0 },
            ]
        );
    }
}
