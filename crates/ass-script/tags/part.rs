//! Typed pieces of a dialogue's text
//!
//! Every variant's optional payload uses `None` for "unspecified, inherit
//! from the style". Times are in seconds, alphas are opacities in `[0, 1]`
//! and scale factors are fractions (`\fscx150` is `1.5`).

use crate::drawing::Instruction;
use crate::parser::ast::WrappingStyle;
use crate::utils::Color;

/// Font weight set by `\b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoldWeight {
    /// `\b0` or `\b1`
    Toggle(bool),
    /// `\b100` through `\b900`
    Numeric(u16),
}

/// One element of a parsed dialogue
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Part {
    /// Text inside an override block that is not a recognised tag
    Comment(String),
    /// Plain text
    Text(String),
    /// `\N` or `\n`
    NewLine,

    /// `\i`
    Italic(Option<bool>),
    /// `\b`
    Bold(Option<BoldWeight>),
    /// `\u`
    Underline(Option<bool>),
    /// `\s`
    StrikeThrough(Option<bool>),
    /// `\bord`
    Border(Option<f64>),
    /// `\xbord`
    BorderX(Option<f64>),
    /// `\ybord`
    BorderY(Option<f64>),
    /// `\shad`
    Shadow(Option<f64>),
    /// `\xshad`
    ShadowX(Option<f64>),
    /// `\yshad`
    ShadowY(Option<f64>),
    /// `\be`
    Blur(Option<f64>),
    /// `\blur`
    GaussianBlur(Option<f64>),
    /// `\fn`
    FontName(Option<String>),
    /// `\fs`
    FontSize(Option<f64>),
    /// `\fs+`
    FontSizePlus(f64),
    /// `\fs-`
    FontSizeMinus(f64),
    /// `\fscx`
    FontScaleX(Option<f64>),
    /// `\fscy`
    FontScaleY(Option<f64>),
    /// `\fsp`
    LetterSpacing(Option<f64>),
    /// `\frx`
    RotateX(Option<f64>),
    /// `\fry`
    RotateY(Option<f64>),
    /// `\frz` or `\fr`
    RotateZ(Option<f64>),
    /// `\fax`
    SkewX(Option<f64>),
    /// `\fay`
    SkewY(Option<f64>),

    /// `\c` or `\1c`
    PrimaryColor(Option<Color>),
    /// `\2c`
    SecondaryColor(Option<Color>),
    /// `\3c`
    OutlineColor(Option<Color>),
    /// `\4c`
    ShadowColor(Option<Color>),
    /// `\alpha`
    Alpha(Option<f64>),
    /// `\1a`
    PrimaryAlpha(Option<f64>),
    /// `\2a`
    SecondaryAlpha(Option<f64>),
    /// `\3a`
    OutlineAlpha(Option<f64>),
    /// `\4a`
    ShadowAlpha(Option<f64>),

    /// `\an`, or `\a` mapped onto numpad positions
    Alignment(u8),
    /// `\r`, optionally naming a style
    Reset(Option<String>),
    /// `\pos(x,y)`
    Position {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },
    /// `\move(x1,y1,x2,y2[,t1,t2])`
    Move {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
        /// Movement start, seconds from the dialogue start
        t1: Option<f64>,
        /// Movement end, seconds from the dialogue start
        t2: Option<f64>,
    },
    /// `\org(x,y)`
    RotationOrigin {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },

    /// `\fad(in,out)`
    Fade {
        /// Fade-in duration
        start: f64,
        /// Fade-out duration
        end: f64,
    },
    /// `\fade(a1,a2,a3,t1,t2,t3,t4)`
    ComplexFade {
        /// Opacity before `t1`
        start: f64,
        /// Opacity between `t2` and `t3`
        middle: f64,
        /// Opacity after `t4`
        end: f64,
        /// First fade begins
        time1: f64,
        /// First fade ends
        time2: f64,
        /// Second fade begins
        time3: f64,
        /// Second fade ends
        time4: f64,
    },
    /// `\k`
    ColorKaraoke(f64),
    /// `\K` or `\kf`
    SweepingColorKaraoke(f64),
    /// `\ko`
    OutlineKaraoke(f64),
    /// `\q`
    WrappingStyle(WrappingStyle),

    /// `\t([t1,t2,][accel,]\tags)`
    Transform {
        /// Animation start, seconds from the dialogue start
        start: Option<f64>,
        /// Animation end, seconds from the dialogue start
        end: Option<f64>,
        /// Acceleration exponent
        accel: Option<f64>,
        /// Tags animated towards
        tags: Vec<Part>,
    },

    /// `\clip(x1,y1,x2,y2)` or `\iclip(...)`
    RectangularClip {
        /// Left
        x1: f64,
        /// Top
        y1: f64,
        /// Right
        x2: f64,
        /// Bottom
        y2: f64,
        /// `true` for `\clip`, `false` for `\iclip`
        inside: bool,
    },
    /// `\clip([scale,]drawing)` or `\iclip(...)`
    VectorClip {
        /// Drawing scale exponent
        scale: f64,
        /// Clip outline
        instructions: Vec<Instruction>,
        /// `true` for `\clip`, `false` for `\iclip`
        inside: bool,
    },

    /// `\p`
    DrawingMode(f64),
    /// `\pbo`
    DrawingBaselineOffset(f64),
    /// Text reinterpreted as a path while drawing mode is on
    DrawingInstructions(Vec<Instruction>),
}

impl Part {
    /// Text carried by a `Comment` part
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(text) => Some(text),
            _ => None,
        }
    }

    /// Text carried by a `Text` part
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this part alters rendering state rather than adding content
    #[must_use]
    pub const fn is_tag(&self) -> bool {
        !matches!(
            self,
            Self::Comment(_) | Self::Text(_) | Self::NewLine | Self::DrawingInstructions(_)
        )
    }
}
