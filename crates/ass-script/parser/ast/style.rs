//! Style definitions from the `[V4+ Styles]` section
//!
//! A [`Style`] is built once from a [`TypedTemplate`] using the uniform
//! default/validate policy: missing or undecodable fields fall back to a
//! default, while a decodable value that fails validation rejects the line.

use bitflags::bitflags;
use core::fmt;

use crate::parser::template::{parse_format_line, parse_line_template, TypedTemplate};
use crate::utils::{parse_color_with_alpha, parse_float, parse_int, Color, CoreError, Result};

/// `Format:` line used to build the fallback `Default` style
pub const DEFAULT_STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";

/// Style line used when a dialogue references an unknown style and no
/// `Default` style was declared
pub const DEFAULT_STYLE_LINE: &str = "Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1";

/// Name of the fallback style
pub const DEFAULT_STYLE_NAME: &str = "Default";

/// Style name as stored in the style table
///
/// Surrounding whitespace and every leading `*` are removed, both for
/// `Style:` names and for the names dialogues refer to.
#[must_use]
pub fn normalize_style_name(name: &str) -> &str {
    name.trim().trim_start_matches('*')
}

bitflags! {
    /// Font style toggles of a style
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FontStyleFlags: u8 {
        /// `Bold`
        const BOLD = 1 << 0;
        /// `Italic`
        const ITALIC = 1 << 1;
        /// `Underline`
        const UNDERLINE = 1 << 2;
        /// `StrikeOut`
        const STRIKE_THROUGH = 1 << 3;
    }
}

/// Box drawn around the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    /// Outline plus drop shadow
    #[default]
    Outline = 1,
    /// Opaque box behind the text
    OpaqueBox = 3,
}

impl BorderStyle {
    /// Map the numeric `BorderStyle` value
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Outline),
            3 => Some(Self::OpaqueBox),
            _ => None,
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline => f.write_str("outline"),
            Self::OpaqueBox => f.write_str("opaque box"),
        }
    }
}

/// Validator for fields that may not be negative
const NON_NEGATIVE: Option<fn(&f64) -> bool> = Some(|value| *value >= 0.0);

/// Validator for non-negative integer fields
const NON_NEGATIVE_INT: Option<fn(&i64) -> bool> = Some(|value| *value >= 0);

/// Validator for numpad alignment
const NUMPAD: Option<fn(&i64) -> bool> = Some(|value| (1..=9).contains(value));

/// Validator for `BorderStyle`
const BORDER_STYLE: Option<fn(&i64) -> bool> = Some(|value| BorderStyle::from_value(*value).is_some());

/// Text style referenced by dialogues
///
/// # Examples
///
/// ```rust
/// use ass_script::parser::ast::Style;
/// use ass_script::parser::template::{parse_format_line, parse_line_template};
///
/// let format = parse_format_line("Format: Name, Fontname, Bold, Alignment").unwrap();
/// let line = parse_line_template("Style: *Title,Verdana,-1,8", &format).unwrap();
/// let style = Style::from_template(&line)?;
///
/// assert_eq!(style.name(), "Title");
/// assert!(style.bold());
/// assert_eq!(style.alignment(), 8);
/// assert_eq!(style.font_size(), 50.0);
/// # Ok::<(), ass_script::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Unique name, normalized by [`normalize_style_name`]
    name: String,
    /// Bold/italic/underline/strike-through
    flags: FontStyleFlags,
    /// Font family
    font_name: String,
    /// Font size in script pixels
    font_size: f64,
    /// Horizontal scale, 1.0 is 100%
    font_scale_x: f64,
    /// Vertical scale, 1.0 is 100%
    font_scale_y: f64,
    /// Extra spacing between letters
    letter_spacing: f64,
    /// Z rotation in degrees
    rotation_z: f64,
    /// Fill color
    primary_color: Color,
    /// Karaoke pre-highlight color
    secondary_color: Color,
    /// Outline color
    outline_color: Color,
    /// Shadow/box color
    shadow_color: Color,
    /// Outline width
    outline_thickness: f64,
    /// Border style
    border_style: BorderStyle,
    /// Shadow offset
    shadow_depth: f64,
    /// Numpad alignment, 1-9
    alignment: u8,
    /// Left margin
    margin_left: u32,
    /// Right margin
    margin_right: u32,
    /// Vertical margin
    margin_vertical: u32,
}

impl Style {
    /// Build a style from a `Style:` template
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] without a `Name` field and
    /// [`CoreError::InvalidFieldValue`] when a decodable value fails
    /// validation (negative sizes, alignment outside 1-9, border style other
    /// than 1 or 3).
    pub fn from_template(template: &TypedTemplate) -> Result<Self> {
        let name = template
            .get("Name")
            .ok_or_else(|| CoreError::MissingField("Name".to_string()))?;
        let name = normalize_style_name(name).to_string();

        let flag = |field: &str| -> Result<bool> {
            template.value_or_default(field, |v| parse_int(v).map(|v| v != 0), None, "0")
        };

        let mut flags = FontStyleFlags::empty();
        flags.set(FontStyleFlags::BOLD, flag("Bold")?);
        flags.set(FontStyleFlags::ITALIC, flag("Italic")?);
        flags.set(FontStyleFlags::UNDERLINE, flag("Underline")?);
        flags.set(FontStyleFlags::STRIKE_THROUGH, flag("StrikeOut")?);

        let font_name = template
            .get("Fontname")
            .map(str::trim)
            .filter(|font| !font.is_empty())
            .unwrap_or("sans-serif")
            .to_string();

        let outline_field = if template.get("OutlineColour").is_some() {
            "OutlineColour"
        } else {
            "TertiaryColour"
        };

        let border_style = template.value_or_default("BorderStyle", parse_int, BORDER_STYLE, "1")?;
        let alignment = template.value_or_default("Alignment", parse_int, NUMPAD, "2")?;
        let margin = |field: &str| -> Result<u32> {
            template
                .value_or_default(field, parse_int, NON_NEGATIVE_INT, "20")
                .map(|value| u32::try_from(value).unwrap_or(u32::MAX))
        };

        Ok(Self {
            name,
            flags,
            font_name,
            font_size: template.value_or_default("Fontsize", parse_float, NON_NEGATIVE, "50")?,
            font_scale_x: template.value_or_default("ScaleX", parse_float, NON_NEGATIVE, "100")?
                / 100.0,
            font_scale_y: template.value_or_default("ScaleY", parse_float, NON_NEGATIVE, "100")?
                / 100.0,
            letter_spacing: template.value_or_default("Spacing", parse_float, NON_NEGATIVE, "0")?,
            rotation_z: template.value_or_default("Angle", parse_float, None, "0")?,
            primary_color: template.value_or_default(
                "PrimaryColour",
                parse_color_with_alpha,
                None,
                "&H00FFFFFF",
            )?,
            secondary_color: template.value_or_default(
                "SecondaryColour",
                parse_color_with_alpha,
                None,
                "&H00FFFF00",
            )?,
            outline_color: template.value_or_default(
                outline_field,
                parse_color_with_alpha,
                None,
                "&H00000000",
            )?,
            shadow_color: template.value_or_default(
                "BackColour",
                parse_color_with_alpha,
                None,
                "&H80000000",
            )?,
            outline_thickness: template.value_or_default("Outline", parse_float, NON_NEGATIVE, "2")?,
            border_style: BorderStyle::from_value(border_style)
                .ok_or_else(|| CoreError::invalid_field("BorderStyle", border_style.to_string()))?,
            shadow_depth: template.value_or_default("Shadow", parse_float, NON_NEGATIVE, "3")?,
            alignment: u8::try_from(alignment)
                .map_err(|_| CoreError::invalid_field("Alignment", alignment.to_string()))?,
            margin_left: margin("MarginL")?,
            margin_right: margin("MarginR")?,
            margin_vertical: margin("MarginV")?,
        })
    }

    /// Synthesize the canonical `Default` style
    ///
    /// # Errors
    ///
    /// Only fails if the built-in style line is inconsistent, which would be
    /// a bug in this crate.
    pub fn canonical_default() -> Result<Self> {
        let format = parse_format_line(DEFAULT_STYLE_FORMAT)
            .ok_or_else(|| CoreError::internal("built-in style format is malformed"))?;
        let template = parse_line_template(DEFAULT_STYLE_LINE, &format)
            .ok_or_else(|| CoreError::internal("built-in style line is malformed"))?;
        Self::from_template(&template)
    }

    /// Style name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All font style toggles
    #[must_use]
    pub const fn flags(&self) -> FontStyleFlags {
        self.flags
    }

    /// Bold toggle
    #[must_use]
    pub const fn bold(&self) -> bool {
        self.flags.contains(FontStyleFlags::BOLD)
    }

    /// Italic toggle
    #[must_use]
    pub const fn italic(&self) -> bool {
        self.flags.contains(FontStyleFlags::ITALIC)
    }

    /// Underline toggle
    #[must_use]
    pub const fn underline(&self) -> bool {
        self.flags.contains(FontStyleFlags::UNDERLINE)
    }

    /// Strike-through toggle
    #[must_use]
    pub const fn strike_through(&self) -> bool {
        self.flags.contains(FontStyleFlags::STRIKE_THROUGH)
    }

    /// Font family
    #[must_use]
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Font size
    #[must_use]
    pub const fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Horizontal scale factor
    #[must_use]
    pub const fn font_scale_x(&self) -> f64 {
        self.font_scale_x
    }

    /// Vertical scale factor
    #[must_use]
    pub const fn font_scale_y(&self) -> f64 {
        self.font_scale_y
    }

    /// Letter spacing
    #[must_use]
    pub const fn letter_spacing(&self) -> f64 {
        self.letter_spacing
    }

    /// Z rotation in degrees
    #[must_use]
    pub const fn rotation_z(&self) -> f64 {
        self.rotation_z
    }

    /// Fill color
    #[must_use]
    pub const fn primary_color(&self) -> Color {
        self.primary_color
    }

    /// Karaoke pre-highlight color
    #[must_use]
    pub const fn secondary_color(&self) -> Color {
        self.secondary_color
    }

    /// Outline color
    #[must_use]
    pub const fn outline_color(&self) -> Color {
        self.outline_color
    }

    /// Shadow color
    #[must_use]
    pub const fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    /// Outline width
    #[must_use]
    pub const fn outline_thickness(&self) -> f64 {
        self.outline_thickness
    }

    /// Border style
    #[must_use]
    pub const fn border_style(&self) -> BorderStyle {
        self.border_style
    }

    /// Shadow depth
    #[must_use]
    pub const fn shadow_depth(&self) -> f64 {
        self.shadow_depth
    }

    /// Numpad alignment
    #[must_use]
    pub const fn alignment(&self) -> u8 {
        self.alignment
    }

    /// Left margin
    #[must_use]
    pub const fn margin_left(&self) -> u32 {
        self.margin_left
    }

    /// Right margin
    #[must_use]
    pub const fn margin_right(&self) -> u32 {
        self.margin_right
    }

    /// Vertical margin
    #[must_use]
    pub const fn margin_vertical(&self) -> u32 {
        self.margin_vertical
    }
}
