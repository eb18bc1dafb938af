//! Script-wide properties from the `[Script Info]` section
//!
//! Only the keys a renderer needs are decoded; every other key is kept
//! verbatim in [`ScriptProperties::extra`] in declaration order.

use core::fmt;

use crate::utils::{parse_int, CoreError, Result};

/// Default horizontal script resolution when `PlayResX` is absent
pub const DEFAULT_RESOLUTION_X: u32 = 384;

/// Default vertical script resolution when `PlayResY` is absent
pub const DEFAULT_RESOLUTION_Y: u32 = 288;

/// Line wrapping behaviour (`WrapStyle` header, `\q` override)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrappingStyle {
    /// Smart wrapping, upper line wider
    #[default]
    SmartTop = 0,
    /// End-of-line wrapping, only `\N` breaks
    EndOfLine = 1,
    /// No wrapping, `\n` and `\N` both break
    NoWrap = 2,
    /// Smart wrapping, lower line wider
    SmartBottom = 3,
}

impl WrappingStyle {
    /// Map the numeric header/tag value
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::SmartTop),
            1 => Some(Self::EndOfLine),
            2 => Some(Self::NoWrap),
            3 => Some(Self::SmartBottom),
            _ => None,
        }
    }

    /// Numeric value as written in scripts
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WrappingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SmartTop => "smart (top wider)",
            Self::EndOfLine => "end of line",
            Self::NoWrap => "no wrap",
            Self::SmartBottom => "smart (bottom wider)",
        };
        f.write_str(name)
    }
}

/// Decoded `[Script Info]` header
///
/// # Examples
///
/// ```rust
/// use ass_script::parser::ast::{ScriptProperties, WrappingStyle};
///
/// let mut properties = ScriptProperties::default();
/// properties.set("PlayResX", "1920")?;
/// properties.set("WrapStyle", "2")?;
/// properties.set("Title", "Example")?;
///
/// assert_eq!(properties.resolution_x(), 1920);
/// assert_eq!(properties.wrapping_style(), WrappingStyle::NoWrap);
/// assert_eq!(properties.extra("title"), Some("Example"));
/// # Ok::<(), ass_script::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptProperties {
    /// `PlayResX`
    resolution_x: u32,
    /// `PlayResY`
    resolution_y: u32,
    /// `WrapStyle`
    wrapping_style: WrappingStyle,
    /// `ScaledBorderAndShadow`
    scale_border_and_shadow: bool,
    /// Unrecognised keys in declaration order
    extra: Vec<(String, String)>,
}

impl Default for ScriptProperties {
    fn default() -> Self {
        Self {
            resolution_x: DEFAULT_RESOLUTION_X,
            resolution_y: DEFAULT_RESOLUTION_Y,
            wrapping_style: WrappingStyle::default(),
            scale_border_and_shadow: false,
            extra: Vec::new(),
        }
    }
}

impl ScriptProperties {
    /// Horizontal script resolution
    #[must_use]
    pub const fn resolution_x(&self) -> u32 {
        self.resolution_x
    }

    /// Vertical script resolution
    #[must_use]
    pub const fn resolution_y(&self) -> u32 {
        self.resolution_y
    }

    /// Default wrapping style for every dialogue
    #[must_use]
    pub const fn wrapping_style(&self) -> WrappingStyle {
        self.wrapping_style
    }

    /// Whether border and shadow sizes scale with the video resolution
    #[must_use]
    pub const fn scale_border_and_shadow(&self) -> bool {
        self.scale_border_and_shadow
    }

    /// Value of a key that has no dedicated field (case-insensitive)
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// All keys without a dedicated field
    pub fn extra_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Apply one `Key: Value` header line
    ///
    /// Unparsable resolutions keep their previous value; an unknown
    /// `WrapStyle` number or a `ScaledBorderAndShadow` that is neither
    /// `yes` nor `no` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFieldValue`] for an out-of-range
    /// `WrapStyle` or an unrecognised `ScaledBorderAndShadow` value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = key.trim();
        let value = value.trim();

        if key.eq_ignore_ascii_case("PlayResX") {
            self.resolution_x = parse_resolution(value).unwrap_or(self.resolution_x);
        } else if key.eq_ignore_ascii_case("PlayResY") {
            self.resolution_y = parse_resolution(value).unwrap_or(self.resolution_y);
        } else if key.eq_ignore_ascii_case("WrapStyle") {
            self.wrapping_style = parse_int(value)
                .ok()
                .and_then(WrappingStyle::from_value)
                .ok_or_else(|| CoreError::invalid_field("WrapStyle", value))?;
        } else if key.eq_ignore_ascii_case("ScaledBorderAndShadow") {
            self.scale_border_and_shadow = if value.eq_ignore_ascii_case("yes") {
                true
            } else if value.eq_ignore_ascii_case("no") {
                false
            } else {
                return Err(CoreError::invalid_field("ScaledBorderAndShadow", value));
            };
        } else if let Some(slot) = self
            .extra
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
        {
            slot.1 = value.to_string();
        } else {
            self.extra.push((key.to_string(), value.to_string()));
        }

        Ok(())
    }
}

fn parse_resolution(value: &str) -> Option<u32> {
    parse_int(value)
        .ok()
        .and_then(|resolution| u32::try_from(resolution).ok())
        .filter(|resolution| *resolution > 0)
}
