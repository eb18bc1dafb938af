//! RGBA color value and the ASS hex color decoders
//!
//! ASS stores colors as `&H` followed by hex digits in `AABBGGRR` order
//! (blue first, alpha in the high byte, `00` meaning opaque). Style lines
//! carry the alpha byte, override tags like `\c` usually do not.
//!
//! # Example
//!
//! ```rust
//! use ass_script::utils::{parse_color, parse_color_with_alpha, Color};
//!
//! assert_eq!(parse_color("&H3F171F&")?, Color::new(31, 23, 63, 1.0));
//! assert_eq!(parse_color_with_alpha("&HFF434441")?.alpha(), 0.0);
//! # Ok::<(), ass_script::CoreError>(())
//! ```

use core::fmt;

use super::errors::{invalid_color, Result};

/// Immutable RGBA color
///
/// Channels are 0-255, alpha is opacity in `[0, 1]` (1 is fully opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel
    red: u8,
    /// Green channel
    green: u8,
    /// Blue channel
    blue: u8,
    /// Opacity
    alpha: f64,
}

impl Color {
    /// Create a color; alpha is clamped into `[0, 1]`
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: clamp_unit(alpha),
        }
    }

    /// Red channel
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green channel
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Opacity in `[0, 1]`
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy of this color with a different alpha
    ///
    /// `None` keeps the current alpha, which is how `\alpha`-less
    /// overrides are applied by renderers.
    #[must_use]
    pub fn with_alpha(&self, alpha: Option<f64>) -> Self {
        alpha.map_or(*self, |alpha| Self::new(self.red, self.green, self.blue, alpha))
    }

    /// Linear interpolation towards `target`
    ///
    /// `progress` is clamped into `[0, 1]`; channels are rounded.
    #[must_use]
    pub fn interpolate(&self, target: &Self, progress: f64) -> Self {
        let progress = clamp_unit(progress);
        let channel = |from: u8, to: u8| {
            let value = f64::from(from) + progress * (f64::from(to) - f64::from(from));
            value.round().clamp(0.0, 255.0) as u8
        };

        Self::new(
            channel(self.red, target.red),
            channel(self.green, target.green),
            channel(self.blue, target.blue),
            self.alpha + progress * (target.alpha - self.alpha),
        )
    }

    /// CSS `rgba()` representation
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Convert an ASS alpha byte (`00` opaque, `FF` transparent) into opacity
#[must_use]
pub fn alpha_from_byte(byte: u8) -> f64 {
    1.0 - f64::from(byte) / 255.0
}

/// Scan the hex digits of an `&H...&` value
///
/// Returns the numeric value (saturating at `0xFFFF_FFFF`) and the number of
/// bytes consumed, including the optional `&`/`H` prefix and `&` suffix.
pub(crate) fn scan_hex_value(input: &str) -> Option<(u32, usize)> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && matches!(bytes[pos], b'&' | b'H' | b'h') {
        pos += 1;
    }

    let digits_start = pos;
    let mut value: u64 = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_hexdigit() {
        let digit = u64::from(char::from(bytes[pos]).to_digit(16).unwrap_or(0));
        value = value.saturating_mul(16).saturating_add(digit);
        pos += 1;
    }

    if pos == digits_start {
        return None;
    }

    while pos < bytes.len() && bytes[pos] == b'&' {
        pos += 1;
    }

    let value = u32::try_from(value).unwrap_or(u32::MAX);
    Some((value, pos))
}

/// Split a packed `AABBGGRR` value into a color
pub(crate) fn color_from_packed(value: u32, with_alpha: bool) -> Color {
    let [red, green, blue, alpha] = value.to_le_bytes();
    let alpha = if with_alpha { alpha_from_byte(alpha) } else { 1.0 };
    Color::new(red, green, blue, alpha)
}

/// Decode an override-tag color (`&HBBGGRR&`)
///
/// Alpha is always 1. Fewer than six digits fill the low-order channels
/// first (`&H71F&` is red `1F`, green `07`). Values wider than 32 bits
/// saturate.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`](super::CoreError::InvalidColor) when no
/// hex digits are present or trailing garbage follows them.
pub fn parse_color(color_str: &str) -> Result<Color> {
    let trimmed = color_str.trim();
    match scan_hex_value(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => {
            Ok(color_from_packed(value, false))
        }
        _ => Err(invalid_color(color_str)),
    }
}

/// Decode a style color (`&HAABBGGRR`)
///
/// Alpha is stored as opacity, `1 - AA/255`. Plain decimal integers are
/// accepted too, which is how SSA v4 `[V4 Styles]` sections write colors.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`](super::CoreError::InvalidColor) when the
/// value is neither hex nor decimal.
pub fn parse_color_with_alpha(color_str: &str) -> Result<Color> {
    let trimmed = color_str.trim();

    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        let value: i64 = trimmed.parse().map_err(|_| invalid_color(color_str))?;
        let packed = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        return Ok(color_from_packed(packed, true));
    }

    if !(trimmed.starts_with('&') || trimmed.starts_with('H') || trimmed.starts_with('h')) {
        return Err(invalid_color(color_str));
    }

    match scan_hex_value(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => {
            Ok(color_from_packed(value, true))
        }
        _ => Err(invalid_color(color_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_with_alpha_decodes_aabbggrr() {
        assert_eq!(
            parse_color_with_alpha("&H00434441").unwrap(),
            Color::new(65, 68, 67, 1.0)
        );
        assert_eq!(
            parse_color_with_alpha("&HF0434441").unwrap(),
            Color::new(65, 68, 67, 1.0 - 240.0 / 255.0)
        );
        assert_eq!(
            parse_color_with_alpha("&HFF434441").unwrap(),
            Color::new(65, 68, 67, 0.0)
        );
    }

    #[test]
    fn color_with_alpha_accepts_decimal() {
        assert_eq!(
            parse_color_with_alpha("16777215").unwrap(),
            Color::new(255, 255, 255, 1.0)
        );
        assert_eq!(
            parse_color_with_alpha("255").unwrap(),
            Color::new(255, 0, 0, 1.0)
        );
    }

    #[test]
    fn tag_color_forces_opaque() {
        assert_eq!(
            parse_color("&H3F171F&").unwrap(),
            Color::new(31, 23, 63, 1.0)
        );
        assert_eq!(parse_color("&H71F&").unwrap(), Color::new(31, 7, 0, 1.0));
    }

    #[test]
    fn oversized_color_saturates() {
        assert_eq!(
            parse_color("&HAAAA3F171F00&").unwrap(),
            Color::new(255, 255, 255, 1.0)
        );
    }

    #[test]
    fn invalid_colors_are_rejected() {
        assert!(parse_color("&H&").is_err());
        assert!(parse_color("&HZZ&").is_err());
        assert!(parse_color_with_alpha("white").is_err());
        assert!(parse_color_with_alpha("").is_err());
    }

    #[test]
    fn with_alpha_and_interpolate() {
        let red = Color::new(255, 0, 0, 1.0);
        let blue = Color::new(0, 0, 255, 0.0);

        assert_eq!(red.with_alpha(Some(0.5)).alpha(), 0.5);
        assert_eq!(red.with_alpha(None), red);

        let mid = red.interpolate(&blue, 0.5);
        assert_eq!(mid, Color::new(128, 0, 128, 0.5));
        assert_eq!(red.interpolate(&blue, 2.0), blue);
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::new(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
    }
}
