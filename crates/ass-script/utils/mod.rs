//! Primitive decoders and shared types
//!
//! Leaf-level helpers used by every builder in the crate: color and time
//! decoding, the default/validate field policy, and the decoding of embedded
//! attachment data.
//!
//! # Example
//!
//! ```rust
//! use ass_script::utils::{parse_time, value_or_default};
//!
//! assert_eq!(parse_time("0:01:30.50")?, 90.5);
//!
//! let alignment = value_or_default("Alignment", None, |v| v.parse::<u8>().map_err(Into::into), None, "2");
//! # let _ = alignment;
//! # Ok::<(), ass_script::CoreError>(())
//! ```

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

pub mod color;
pub mod errors;
pub mod hashers;

pub use color::{alpha_from_byte, parse_color, parse_color_with_alpha, Color};
pub use errors::{CoreError, ErrorCategory, Result};
pub use hashers::{create_hash_map, HashMap};

use errors::{invalid_numeric, invalid_time};

impl From<core::num::ParseIntError> for CoreError {
    fn from(err: core::num::ParseIntError) -> Self {
        invalid_numeric("integer", &err.to_string())
    }
}

impl From<core::num::ParseFloatError> for CoreError {
    fn from(err: core::num::ParseFloatError) -> Self {
        invalid_numeric("float", &err.to_string())
    }
}

/// Read a field with the uniform default/validate policy
///
/// - absent field: `convert(default)`
/// - present but not convertible (garbage): `convert(default)`
/// - converted but rejected by `validate`: error naming the field and raw value
///
/// # Errors
///
/// Returns [`CoreError::InvalidFieldValue`] when `validate` rejects the
/// converted value, or [`CoreError::Internal`] when `default` itself does not
/// convert.
pub fn value_or_default<T, C>(
    field: &str,
    raw: Option<&str>,
    convert: C,
    validate: Option<fn(&T) -> bool>,
    default: &str,
) -> Result<T>
where
    C: Fn(&str) -> Result<T>,
{
    let fallback = |convert: &C| {
        convert(default).map_err(|err| {
            CoreError::internal(format!("default '{default}' for '{field}' is invalid: {err}"))
        })
    };

    let Some(raw) = raw else {
        return fallback(&convert);
    };

    match convert(raw) {
        Ok(value) => match validate {
            Some(is_valid) if !is_valid(&value) => Err(CoreError::invalid_field(field, raw)),
            _ => Ok(value),
        },
        Err(err) => {
            log::debug!("field '{field}' value '{raw}' not decodable ({err}), using default '{default}'");
            fallback(&convert)
        }
    }
}

/// Parse a float field, trimming whitespace
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if the text is not a finite number.
pub fn parse_float(value: &str) -> Result<f64> {
    let parsed: f64 = value.trim().parse()?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(invalid_numeric(value, "not a finite number"))
    }
}

/// Parse an integer field, trimming whitespace
///
/// Accepts a fractional part and truncates it, as older authoring tools
/// sometimes write margins as `10.0`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if the text is not a number.
pub fn parse_int(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    trimmed
        .parse::<i64>()
        .or_else(|_| parse_float(trimmed).map(|float| float.trunc() as i64))
}

/// Parse ASS time format (`H:MM:SS.CC`) to seconds
///
/// Colon-separated fields accumulate as `previous * 60 + field`, so
/// `MM:SS.CC` and plain seconds are accepted as well.
///
/// # Example
///
/// ```rust
/// # use ass_script::utils::parse_time;
/// assert_eq!(parse_time("0:01:30.50")?, 90.5);
/// assert_eq!(parse_time("1:00:00.00")?, 3600.0);
/// # Ok::<(), ass_script::CoreError>(())
/// ```
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] if any field is not a number.
pub fn parse_time(time_str: &str) -> Result<f64> {
    let trimmed = time_str.trim();
    if trimmed.is_empty() {
        return Err(invalid_time(time_str, "empty time value"));
    }

    trimmed.split(':').try_fold(0.0, |previous, field| {
        let field = field.trim();
        let value: f64 = field
            .parse()
            .map_err(|_| invalid_time(time_str, "field is not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_time(time_str, "field out of range"));
        }
        Ok(previous * 60.0 + value)
    })
}

/// Parse SRT time format (`hh:mm:ss,mmm`) to seconds
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] if the value is malformed.
pub fn parse_srt_time(time_str: &str) -> Result<f64> {
    parse_time(&time_str.replace(',', "."))
}

/// Decode the UU-encoding variant used by `[Fonts]` and `[Graphics]` sections
///
/// ASS writes every 6 bits as one character offset by 33, with no per-line
/// length prefix. Lines are concatenated; a trailing group of 2 or 3
/// characters yields 1 or 2 bytes.
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if a character falls outside the
/// encoding alphabet or a trailing group has a single character.
pub fn decode_uu_data<'a, I>(lines: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sextets = Vec::new();
    for line in lines {
        for byte in line.trim().bytes() {
            if !(33..=96).contains(&byte) {
                return Err(invalid_numeric(
                    char::from(byte),
                    "character outside the embedded-data alphabet",
                ));
            }
            sextets.push(byte - 33);
        }
    }

    let mut result = Vec::with_capacity(sextets.len() * 3 / 4);
    for chunk in sextets.chunks(4) {
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        let [c1, c2, c3, c4] = group;

        let byte1 = (c1 << 2) | (c2 >> 4);
        let byte2 = ((c2 & 0x0F) << 4) | (c3 >> 2);
        let byte3 = ((c3 & 0x03) << 6) | c4;

        match chunk.len() {
            4 => result.extend_from_slice(&[byte1, byte2, byte3]),
            3 => result.extend_from_slice(&[byte1, byte2]),
            2 => result.push(byte1),
            _ => return Err(invalid_numeric(chunk.len(), "dangling character group")),
        }
    }

    Ok(result)
}

/// Encode bytes as standard padded base64
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}
