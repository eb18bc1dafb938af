//! Format-specific error constructors
//!
//! Shared by the primitive decoders so that messages stay uniform.

use super::CoreError;
use core::fmt;

/// Create color error from invalid format
pub fn invalid_color<T: fmt::Display>(format: T) -> CoreError {
    CoreError::InvalidColor(format.to_string())
}

/// Create numeric error from parsing failure
pub fn invalid_numeric<T: fmt::Display>(value: T, reason: &str) -> CoreError {
    CoreError::InvalidNumeric(format!("'{value}': {reason}"))
}

/// Create time error from invalid format
pub fn invalid_time<T: fmt::Display>(time: T, reason: &str) -> CoreError {
    CoreError::InvalidTime(format!("'{time}': {reason}"))
}
