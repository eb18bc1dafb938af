//! Error types for ass-script
//!
//! # Examples
//!
//! ```rust
//! use ass_script::utils::errors::{CoreError, ErrorCategory};
//!
//! let color_err = CoreError::InvalidColor("invalid".to_string());
//! assert_eq!(color_err.category(), ErrorCategory::Format);
//! assert!(color_err.suggestion().is_some());
//! ```

mod category;
mod core;
mod format;

pub use self::core::{CoreError, Result};
pub use category::ErrorCategory;
pub use format::{invalid_color, invalid_numeric, invalid_time};
