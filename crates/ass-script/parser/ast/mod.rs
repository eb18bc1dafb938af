//! Typed data model built from script lines
//!
//! Every node is built once from a [`TypedTemplate`](crate::parser::template::TypedTemplate)
//! or header line and is immutable afterwards. The only lazily filled state
//! is a [`Dialogue`]'s parsed parts.
//!
//! # Thread Safety
//!
//! All nodes are `Send + Sync`. Dialogue parts are memoized behind a
//! single-assignment cell, so concurrent first access is safe.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use ass_script::parser::ast::{Dialogue, ScriptProperties, Style};
//!
//! let properties = ScriptProperties::default();
//! assert_eq!(properties.resolution_x(), 384);
//!
//! let style = Arc::new(Style::canonical_default()?);
//! let dialogue = Dialogue::new(1, style, 0.0, 5.0, 0, "Hello World!");
//! assert_eq!(dialogue.style().name(), "Default");
//! # Ok::<(), ass_script::CoreError>(())
//! ```

mod attachment;
mod dialogue;
mod script_info;
mod style;

pub use attachment::{Attachment, AttachmentType};
pub use dialogue::{Dialogue, TextDialect};
pub use script_info::{ScriptProperties, WrappingStyle, DEFAULT_RESOLUTION_X, DEFAULT_RESOLUTION_Y};
pub use style::{
    normalize_style_name, BorderStyle, FontStyleFlags, Style, DEFAULT_STYLE_FORMAT,
    DEFAULT_STYLE_LINE, DEFAULT_STYLE_NAME,
};
