//! Tag handler trait and the registry that dispatches on tag names
//!
//! Tag names are prefixes of each other (`\b`, `\be`, `\blur`, `\bord`), so
//! handlers are tried longest name first. A handler that rejects its
//! arguments hands over to the next shorter name that still matches.

use std::fmt;

use super::Part;
use crate::utils::{CoreError, Result};

/// Parser for one override tag
///
/// `parse` receives the text right after the tag name and returns the
/// resulting part with the number of argument bytes consumed, or `None` if
/// the arguments do not fit the tag.
///
/// # Example
///
/// ```rust
/// use ass_script::tags::{Part, TagHandler, TagRegistry};
///
/// struct Karaoke;
///
/// impl TagHandler for Karaoke {
///     fn name(&self) -> &'static str { "kt" }
///
///     fn parse(&self, _args: &str) -> Option<(Part, usize)> {
///         Some((Part::Comment("kt".to_string()), 0))
///     }
/// }
///
/// let mut registry = TagRegistry::new();
/// registry.register(Box::new(Karaoke))?;
/// assert!(registry.register(Box::new(Karaoke)).is_err());
/// # Ok::<(), ass_script::CoreError>(())
/// ```
pub trait TagHandler: Send + Sync {
    /// Tag name without the leading backslash
    fn name(&self) -> &'static str;

    /// Parse the tag arguments
    fn parse(&self, args: &str) -> Option<(Part, usize)>;
}

/// Collection of tag handlers ordered for prefix dispatch
#[derive(Default)]
pub struct TagRegistry {
    /// Sorted by descending name length, registration order among equals
    handlers: Vec<Box<dyn TagHandler>>,
}

impl TagRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every standard override tag
    #[must_use]
    pub fn with_standard_tags() -> Self {
        let mut registry = Self::new();
        for handler in super::create_standard_handlers() {
            if let Err(err) = registry.register(handler) {
                log::error!("standard tag table is inconsistent: {err}");
            }
        }
        registry
    }

    /// Register a handler
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateTagHandler`] if a handler with the same
    /// name is already registered.
    pub fn register(&mut self, handler: Box<dyn TagHandler>) -> Result<()> {
        let name = handler.name();
        if self.handlers.iter().any(|existing| existing.name() == name) {
            return Err(CoreError::DuplicateTagHandler(name.to_string()));
        }

        let position = self
            .handlers
            .iter()
            .position(|existing| existing.name().len() < name.len())
            .unwrap_or(self.handlers.len());
        self.handlers.insert(position, handler);
        Ok(())
    }

    /// Whether a handler with this exact name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.iter().any(|handler| handler.name() == name)
    }

    /// Number of registered handlers
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Parse one tag from the text following a backslash
    ///
    /// Returns the part and the number of bytes consumed, tag name included.
    #[must_use]
    pub fn parse_tag(&self, input: &str) -> Option<(Part, usize)> {
        self.handlers
            .iter()
            .filter(|handler| input.starts_with(handler.name()))
            .find_map(|handler| {
                let name_len = handler.name().len();
                handler
                    .parse(&input[name_len..])
                    .map(|(part, consumed)| (part, name_len + consumed))
            })
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|handler| handler.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::grammar::{decimal, Matcher, ValueTag};

    const DECIMAL: &[Matcher<f64>] = &[decimal];

    #[test]
    fn longest_name_wins() {
        let mut registry = TagRegistry::new();
        registry
            .register(Box::new(ValueTag::<bool>::optional("b", &[], |_| Part::Bold(None))))
            .unwrap();
        registry
            .register(Box::new(ValueTag::optional("blur", DECIMAL, Part::GaussianBlur)))
            .unwrap();

        assert_eq!(
            registry.parse_tag("blur3"),
            Some((Part::GaussianBlur(Some(3.0)), 5))
        );
        assert_eq!(registry.parse_tag("b"), Some((Part::Bold(None), 1)));
    }

    #[test]
    fn failed_handler_falls_back_to_shorter_name() {
        let mut registry = TagRegistry::new();
        registry
            .register(Box::new(ValueTag::required("pbo", DECIMAL, Part::DrawingBaselineOffset)))
            .unwrap();
        registry
            .register(Box::new(ValueTag::optional("p", DECIMAL, |v| {
                Part::DrawingMode(v.unwrap_or(0.0))
            })))
            .unwrap();

        assert_eq!(registry.parse_tag("pbox"), Some((Part::DrawingMode(0.0), 1)));
        assert_eq!(registry.parse_tag("zz"), None);
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut registry = TagRegistry::new();
        registry
            .register(Box::new(ValueTag::required("k", DECIMAL, Part::ColorKaraoke)))
            .unwrap();
        assert_eq!(
            registry.register(Box::new(ValueTag::required("k", DECIMAL, Part::ColorKaraoke))),
            Err(CoreError::DuplicateTagHandler("k".to_string()))
        );
    }
}
