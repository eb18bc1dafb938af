//! Section tracking for line-at-a-time ingestion

use core::fmt;

/// Section the parser is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionKind {
    /// Before the first header
    #[default]
    Preamble,
    /// `[Script Info]`
    ScriptInfo,
    /// `[V4+ Styles]` or `[V4 Styles]`
    Styles,
    /// `[Events]`
    Events,
    /// `[Fonts]`
    Fonts,
    /// `[Graphics]`
    Graphics,
    /// Any other section, skipped
    Unknown,
}

impl SectionKind {
    /// Classify a section header name (without brackets, case-insensitive)
    #[must_use]
    pub fn from_header(name: &str) -> Self {
        const HEADERS: [(&str, SectionKind); 6] = [
            ("Script Info", SectionKind::ScriptInfo),
            ("V4+ Styles", SectionKind::Styles),
            ("V4 Styles", SectionKind::Styles),
            ("Events", SectionKind::Events),
            ("Fonts", SectionKind::Fonts),
            ("Graphics", SectionKind::Graphics),
        ];

        let name = name.trim();
        HEADERS
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }

    /// Whether lines are embedded attachment data
    #[must_use]
    pub const fn holds_attachments(self) -> bool {
        matches!(self, Self::Fonts | Self::Graphics)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preamble => "preamble",
            Self::ScriptInfo => "Script Info",
            Self::Styles => "V4+ Styles",
            Self::Events => "Events",
            Self::Fonts => "Fonts",
            Self::Graphics => "Graphics",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_case_insensitive() {
        assert_eq!(SectionKind::from_header("script info"), SectionKind::ScriptInfo);
        assert_eq!(SectionKind::from_header("V4 Styles"), SectionKind::Styles);
        assert_eq!(SectionKind::from_header(" EVENTS "), SectionKind::Events);
        assert_eq!(SectionKind::from_header("Aegisub Project Garbage"), SectionKind::Unknown);
    }
}
