//! Embedded fonts and graphics from `[Fonts]` and `[Graphics]`
//!
//! Attachment data is UU-encoded in the script. It is decoded once while the
//! section is read and kept as base64 so it can be handed to a renderer as a
//! data URI.

use core::fmt;

use crate::utils::{decode_uu_data, encode_base64, CoreError, Result};

/// Attachment section an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachmentType {
    /// `[Fonts]` entry
    Font,
    /// `[Graphics]` entry
    Graphic,
}

impl fmt::Display for AttachmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font => f.write_str("font"),
            Self::Graphic => f.write_str("graphic"),
        }
    }
}

/// Embedded file
///
/// # Examples
///
/// ```rust
/// use ass_script::parser::ast::{Attachment, AttachmentType};
///
/// let logo = Attachment::new("logo.png", AttachmentType::Graphic, "iVBORw0KGgo=");
/// assert_eq!(logo.url(), "data:image/png;base64,iVBORw0KGgo=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    /// File name as declared by `fontname:`/`filename:`
    filename: String,
    /// Source section
    attachment_type: AttachmentType,
    /// File contents, base64
    contents: String,
}

impl Attachment {
    /// Create an attachment from already base64-encoded contents
    pub fn new(
        filename: impl Into<String>,
        attachment_type: AttachmentType,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            attachment_type,
            contents: contents.into(),
        }
    }

    /// Decode UU-encoded data lines into an attachment
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAttachment`] if the data lines are not
    /// valid embedded-data encoding.
    pub fn from_encoded_lines<'a, I>(
        filename: &str,
        attachment_type: AttachmentType,
        lines: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let bytes = decode_uu_data(lines).map_err(|err| CoreError::InvalidAttachment {
            filename: filename.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self::new(filename, attachment_type, encode_base64(&bytes)))
    }

    /// File name
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Source section
    #[must_use]
    pub const fn attachment_type(&self) -> AttachmentType {
        self.attachment_type
    }

    /// Contents as base64
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Media type used in the data URI
    #[must_use]
    pub fn media_type(&self) -> &'static str {
        match self.attachment_type {
            AttachmentType::Font => "application/x-font-ttf",
            AttachmentType::Graphic => {
                let extension = self
                    .filename
                    .rsplit_once('.')
                    .map(|(_, extension)| extension.to_ascii_lowercase());
                match extension.as_deref() {
                    Some("png") => "image/png",
                    Some("jpg" | "jpeg") => "image/jpeg",
                    Some("gif") => "image/gif",
                    Some("bmp") => "image/bmp",
                    _ => "application/octet-stream",
                }
            }
        }
    }

    /// `data:` URI for the contents
    #[must_use]
    pub fn url(&self) -> String {
        format!("data:{};base64,{}", self.media_type(), self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_url_uses_ttf_media_type() {
        let font = Attachment::new("font.ttf", AttachmentType::Font, "AAAA");
        assert_eq!(font.url(), "data:application/x-font-ttf;base64,AAAA");
    }

    #[test]
    fn graphic_media_type_follows_extension() {
        let graphic = |name: &str| Attachment::new(name, AttachmentType::Graphic, "");
        assert_eq!(graphic("a.JPG").media_type(), "image/jpeg");
        assert_eq!(graphic("a.gif").media_type(), "image/gif");
        assert_eq!(graphic("a.bmp").media_type(), "image/bmp");
        assert_eq!(graphic("noext").media_type(), "application/octet-stream");
    }

    #[test]
    fn encoded_lines_are_reencoded_as_base64() {
        let attachment =
            Attachment::from_encoded_lines("m.ttf", AttachmentType::Font, ["47&O"]).unwrap();
        assert_eq!(attachment.contents(), "TWFu");
        assert_eq!(attachment.filename(), "m.ttf");
    }

    #[test]
    fn malformed_data_names_the_file() {
        let err =
            Attachment::from_encoded_lines("bad.ttf", AttachmentType::Font, ["4"]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAttachment { ref filename, .. } if filename == "bad.ttf"));
    }
}
