//! Request body kinds and their textual rendering.

use bytes::Bytes;
use std::fmt;

/// Rendering used for multipart bodies.
pub const OMITTED_BODY_PLACEHOLDER: &str = "[request body omitted]";

/// Body of an outgoing request, classified by how it renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// Textual content.
    Text(String),
    /// Raw bytes, rendered as UTF-8.
    Bytes(Bytes),
    /// No body.
    #[default]
    Empty,
    /// Multipart form data. Never rendered.
    Multipart,
    /// Any other payload, kept as its display form.
    Opaque(String),
}

impl RequestBody {
    /// Capture an arbitrary payload through its `Display` implementation.
    pub fn opaque(value: impl fmt::Display) -> Self {
        Self::Opaque(value.to_string())
    }

    /// Render the body as it appears after `-d`.
    ///
    /// Invalid UTF-8 in byte bodies is replaced with `U+FFFD`.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Empty => String::new(),
            Self::Multipart => OMITTED_BODY_PLACEHOLDER.to_string(),
            Self::Opaque(display) => display.clone(),
        }
    }

    /// Check if the body is the empty marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(bytes))
    }
}

impl From<&[u8]> for RequestBody {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_plain() {
        assert_eq!(RequestBody::from("sample text").render(), "sample text");
    }

    #[test]
    fn test_text_xml() {
        let body = RequestBody::from("<xml><message>sample xml</message></xml>");
        assert_eq!(body.render(), "<xml><message>sample xml</message></xml>");
    }

    #[test]
    fn test_bytes_decoded() {
        let body = RequestBody::from(b"byte array content".to_vec());
        assert_eq!(body.render(), "byte array content");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let body = RequestBody::from(&[0x66, 0x6f, 0xff, 0x6f][..]);
        assert_eq!(body.render(), "fo\u{FFFD}o");
    }

    #[test]
    fn test_empty() {
        let body = RequestBody::default();
        assert!(body.is_empty());
        assert_eq!(body.render(), "");
    }

    #[test]
    fn test_multipart_omitted() {
        assert_eq!(RequestBody::Multipart.render(), "[request body omitted]");
    }

    #[test]
    fn test_opaque_uses_display() {
        struct Unknown;

        impl fmt::Display for Unknown {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "Unknown Body Type")
            }
        }

        assert_eq!(RequestBody::opaque(Unknown).render(), "Unknown Body Type");
    }
}
