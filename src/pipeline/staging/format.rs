use serde::{Deserialize, Serialize};

/// MIME types the upload endpoints accept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentMime {
    Pdf,
    Jpeg,
    Png,
    OctetStream,
}

impl DocumentMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

/// Detect the MIME type from a file name extension, case-insensitive.
/// Anything unrecognized is sent as an opaque byte stream.
pub fn mime_for_name(name: &str) -> DocumentMime {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
        DocumentMime::Pdf
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        DocumentMime::Jpeg
    } else if lower.ends_with(".png") {
        DocumentMime::Png
    } else {
        DocumentMime::OctetStream
    }
}
