use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::format::{mime_for_name, DocumentMime};
use super::StagingError;

/// A byte-materialized document ready for transmission.
///
/// Owns its transient byte store: a named temp file that is removed when
/// the value drops, including on early return and panic unwind.
pub struct StagedDocument {
    name: String,
    mime: DocumentMime,
    byte_size: u64,
    file: NamedTempFile,
}

impl StagedDocument {
    /// Stage raw bytes under the given file name.
    ///
    /// Zero-length payloads are rejected up front; no extraction strategy
    /// can proceed without bytes.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Self, StagingError> {
        if bytes.is_empty() {
            return Err(StagingError::EmptyDocument(name.to_string()));
        }

        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(name = %name, size = bytes.len(), "Document staged");

        Ok(Self {
            name: name.to_string(),
            mime: mime_for_name(name),
            byte_size: bytes.len() as u64,
            file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> DocumentMime {
        self.mime
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the staged bytes back for transmission.
    pub fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.file.path())
    }
}

/// Resolver turning an opaque input handle into a staged byte payload.
///
/// Upload bodies are single-consumption, so each retry stage calls `stage()`
/// again for a fresh copy instead of rewinding a stream.
pub trait DocumentSource {
    fn stage(&self) -> Result<StagedDocument, StagingError>;
}

/// Source backed by a filesystem path.
pub struct PathSource {
    path: PathBuf,
}

impl PathSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for PathSource {
    fn stage(&self) -> Result<StagedDocument, StagingError> {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.bin")
            .to_string();
        let bytes = std::fs::read(&self.path).map_err(|e| {
            StagingError::SourceUnreadable(format!("{}: {e}", self.path.display()))
        })?;
        StagedDocument::from_bytes(&name, &bytes)
    }
}

/// In-memory source for callers that already hold the bytes (and for tests).
pub struct BytesSource {
    name: String,
    bytes: Vec<u8>,
}

impl BytesSource {
    pub fn new(name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.to_string(),
            bytes: bytes.into(),
        }
    }
}

impl DocumentSource for BytesSource {
    fn stage(&self) -> Result<StagedDocument, StagingError> {
        StagedDocument::from_bytes(&self.name, &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_document_carries_name_mime_and_size() {
        let document = StagedDocument::from_bytes("rx.pdf", b"fake pdf content").unwrap();
        assert_eq!(document.name(), "rx.pdf");
        assert_eq!(document.mime(), DocumentMime::Pdf);
        assert_eq!(document.byte_size(), 16);
    }

    #[test]
    fn staged_bytes_round_trip() {
        let document = StagedDocument::from_bytes("scan.jpg", b"jpeg bytes").unwrap();
        assert_eq!(document.read_bytes().unwrap(), b"jpeg bytes");
    }

    #[test]
    fn empty_payload_rejected() {
        let result = StagedDocument::from_bytes("empty.pdf", b"");
        assert!(matches!(result, Err(StagingError::EmptyDocument(_))));
    }

    #[test]
    fn temp_file_removed_on_drop() {
        let document = StagedDocument::from_bytes("rx.pdf", b"content").unwrap();
        let path = document.path().to_path_buf();
        assert!(path.exists());
        drop(document);
        assert!(!path.exists());
    }

    #[test]
    fn path_source_stages_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prescription.png");
        std::fs::write(&path, b"png bytes").unwrap();

        let source = PathSource::new(&path);
        let document = source.stage().unwrap();
        assert_eq!(document.name(), "prescription.png");
        assert_eq!(document.mime(), DocumentMime::Png);
    }

    #[test]
    fn path_source_missing_file_is_unreadable() {
        let source = PathSource::new("/nonexistent/prescription.pdf");
        assert!(matches!(
            source.stage(),
            Err(StagingError::SourceUnreadable(_))
        ));
    }

    #[test]
    fn bytes_source_produces_fresh_copies() {
        let source = BytesSource::new("rx.pdf", b"content".to_vec());
        let first = source.stage().unwrap();
        let second = source.stage().unwrap();
        assert_ne!(first.path(), second.path());
        assert_eq!(first.read_bytes().unwrap(), second.read_bytes().unwrap());
    }
}
