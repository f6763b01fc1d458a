use super::types::{ExtractionOutcome, ExtractionStage, ExtractionStrategy};
use super::ExtractionError;
use crate::backend::{BackendError, PrescriptionBackend, UploadResponse};
use crate::pipeline::staging::{DocumentSource, StagedDocument};

/// Phrase the text-only endpoint uses when a document has no text layer.
/// Matched case-insensitively as a substring of the response message.
const NO_TEXT_SENTINEL: &str = "no text found";

/// Drives the upload strategies in order until one yields text.
///
/// Uploading a document is a user-facing action, so this boundary never
/// surfaces transport errors: every stage failure falls through the chain,
/// and full exhaustion still returns an `Ok` outcome whose text is a
/// failure report the caller can display. The one hard error is a source
/// that cannot be staged at all. This always-succeeds contract applies
/// here only; other modules propagate their errors normally.
pub struct ExtractionOrchestrator<B> {
    backend: B,
}

impl<B: PrescriptionBackend> ExtractionOrchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the fallback chain for one document.
    ///
    /// A fresh staged copy is prepared per stage: upload bodies are
    /// single-consumption. Each staged copy is dropped (and its temp file
    /// removed) when its stage finishes, whatever the result.
    pub fn extract(
        &self,
        source: &dyn DocumentSource,
    ) -> Result<ExtractionOutcome, ExtractionError> {
        let mut ocr_failure = String::new();
        let mut text_failure = String::new();
        let mut diagnostic_failure = String::new();
        let mut file_name = String::new();
        let mut byte_size = 0u64;

        let mut stage = ExtractionStage::Ocr;
        while stage != ExtractionStage::Exhausted {
            let document = source.stage()?;
            file_name = document.name().to_string();
            byte_size = document.byte_size();

            tracing::info!(
                stage = stage.as_str(),
                file = %file_name,
                size = byte_size,
                "Attempting extraction stage"
            );

            let attempt = match stage {
                ExtractionStage::Ocr => self.try_ocr(&document),
                ExtractionStage::PlainText => self.try_text_only(&document, &ocr_failure),
                ExtractionStage::Diagnostic => {
                    self.try_diagnostic(&document, &ocr_failure, &text_failure)
                }
                ExtractionStage::Exhausted => break,
            };

            match attempt {
                Ok(outcome) => {
                    tracing::info!(
                        stage = stage.as_str(),
                        strategy = outcome.strategy.as_str(),
                        text_length = outcome.raw_text.len(),
                        "Extraction stage succeeded"
                    );
                    return Ok(outcome);
                }
                Err(reason) => {
                    tracing::warn!(
                        stage = stage.as_str(),
                        reason = %reason,
                        "Extraction stage failed"
                    );
                    match stage {
                        ExtractionStage::Ocr => ocr_failure = reason,
                        ExtractionStage::PlainText => text_failure = reason,
                        ExtractionStage::Diagnostic => diagnostic_failure = reason,
                        ExtractionStage::Exhausted => {}
                    }
                }
            }

            stage = stage.next();
        }

        tracing::warn!(file = %file_name, "All extraction stages failed");
        Ok(exhausted_outcome(
            &file_name,
            byte_size,
            &ocr_failure,
            &text_failure,
            &diagnostic_failure,
        ))
    }

    fn try_ocr(&self, document: &StagedDocument) -> Result<ExtractionOutcome, String> {
        let response = self.backend.upload_ocr(document).map_err(|e| match e {
            BackendError::Status { status, body } => format!("OCR HTTP {status}: {body}"),
            other => format!("OCR request failed: {other}"),
        })?;

        if let Some(text) = first_nonempty_content(&response) {
            return Ok(ExtractionOutcome::new(
                ExtractionStrategy::Ocr,
                text.to_string(),
                format!(
                    "File: {} ({} bytes), processed by the backend OCR engine",
                    document.name(),
                    document.byte_size(),
                ),
            ));
        }

        let message = if response.message.is_empty() {
            "No documents processed".to_string()
        } else {
            response.message
        };
        Err(format!("OCR processed but no text extracted: {message}"))
    }

    /// Born-digital PDFs often yield usable text without an OCR engine;
    /// this endpoint may return it in the message field instead of a
    /// document entry.
    fn try_text_only(
        &self,
        document: &StagedDocument,
        ocr_failure: &str,
    ) -> Result<ExtractionOutcome, String> {
        let response = self.backend.upload_text_only(document).map_err(|e| match e {
            BackendError::Status { status, .. } => format!("Text extraction failed: HTTP {status}"),
            other => format!("Text extraction request failed: {other}"),
        })?;

        let note = format!(
            "File: {} ({} bytes), text-based extraction used because OCR was unavailable ({})",
            document.name(),
            document.byte_size(),
            ocr_failure,
        );

        if let Some(text) = first_nonempty_content(&response) {
            return Ok(ExtractionOutcome::new(
                ExtractionStrategy::PlainText,
                text.to_string(),
                note,
            ));
        }

        let message = response.message.trim();
        if !message.is_empty() && !message.to_lowercase().contains(NO_TEXT_SENTINEL) {
            return Ok(ExtractionOutcome::new(
                ExtractionStrategy::PlainText,
                message.to_string(),
                note,
            ));
        }

        Err("No text found in document, may require OCR for scanned images".to_string())
    }

    /// Not real extraction: confirms connectivity and turns the prior
    /// failures into an actionable report for the caller to display.
    fn try_diagnostic(
        &self,
        document: &StagedDocument,
        ocr_failure: &str,
        text_failure: &str,
    ) -> Result<ExtractionOutcome, String> {
        let response = self.backend.upload_diagnostic(document).map_err(|e| match e {
            BackendError::Status { status, .. } => format!("Diagnostic upload failed: HTTP {status}"),
            other => format!("Diagnostic upload failed: {other}"),
        })?;

        let backend_message = if response.message.is_empty() {
            "File received successfully".to_string()
        } else {
            response.message
        };

        let report = format!(
            "Diagnostic mode: connectivity confirmed, but no text could be extracted.\n\n\
             Processing issues:\n\
             - OCR: {ocr_failure}\n\
             - Text extraction: {text_failure}\n\n\
             File: {} ({} bytes)\n\
             Backend message: {backend_message}\n\n\
             Possible solutions:\n\
             - Try a text-based PDF instead of a scanned image\n\
             - Check the backend OCR installation\n\
             - Verify the document is not corrupted or password-protected",
            document.name(),
            document.byte_size(),
        );

        Ok(ExtractionOutcome::new(
            ExtractionStrategy::Diagnostic,
            report,
            format!("OCR: {ocr_failure}; text extraction: {text_failure}"),
        ))
    }
}

fn first_nonempty_content(response: &UploadResponse) -> Option<&str> {
    response
        .documents
        .iter()
        .map(|d| d.content.as_str())
        .find(|c| !c.trim().is_empty())
}

fn exhausted_outcome(
    file_name: &str,
    byte_size: u64,
    ocr_failure: &str,
    text_failure: &str,
    diagnostic_failure: &str,
) -> ExtractionOutcome {
    let report = format!(
        "Upload could not be processed.\n\n\
         All extraction methods failed:\n\
         - OCR: {ocr_failure}\n\
         - Text extraction: {text_failure}\n\
         - Diagnostic: {diagnostic_failure}\n\n\
         File: {file_name} ({byte_size} bytes)\n\
         Troubleshooting:\n\
         1. Check the backend service is running\n\
         2. Verify file permissions and size\n\
         3. Check network connectivity\n\
         4. Review backend logs for OCR errors",
    );

    ExtractionOutcome {
        strategy: ExtractionStrategy::None,
        raw_text: report,
        diagnostic_message: format!(
            "OCR: {ocr_failure}; text extraction: {text_failure}; diagnostic: {diagnostic_failure}"
        ),
        succeeded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockBackend, MockUpload};
    use crate::pipeline::staging::BytesSource;

    fn source() -> BytesSource {
        BytesSource::new("rx.pdf", b"fake pdf content".to_vec())
    }

    #[test]
    fn ocr_stage_wins_when_content_present() {
        let backend = MockBackend::unreachable()
            .with_ocr(MockUpload::with_document("Dr. Smith\nParacetamol 500mg twice daily"));
        let orchestrator = ExtractionOrchestrator::new(backend);

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.strategy, ExtractionStrategy::Ocr);
        assert!(outcome.raw_text.contains("Paracetamol"));
        assert!(outcome.succeeded);
        assert!(outcome.diagnostic_message.contains("rx.pdf"));
    }

    #[test]
    fn ocr_http_error_falls_through_to_text_stage() {
        let message = "Patient: Take Paracetamol 500mg twice daily for 5 days";
        let backend = MockBackend::unreachable()
            .with_ocr(MockUpload::Status(500, "tesseract not installed".into()))
            .with_text_only(MockUpload::with_message(message));
        let orchestrator = ExtractionOrchestrator::new(backend);

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.strategy, ExtractionStrategy::PlainText);
        assert_eq!(outcome.raw_text, message);
        assert!(outcome.succeeded);
    }

    #[test]
    fn ocr_empty_content_is_a_stage_failure() {
        let backend = MockBackend::unreachable()
            .with_ocr(MockUpload::with_document("   "))
            .with_text_only(MockUpload::with_message("Digital PDF text"));
        let orchestrator = ExtractionOrchestrator::new(backend);

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.strategy, ExtractionStrategy::PlainText);
        assert_eq!(outcome.raw_text, "Digital PDF text");
    }

    #[test]
    fn text_stage_prefers_document_content_over_message() {
        let backend = MockBackend::unreachable()
            .with_ocr(MockUpload::Status(500, "down".into()))
            .with_text_only(MockUpload::with_document("content from document entry"));
        let orchestrator = ExtractionOrchestrator::new(backend);

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.raw_text, "content from document entry");
    }

    #[test]
    fn no_text_found_sentinel_fails_text_stage() {
        let backend = MockBackend::unreachable()
            .with_ocr(MockUpload::Status(500, "down".into()))
            .with_text_only(MockUpload::with_message(
                "No text found in PDF - may require OCR",
            ))
            .with_diagnostic(MockUpload::with_message("File received"));
        let orchestrator = ExtractionOrchestrator::new(backend);

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.strategy, ExtractionStrategy::Diagnostic);
    }

    #[test]
    fn diagnostic_report_names_prior_failures() {
        let backend = MockBackend::unreachable()
            .with_ocr(MockUpload::Status(500, "tesseract not installed".into()))
            .with_text_only(MockUpload::Status(422, "unsupported".into()))
            .with_diagnostic(MockUpload::with_message("File received successfully"));
        let orchestrator = ExtractionOrchestrator::new(backend);

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.strategy, ExtractionStrategy::Diagnostic);
        assert!(outcome.raw_text.contains("OCR HTTP 500"));
        assert!(outcome.raw_text.contains("Text extraction failed: HTTP 422"));
        assert!(outcome.raw_text.contains("rx.pdf"));
        assert!(outcome.raw_text.contains("File received successfully"));
        assert!(outcome.succeeded);
    }

    #[test]
    fn total_failure_still_returns_ok_outcome() {
        let orchestrator = ExtractionOrchestrator::new(MockBackend::unreachable());

        let outcome = orchestrator.extract(&source()).unwrap();
        assert_eq!(outcome.strategy, ExtractionStrategy::None);
        assert!(outcome.succeeded);
        // All three failure reasons must be preserved for display.
        assert!(outcome.diagnostic_message.contains("OCR:"));
        assert!(outcome.diagnostic_message.contains("text extraction:"));
        assert!(outcome.diagnostic_message.contains("diagnostic:"));
        assert!(outcome.raw_text.contains("All extraction methods failed"));
        assert!(outcome.raw_text.contains("rx.pdf"));
    }

    #[test]
    fn unstageable_source_is_the_one_hard_error() {
        let orchestrator = ExtractionOrchestrator::new(MockBackend::unreachable());
        let empty = BytesSource::new("empty.pdf", Vec::new());

        let result = orchestrator.extract(&empty);
        assert!(matches!(result, Err(ExtractionError::Staging(_))));
    }
}
