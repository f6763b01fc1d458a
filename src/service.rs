use crate::backend::{AskRequest, BackendError, PrescriptionBackend};
use crate::models::PrescriptionAnalysis;
use crate::pipeline::analysis::{assemble, fallback_analysis};
use crate::pipeline::extraction::{ExtractionError, ExtractionOrchestrator, ExtractionOutcome};
use crate::pipeline::staging::DocumentSource;

/// Query sent with the extracted text to the AI narrative endpoint.
const ANALYSIS_QUERY: &str = "Parse this prescription and extract: 1) Medicine names and generic names, 2) Dosage information, 3) Frequency and duration, 4) Doctor information, 5) Safety warnings";

/// Caller-facing entry point: upload, extract, analyze, health.
///
/// Concurrent uploads get independent service (or orchestrator) instances;
/// nothing here is shared between attempts.
pub struct PrescriptionService<B> {
    orchestrator: ExtractionOrchestrator<B>,
}

impl<B: PrescriptionBackend> PrescriptionService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            orchestrator: ExtractionOrchestrator::new(backend),
        }
    }

    /// Upload a document and run the extraction fallback chain.
    pub fn upload_and_extract(
        &self,
        source: &dyn DocumentSource,
    ) -> Result<ExtractionOutcome, ExtractionError> {
        self.orchestrator.extract(source)
    }

    /// Analyze extracted text into a structured record.
    ///
    /// Asks the backend for a narrative first; any failure there (transport,
    /// HTTP error, empty response) degrades to the heuristic-only fallback.
    /// This call cannot fail.
    pub fn analyze(&self, extracted_text: &str) -> PrescriptionAnalysis {
        let request = AskRequest {
            query: ANALYSIS_QUERY.to_string(),
            context: extracted_text.to_string(),
        };

        match self.orchestrator.backend().ask(&request) {
            Ok(response) if !response.response.trim().is_empty() => {
                tracing::info!(
                    narrative_length = response.response.len(),
                    "AI narrative received"
                );
                assemble(extracted_text, Some(&response.response))
            }
            Ok(_) => {
                tracing::warn!("Empty narrative response, using fallback analysis");
                fallback_analysis(extracted_text)
            }
            Err(error) => {
                tracing::warn!(error = %error, "Narrative request failed, using fallback analysis");
                fallback_analysis(extracted_text)
            }
        }
    }

    /// Backend health status.
    ///
    /// Unlike extraction, health failures DO propagate: the caller uses this
    /// to tell the user the backend is down before they pick a file.
    pub fn check_health(&self) -> Result<String, BackendError> {
        let health = self.orchestrator.backend().health()?;
        tracing::debug!(status = %health.status, "Backend health check");
        Ok(health.status)
    }

    /// Reachability signal for gating upload controls.
    pub fn is_reachable(&self) -> bool {
        self.check_health().is_ok()
    }
}
