use serde::{Deserialize, Serialize};

/// Which strategy in the fallback chain produced an outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    Ocr,
    PlainText,
    Diagnostic,
    None,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ocr => "ocr",
            Self::PlainText => "plain_text",
            Self::Diagnostic => "diagnostic",
            Self::None => "none",
        }
    }
}

/// Position in the fallback chain.
///
/// The chain is a linear state machine: OCR, then plain-text extraction,
/// then the diagnostic echo, then exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStage {
    Ocr,
    PlainText,
    Diagnostic,
    Exhausted,
}

impl ExtractionStage {
    /// Stage to try after the current one fails. Pure; `Exhausted` is
    /// terminal.
    pub fn next(self) -> Self {
        match self {
            Self::Ocr => Self::PlainText,
            Self::PlainText => Self::Diagnostic,
            Self::Diagnostic => Self::Exhausted,
            Self::Exhausted => Self::Exhausted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ocr => "ocr",
            Self::PlainText => "plain_text",
            Self::Diagnostic => "diagnostic",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Result of one upload attempt, whichever strategy ended up serving it.
///
/// Immutable once produced. The orchestrator always sets `succeeded = true`:
/// even a total extraction failure yields a displayable outcome rather than
/// an error (see [`crate::pipeline::extraction::ExtractionOrchestrator`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub strategy: ExtractionStrategy,
    pub raw_text: String,
    pub diagnostic_message: String,
    pub succeeded: bool,
}

impl ExtractionOutcome {
    pub(crate) fn new(
        strategy: ExtractionStrategy,
        raw_text: String,
        diagnostic_message: String,
    ) -> Self {
        Self {
            strategy,
            raw_text,
            diagnostic_message,
            succeeded: true,
        }
    }

    /// Human-readable upload report for direct display.
    ///
    /// Diagnostic and exhausted outcomes already carry a full report as
    /// their text; the real extraction strategies get a header and the
    /// processing note appended.
    pub fn summary(&self) -> String {
        match self.strategy {
            ExtractionStrategy::Ocr => format!(
                "OCR extraction successful.\n\nExtracted text ({} characters):\n\n{}\n\n{}",
                self.raw_text.len(),
                self.raw_text,
                self.diagnostic_message,
            ),
            ExtractionStrategy::PlainText => format!(
                "Text extraction successful.\n\nExtracted content:\n\n{}\n\n{}",
                self.raw_text, self.diagnostic_message,
            ),
            ExtractionStrategy::Diagnostic | ExtractionStrategy::None => self.raw_text.clone(),
        }
    }
}
