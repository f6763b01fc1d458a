//! Prescription understanding pipeline.
//!
//! Turns an uploaded prescription document (PDF or photo) into structured
//! medical data by driving a remote OCR/AI backend through an ordered
//! fallback chain, then parsing the extracted text with deterministic
//! heuristics. The backend is a black box; only the client-side contract
//! lives here. Presentation and persistence are the caller's concern.

pub mod backend;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod service;

pub use models::{DoctorInfo, Medicine, MedicineForm, PrescriptionAnalysis};
pub use pipeline::extraction::{ExtractionOutcome, ExtractionStrategy};
pub use pipeline::staging::{BytesSource, DocumentSource, PathSource, StagedDocument};
pub use service::PrescriptionService;
