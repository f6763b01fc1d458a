use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::doctor::DoctorInfo;
use super::medicine::Medicine;

/// Final structured analysis of one prescription.
///
/// Immutable after construction; the caller owns display and caching.
/// Invariants: `confidence` is within [0.0, 1.0], `medicines` carries no
/// two entries with the same `name`, `doctor` is always fully populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionAnalysis {
    pub id: String,
    pub extracted_text: String,
    pub confidence: f32,
    pub medicines: Vec<Medicine>,
    pub doctor: DoctorInfo,
    pub warnings: Vec<String>,
    pub interactions: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}
