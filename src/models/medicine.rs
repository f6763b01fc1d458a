use serde::{Deserialize, Serialize};

/// A single prescribed medicine, parsed from extracted prescription text.
///
/// Deduplication across sources is by `name` only, case-sensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub name: String,
    pub generic_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    /// The original line the medicine was parsed from.
    pub instructions: String,
    pub side_effects: Vec<String>,
    #[serde(rename = "type")]
    pub form: MedicineForm,
}

/// Dosage form of a medicine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MedicineForm {
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Drops,
    Cream,
    Ointment,
    Inhaler,
    Other,
}

impl MedicineForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tablet => "tablet",
            Self::Capsule => "capsule",
            Self::Syrup => "syrup",
            Self::Injection => "injection",
            Self::Drops => "drops",
            Self::Cream => "cream",
            Self::Ointment => "ointment",
            Self::Inhaler => "inhaler",
            Self::Other => "other",
        }
    }
}
