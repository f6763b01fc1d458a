use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use super::confidence::score_confidence;
use super::doctor::extract_doctor_info;
use super::medicines::extract_medicines;
use super::narrative::{
    interactions_from_narrative, medicines_from_narrative, warnings_from_narrative,
    INTERACTION_ADVISORY,
};
use crate::models::{Medicine, PrescriptionAnalysis};

/// Fixed reminders attached when the AI narrative stage is unavailable.
const FALLBACK_WARNINGS: [&str; 4] = [
    "Always follow the prescribed dosage and frequency",
    "Consult your doctor before making any changes",
    "Check for drug interactions with other medications",
    "Contact your pharmacist for any questions",
];

/// Confidence assigned to narrative-free analyses: the heuristics work,
/// but nothing double-checked them.
const FALLBACK_CONFIDENCE: f32 = 0.7;

/// Build the final analysis record from extracted text and, when available,
/// the AI narrative. Never fails; a missing narrative degrades to the
/// heuristic-only fallback.
pub fn assemble(extracted_text: &str, narrative: Option<&str>) -> PrescriptionAnalysis {
    match narrative {
        Some(narrative) => assemble_with_narrative(extracted_text, narrative),
        None => fallback_analysis(extracted_text),
    }
}

fn assemble_with_narrative(extracted_text: &str, narrative: &str) -> PrescriptionAnalysis {
    // Text-derived entries first: on a name collision they win the dedup.
    let mut medicines = extract_medicines(extracted_text);
    medicines.extend(medicines_from_narrative(narrative));

    PrescriptionAnalysis {
        id: Uuid::new_v4().to_string(),
        extracted_text: extracted_text.to_string(),
        confidence: score_confidence(extracted_text),
        medicines: dedup_by_name(medicines),
        doctor: extract_doctor_info(extracted_text),
        warnings: warnings_from_narrative(narrative),
        interactions: interactions_from_narrative(narrative),
        analyzed_at: Utc::now(),
    }
}

/// Narrative-free analysis: heuristics only, generic safety reminders.
pub fn fallback_analysis(extracted_text: &str) -> PrescriptionAnalysis {
    tracing::debug!("Building narrative-free fallback analysis");

    PrescriptionAnalysis {
        id: Uuid::new_v4().to_string(),
        extracted_text: extracted_text.to_string(),
        confidence: FALLBACK_CONFIDENCE,
        medicines: dedup_by_name(extract_medicines(extracted_text)),
        doctor: extract_doctor_info(extracted_text),
        warnings: FALLBACK_WARNINGS.iter().map(|w| w.to_string()).collect(),
        interactions: vec![INTERACTION_ADVISORY.to_string()],
        analyzed_at: Utc::now(),
    }
}

/// First occurrence of a name wins; comparison is case-sensitive on the
/// raw parsed name.
fn dedup_by_name(medicines: Vec<Medicine>) -> Vec<Medicine> {
    let mut seen = HashSet::new();
    medicines
        .into_iter()
        .filter(|medicine| seen.insert(medicine.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_entry_shadows_narrative_entry_on_name_collision() {
        let text = "Metformin 500mg tablet daily";
        let narrative = "MEDICATION DETAILS:\n• Metformin 850mg capsule twice daily";

        let analysis = assemble(text, Some(narrative));
        let metformins: Vec<_> = analysis
            .medicines
            .iter()
            .filter(|m| m.name == "Metformin")
            .collect();
        assert_eq!(metformins.len(), 1);
        assert_eq!(metformins[0].dosage, "500mg", "text-derived entry wins");
    }

    #[test]
    fn narrative_medicines_merged_after_text_medicines() {
        let text = "Crocin 650mg tablet daily";
        let narrative = "MEDICATION DETAILS:\n• Azithromycin 250mg tablet once daily";

        let analysis = assemble(text, Some(narrative));
        let names: Vec<_> = analysis.medicines.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Crocin", "Azithromycin"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let text = "Paracetamol 500mg tablet daily\nparacetamol 500mg tablet daily";
        let analysis = assemble(text, None);
        let names: Vec<_> = analysis.medicines.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Paracetamol", "paracetamol"]);
    }

    #[test]
    fn fallback_has_fixed_confidence_and_warnings() {
        let analysis = assemble("Dr. Smith\nParacetamol 500mg tablet daily", None);
        assert!((analysis.confidence - 0.7).abs() < f32::EPSILON);
        assert_eq!(analysis.warnings.len(), 4);
        assert_eq!(
            analysis.interactions,
            vec!["Check for drug interactions with other medications".to_string()]
        );
    }

    #[test]
    fn narrative_path_scores_confidence_from_text() {
        let text = "Dr. Smith prescribed 500mg tablet daily";
        let analysis = assemble(text, Some("MEDICATION DETAILS:\nnothing"));
        // Dr. + mg + tablet + daily markers on a short text.
        assert!((analysis.confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn narrative_warnings_and_interactions_carried_over() {
        let narrative = "MEDICATION DETAILS:\n• Warfarin 5ml syrup once daily\n\
                         SAFETY NOTES:\n• Monitor for unusual bleeding\n\
                         Possible interaction with aspirin.";
        let analysis = assemble("some text", Some(narrative));
        assert_eq!(analysis.warnings.len(), 1);
        assert!(analysis.warnings[0].contains("bleeding"));
        assert_eq!(analysis.interactions.len(), 1);
    }

    #[test]
    fn doctor_info_always_populated() {
        let analysis = assemble("no doctor mentioned anywhere", None);
        assert_eq!(analysis.doctor.name, "Doctor information not found");
        assert!(!analysis.doctor.hospital.is_empty());
    }

    #[test]
    fn no_duplicate_names_in_any_assembled_result() {
        let text = "Dolo 650mg tablet daily\nDolo 650mg tablet daily\nDolo 650mg tablet daily";
        let analysis = assemble(text, None);
        assert_eq!(analysis.medicines.len(), 1);
    }

    #[test]
    fn confidence_within_unit_interval_for_both_paths() {
        for narrative in [None, Some("MEDICATION DETAILS:\n• Crocin 650mg tablet daily")] {
            let analysis = assemble("Dr. mg tablet daily text", narrative);
            assert!((0.0..=1.0).contains(&analysis.confidence));
        }
    }
}
