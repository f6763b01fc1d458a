use super::medicines::parse_medicine_line;
use crate::models::Medicine;

/// Section markers the AI narrative uses.
const MEDICATION_MARKER: &str = "MEDICATION DETAILS:";
const PRESCRIBER_MARKER: &str = "PRESCRIBER INFORMATION:";
const SAFETY_MARKER: &str = "SAFETY NOTES:";

/// Advisory appended whenever the narrative mentions interactions.
pub const INTERACTION_ADVISORY: &str = "Check for drug interactions with other medications";

/// Medicines listed in the narrative's MEDICATION DETAILS section.
///
/// The section runs to the PRESCRIBER INFORMATION marker or to the end of
/// the narrative; bullets are split on `•` and fed through the same
/// per-line parser as the raw text. Fragments of ten characters or fewer
/// are noise, not entries.
pub fn medicines_from_narrative(narrative: &str) -> Vec<Medicine> {
    let Some(start) = narrative.find(MEDICATION_MARKER) else {
        return Vec::new();
    };
    let section = &narrative[start + MEDICATION_MARKER.len()..];
    let section = match section.find(PRESCRIBER_MARKER) {
        Some(end) => &section[..end],
        None => section,
    };

    section
        .split('•')
        .map(str::trim)
        .filter(|item| item.chars().count() > 10)
        .filter_map(parse_medicine_line)
        .collect()
}

/// Warnings from the narrative's SAFETY NOTES section.
pub fn warnings_from_narrative(narrative: &str) -> Vec<String> {
    let Some(start) = narrative.find(SAFETY_MARKER) else {
        return Vec::new();
    };

    narrative[start + SAFETY_MARKER.len()..]
        .split('•')
        .map(str::trim)
        .filter(|item| item.chars().count() > 5)
        .map(str::to_string)
        .collect()
}

/// Interaction advisory, attached when the narrative mentions interactions
/// anywhere.
pub fn interactions_from_narrative(narrative: &str) -> Vec<String> {
    if narrative.to_lowercase().contains("interaction") {
        vec![INTERACTION_ADVISORY.to_string()]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_narrative() -> &'static str {
        "Here is the prescription breakdown.\n\
         MEDICATION DETAILS:\n\
         • Amoxicillin 500mg capsule twice daily for 7 days\n\
         • Paracetamol 650mg tablet once daily\n\
         PRESCRIBER INFORMATION:\n\
         Dr. Verma, Sunrise Hospital\n\
         SAFETY NOTES:\n\
         • Avoid alcohol while on this course\n\
         • May cause drowsiness\n\
         • ok\n"
    }

    #[test]
    fn medication_section_parsed_into_medicines() {
        let medicines = medicines_from_narrative(sample_narrative());
        assert_eq!(medicines.len(), 2);
        assert_eq!(medicines[0].name, "Amoxicillin");
        assert_eq!(medicines[1].name, "Paracetamol");
    }

    #[test]
    fn medication_section_bounded_by_prescriber_marker() {
        let medicines = medicines_from_narrative(sample_narrative());
        assert!(medicines.iter().all(|m| !m.instructions.contains("Verma")));
    }

    #[test]
    fn medication_section_runs_to_end_without_marker() {
        let narrative = "MEDICATION DETAILS:\n• Cetirizine 10ml syrup once daily";
        let medicines = medicines_from_narrative(narrative);
        assert_eq!(medicines.len(), 1);
        assert_eq!(medicines[0].name, "Cetirizine");
    }

    #[test]
    fn no_medication_marker_yields_nothing() {
        assert!(medicines_from_narrative("plain narrative text").is_empty());
    }

    #[test]
    fn short_fragments_skipped() {
        let narrative = "MEDICATION DETAILS:\n• 500mg dose\n• Azithromycin 250mg tablet daily";
        let medicines = medicines_from_narrative(narrative);
        assert_eq!(medicines.len(), 1);
        assert_eq!(medicines[0].name, "Azithromycin");
    }

    #[test]
    fn safety_notes_become_warnings() {
        let warnings = warnings_from_narrative(sample_narrative());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "Avoid alcohol while on this course");
        assert_eq!(warnings[1], "May cause drowsiness");
    }

    #[test]
    fn tiny_safety_fragments_discarded() {
        // "ok" in the sample is below the five-character threshold.
        let warnings = warnings_from_narrative(sample_narrative());
        assert!(!warnings.iter().any(|w| w == "ok"));
    }

    #[test]
    fn no_safety_marker_yields_nothing() {
        assert!(warnings_from_narrative("nothing here").is_empty());
    }

    #[test]
    fn interaction_mention_adds_advisory() {
        let interactions =
            interactions_from_narrative("Watch for a potential Interaction with warfarin.");
        assert_eq!(interactions, vec![INTERACTION_ADVISORY.to_string()]);
    }

    #[test]
    fn no_interaction_mention_no_advisory() {
        assert!(interactions_from_narrative("all clear").is_empty());
    }
}
