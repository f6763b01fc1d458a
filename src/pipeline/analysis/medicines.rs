use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Medicine, MedicineForm};

/// A line mentioning any of these is treated as a medicine candidate.
const CANDIDATE_KEYWORDS: [&str; 8] = [
    "tablet", "capsule", "mg", "ml", "dose", "take", "daily", "twice",
];

static DOSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(?:mg|ml|tablet|capsule)").unwrap());

static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(?:days?|weeks?|months?)").unwrap());

/// Scan raw text line by line for medicine candidates.
///
/// Pure function. Lines that never produce a plausible name are dropped.
pub fn extract_medicines(text: &str) -> Vec<Medicine> {
    text.lines()
        .filter(|line| is_candidate_line(line))
        .filter_map(|line| parse_medicine_line(line.trim()))
        .collect()
}

fn is_candidate_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    CANDIDATE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Parse one candidate line into a medicine.
///
/// Returns `None` when no word qualifies as a name. The untouched line is
/// kept as the instructions field.
pub fn parse_medicine_line(line: &str) -> Option<Medicine> {
    let name = medicine_name(line)?;
    Some(Medicine {
        name,
        generic_name: String::new(),
        dosage: dosage(line),
        frequency: frequency(line),
        duration: duration(line),
        instructions: line.to_string(),
        side_effects: Vec::new(),
        form: medicine_form(line),
    })
}

/// First word longer than three characters that is not an instruction word
/// and carries no unit suffix.
fn medicine_name(line: &str) -> Option<String> {
    line.split(' ')
        .find(|word| {
            let lower = word.to_lowercase();
            word.chars().count() > 3
                && !lower.contains("take")
                && !lower.contains("daily")
                && !lower.contains("mg")
        })
        .map(|word| word.to_string())
}

fn dosage(line: &str) -> String {
    DOSAGE
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Frequency classification, first match wins.
///
/// Bare digits intentionally count: a "2" anywhere in the line reads as
/// twice daily. Misfires on dosage digits are a known limit of this
/// heuristic.
fn frequency(line: &str) -> String {
    let lower = line.to_lowercase();
    if lower.contains("twice") || lower.contains('2') {
        "Twice daily"
    } else if lower.contains("thrice") || lower.contains('3') {
        "Three times daily"
    } else if lower.contains("once") || lower.contains('1') {
        "Once daily"
    } else if lower.contains("daily") {
        "Daily"
    } else {
        "As directed"
    }
    .to_string()
}

fn duration(line: &str) -> String {
    DURATION
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}

fn medicine_form(line: &str) -> MedicineForm {
    let lower = line.to_lowercase();
    if lower.contains("tablet") {
        MedicineForm::Tablet
    } else if lower.contains("capsule") {
        MedicineForm::Capsule
    } else if lower.contains("syrup") {
        MedicineForm::Syrup
    } else if lower.contains("injection") {
        MedicineForm::Injection
    } else if lower.contains("drops") {
        MedicineForm::Drops
    } else if lower.contains("cream") {
        MedicineForm::Cream
    } else {
        MedicineForm::Other
    }
}
