/// Heuristic quality signal for extracted prescription text.
///
/// Base 0.5, plus 0.1 for each marker of prescription-like content, capped
/// at 1.0. This is a display hint, not a statistical estimate.
pub fn score_confidence(text: &str) -> f32 {
    let lower = text.to_lowercase();
    let mut confidence = 0.5_f32;

    if lower.contains("dr.") {
        confidence += 0.1;
    }
    if lower.contains("mg") {
        confidence += 0.1;
    }
    if lower.contains("tablet") || lower.contains("capsule") {
        confidence += 0.1;
    }
    if lower.contains("daily") {
        confidence += 0.1;
    }
    if text.len() > 200 {
        confidence += 0.1;
    }

    confidence.min(1.0)
}
