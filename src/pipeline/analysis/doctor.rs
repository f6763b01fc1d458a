use std::sync::LazyLock;

use regex::Regex;

use crate::models::{sentinels, DoctorInfo};

static DOCTOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Dr\.?\s+([A-Za-z\s]+)").unwrap());

static HOSPITAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\w+\s+(?:Clinic|Hospital|Care|Medical|Center))").unwrap());

static SPECIALIZATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)MBBS|M\.D|M\.S|MD|MS").unwrap());

// Short form first: a 10-digit number yields its first seven digits,
// matching the alternation order the heuristic was tuned with.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-.\s]?\d{4}|\d{10}").unwrap());

static LICENSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:No|Reg|License)[:.\s]+(\d+)").unwrap());

/// Extract prescriber identity from raw text.
///
/// Pure function; unmatched fields come back as their display sentinels,
/// never as empty strings.
pub fn extract_doctor_info(text: &str) -> DoctorInfo {
    let name = DOCTOR_NAME
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|name| !name.is_empty());

    let hospital = HOSPITAL.captures(text).map(|c| c[1].trim().to_string());

    let specialization = {
        let joined = SPECIALIZATION
            .find_iter(text)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        (!joined.is_empty()).then_some(joined)
    };

    let phone = PHONE.find(text).map(|m| m.as_str().to_string());

    let license = LICENSE.captures(text).map(|c| c[1].to_string());

    DoctorInfo {
        name: name.unwrap_or_else(|| sentinels::DOCTOR_NAME.to_string()),
        specialization: specialization.unwrap_or_else(|| sentinels::SPECIALIZATION.to_string()),
        hospital: hospital.unwrap_or_else(|| sentinels::HOSPITAL.to_string()),
        license_number: license.unwrap_or_else(|| sentinels::LICENSE_NUMBER.to_string()),
        phone_number: phone.unwrap_or_else(|| sentinels::PHONE_NUMBER.to_string()),
    }
}
