use serde::{Deserialize, Serialize};

/// Placeholder strings substituted when a field cannot be parsed.
/// Downstream display renders these directly, so none of them is empty.
pub mod sentinels {
    pub const DOCTOR_NAME: &str = "Doctor information not found";
    pub const SPECIALIZATION: &str = "Not specified";
    pub const HOSPITAL: &str = "Hospital/Clinic not specified";
    pub const LICENSE_NUMBER: &str = "Not available";
    pub const PHONE_NUMBER: &str = "Not available";
}

/// Prescriber identity extracted from a prescription.
///
/// Every field is sentinel-or-real; an empty string here is a bug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorInfo {
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub license_number: String,
    pub phone_number: String,
}

impl Default for DoctorInfo {
    fn default() -> Self {
        Self {
            name: sentinels::DOCTOR_NAME.to_string(),
            specialization: sentinels::SPECIALIZATION.to_string(),
            hospital: sentinels::HOSPITAL.to_string(),
            license_number: sentinels::LICENSE_NUMBER.to_string(),
            phone_number: sentinels::PHONE_NUMBER.to_string(),
        }
    }
}
