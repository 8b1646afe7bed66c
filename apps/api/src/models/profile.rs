use serde::{Deserialize, Serialize};

/// A validated veteran intake record.
///
/// Only `validation::profile::validate_profile` should construct one from
/// untrusted input. Nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    // Service
    pub branch: String,
    pub years_of_service: f64,
    pub rank: String,
    pub military_occupation_code: String,

    // Skills
    pub technical_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub leadership_experience: String,

    // Family
    pub family_status: String,
    pub dependents: u32,
    pub spouse_employment: String,

    // Location
    pub current_location: String,
    pub willing_to_relocate: bool,
    /// Only meaningful when `willing_to_relocate` is true.
    pub preferred_locations: Vec<String>,

    // Goals
    pub career_goals: String,
    pub income_expectations: String,
    pub education_interest: String,
    pub timeline: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Profile;

    /// Army 11B with eight years, relocating, interested in a bachelor's degree.
    pub fn army_infantry() -> Profile {
        Profile {
            branch: "Army".to_string(),
            years_of_service: 8.0,
            rank: "Staff Sergeant (E-6)".to_string(),
            military_occupation_code: "11B".to_string(),
            technical_skills: vec!["Leadership".to_string()],
            certifications: vec!["Combat Lifesaver".to_string()],
            leadership_experience: "Led a 9-soldier squad through two deployments".to_string(),
            family_status: "Married".to_string(),
            dependents: 2,
            spouse_employment: "Part-time".to_string(),
            current_location: "Fort Liberty, NC".to_string(),
            willing_to_relocate: true,
            preferred_locations: vec!["Texas".to_string(), "Colorado".to_string()],
            career_goals: "Stable leadership role with growth potential".to_string(),
            income_expectations: "$70,000 - $90,000".to_string(),
            education_interest: "Bachelor degree in CS".to_string(),
            timeline: "6-12 months".to_string(),
        }
    }
}
