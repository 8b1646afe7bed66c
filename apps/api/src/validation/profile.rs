//! Profile Validator: turns an untrusted JSON submission into a `Profile`.
//!
//! Rules:
//! - required string fields must be present and not blank
//! - `yearsOfService` must be a finite number ≥ 0
//! - `dependents` must be an integer ≥ 0
//! - `willingToRelocate` must be a JSON boolean (no "true"/1 coercion)
//! - list fields default to empty when absent or null, but must be arrays of
//!   strings when present
//!
//! Values are kept as submitted. Template selection hashes the raw strings,
//! so normalising them here would change which template a profile maps to.

use serde_json::{Map, Value};

use crate::models::profile::Profile;
use crate::validation::{ErrorCollector, ValidationError};

/// Validates a raw submission. Pure; reports every invalid field at once.
pub fn validate_profile(input: &Value) -> Result<Profile, ValidationError> {
    let Some(obj) = input.as_object() else {
        return Err(ValidationError::single(
            "profile",
            "must be a JSON object",
        ));
    };

    let mut errors = ErrorCollector::default();

    let branch = required_string(obj, "branch", &mut errors);
    let years_of_service = non_negative_number(obj, "yearsOfService", &mut errors);
    let rank = required_string(obj, "rank", &mut errors);
    let military_occupation_code = required_string(obj, "militaryOccupationCode", &mut errors);

    let technical_skills = string_list(obj, "technicalSkills", &mut errors);
    let certifications = string_list(obj, "certifications", &mut errors);
    let leadership_experience = required_string(obj, "leadershipExperience", &mut errors);

    let family_status = required_string(obj, "familyStatus", &mut errors);
    let dependents = non_negative_integer(obj, "dependents", &mut errors);
    let spouse_employment = required_string(obj, "spouseEmployment", &mut errors);

    let current_location = required_string(obj, "currentLocation", &mut errors);
    let willing_to_relocate = strict_bool(obj, "willingToRelocate", &mut errors);
    let preferred_locations = string_list(obj, "preferredLocations", &mut errors);

    let career_goals = required_string(obj, "careerGoals", &mut errors);
    let income_expectations = required_string(obj, "incomeExpectations", &mut errors);
    let education_interest = required_string(obj, "educationInterest", &mut errors);
    let timeline = required_string(obj, "timeline", &mut errors);

    if !errors.is_empty() {
        return Err(errors.into_error());
    }

    Ok(Profile {
        branch,
        years_of_service,
        rank,
        military_occupation_code,
        technical_skills,
        certifications,
        leadership_experience,
        family_status,
        dependents,
        spouse_employment,
        current_location,
        willing_to_relocate,
        preferred_locations,
        career_goals,
        income_expectations,
        education_interest,
        timeline,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Field readers. Each returns a placeholder on error; the collector decides.
// ────────────────────────────────────────────────────────────────────────────

fn required_string(obj: &Map<String, Value>, key: &str, errors: &mut ErrorCollector) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => {
            errors.push(key, "is required");
            String::new()
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(key, "must not be empty");
            String::new()
        }
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push(key, "must be a string");
            String::new()
        }
    }
}

fn non_negative_number(obj: &Map<String, Value>, key: &str, errors: &mut ErrorCollector) -> f64 {
    match obj.get(key) {
        None | Some(Value::Null) => {
            errors.push(key, "is required");
            0.0
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                errors.push(key, "must be a number greater than or equal to 0");
                0.0
            }
        },
        Some(_) => {
            errors.push(key, "must be a number");
            0.0
        }
    }
}

fn non_negative_integer(obj: &Map<String, Value>, key: &str, errors: &mut ErrorCollector) -> u32 {
    match obj.get(key) {
        None | Some(Value::Null) => {
            errors.push(key, "is required");
            0
        }
        Some(Value::Number(n)) => match n.as_u64().and_then(|v| u32::try_from(v).ok()) {
            Some(v) => v,
            None => {
                errors.push(key, "must be a non-negative integer");
                0
            }
        },
        Some(_) => {
            errors.push(key, "must be a number");
            0
        }
    }
}

fn strict_bool(obj: &Map<String, Value>, key: &str, errors: &mut ErrorCollector) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        None | Some(Value::Null) => {
            errors.push(key, "is required");
            false
        }
        Some(_) => {
            errors.push(key, "must be a boolean");
            false
        }
    }
}

fn string_list(obj: &Map<String, Value>, key: &str, errors: &mut ErrorCollector) -> Vec<String> {
    match obj.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => errors.push(format!("{key}[{i}]"), "must be a string"),
                }
            }
            out
        }
        Some(_) => {
            errors.push(key, "must be an array of strings");
            Vec::new()
        }
    }
}
