//! AnalysisResult shape validation.
//!
//! Applied to the output of both providers before it leaves the core, so a
//! malformed generative payload can never reach a caller.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::models::analysis::{AnalysisResult, PathwayType};
use crate::validation::{ErrorCollector, ValidationError};

pub const REQUIRED_PATHWAY_COUNT: usize = 3;

const PATHWAY_KEYS: &[&str] = &[
    "type",
    "title",
    "description",
    "incomeTrajectory",
    "roadmap",
    "requiredCredentials",
    "familyImpact",
    "whyThisPath",
];
const TRAJECTORY_KEYS: &[&str] = &["year1", "year3", "year5"];
const FAMILY_IMPACT_KEYS: &[&str] = &["timeCommitment", "flexibility", "stability", "notes"];

/// Checks the semantic invariants of an already-typed result:
/// exactly three pathways, one per strategy tag, no blank required text and
/// a non-empty roadmap. `analysis_schema` declares the same rules to the model.
pub fn validate_result(result: &AnalysisResult) -> Result<(), ValidationError> {
    let mut errors = ErrorCollector::default();

    if result.summary.trim().is_empty() {
        errors.push("summary", "must not be empty");
    }

    if result.pathways.len() != REQUIRED_PATHWAY_COUNT {
        errors.push(
            "pathways",
            format!(
                "must contain exactly {REQUIRED_PATHWAY_COUNT} entries, found {}",
                result.pathways.len()
            ),
        );
    }

    let mut seen: HashSet<PathwayType> = HashSet::new();
    for (i, pathway) in result.pathways.iter().enumerate() {
        let at = |field: &str| format!("pathways[{i}].{field}");

        if !seen.insert(pathway.pathway_type) {
            errors.push(at("type"), format!("duplicate pathway type '{}'", pathway.pathway_type));
        }

        for (field, value) in [
            ("title", &pathway.title),
            ("description", &pathway.description),
            ("whyThisPath", &pathway.why_this_path),
            ("incomeTrajectory.year1", &pathway.income_trajectory.year1),
            ("incomeTrajectory.year3", &pathway.income_trajectory.year3),
            ("incomeTrajectory.year5", &pathway.income_trajectory.year5),
            ("familyImpact.timeCommitment", &pathway.family_impact.time_commitment),
            ("familyImpact.flexibility", &pathway.family_impact.flexibility),
            ("familyImpact.stability", &pathway.family_impact.stability),
            ("familyImpact.notes", &pathway.family_impact.notes),
        ] {
            if value.trim().is_empty() {
                errors.push(at(field), "must not be empty");
            }
        }

        if pathway.roadmap.is_empty() {
            errors.push(at("roadmap"), "must contain at least one phase");
        }
        for (j, phase) in pathway.roadmap.iter().enumerate() {
            if phase.phase.trim().is_empty() {
                errors.push(at(&format!("roadmap[{j}].phase")), "must not be empty");
            }
        }
    }

    for expected in PathwayType::ALL {
        if !seen.contains(&expected) {
            errors.push("pathways", format!("missing pathway type '{expected}'"));
        }
    }

    errors.finish(())
}

/// Parses an untrusted JSON payload into a validated `AnalysisResult`.
///
/// Missing nested objects are reported by path before deserialisation is
/// attempted, so a payload with several holes yields one error per hole.
pub fn parse_result(payload: Value) -> Result<AnalysisResult, ValidationError> {
    check_structure(&payload)?;

    let result: AnalysisResult = serde_json::from_value(payload)
        .map_err(|e| ValidationError::single("result", e.to_string()))?;

    validate_result(&result)?;
    Ok(result)
}

fn check_structure(payload: &Value) -> Result<(), ValidationError> {
    let Some(root) = payload.as_object() else {
        return Err(ValidationError::single("result", "must be a JSON object"));
    };

    let mut errors = ErrorCollector::default();

    match root.get("summary") {
        Some(Value::String(_)) => {}
        Some(_) => errors.push("summary", "must be a string"),
        None => errors.push("summary", "is required"),
    }

    match root.get("pathways") {
        Some(Value::Array(items)) => {
            if items.len() != REQUIRED_PATHWAY_COUNT {
                errors.push(
                    "pathways",
                    format!(
                        "must contain exactly {REQUIRED_PATHWAY_COUNT} entries, found {}",
                        items.len()
                    ),
                );
            }
            for (i, item) in items.iter().enumerate() {
                let path = format!("pathways[{i}]");
                let Some(pathway) = item.as_object() else {
                    errors.push(path, "must be an object");
                    continue;
                };
                require_keys(pathway, &path, PATHWAY_KEYS, &mut errors);
                require_object(pathway, &path, "incomeTrajectory", TRAJECTORY_KEYS, &mut errors);
                require_object(pathway, &path, "familyImpact", FAMILY_IMPACT_KEYS, &mut errors);
                for list in ["roadmap", "requiredCredentials"] {
                    if let Some(v) = pathway.get(list) {
                        if !v.is_array() {
                            errors.push(format!("{path}.{list}"), "must be an array");
                        }
                    }
                }
            }
        }
        Some(_) => errors.push("pathways", "must be an array"),
        None => errors.push("pathways", "is required"),
    }

    errors.finish(())
}

fn require_keys(obj: &Map<String, Value>, path: &str, keys: &[&str], errors: &mut ErrorCollector) {
    for key in keys {
        if matches!(obj.get(*key), None | Some(Value::Null)) {
            errors.push(format!("{path}.{key}"), "is required");
        }
    }
}

fn require_object(
    parent: &Map<String, Value>,
    path: &str,
    key: &str,
    keys: &[&str],
    errors: &mut ErrorCollector,
) {
    match parent.get(key) {
        Some(Value::Object(obj)) => require_keys(obj, &format!("{path}.{key}"), keys, errors),
        Some(Value::Null) | None => {}
        Some(_) => errors.push(format!("{path}.{key}"), "must be an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pathway_json(kind: &str) -> Value {
        json!({
            "type": kind,
            "title": format!("{kind} title"),
            "description": "A pathway",
            "incomeTrajectory": {"year1": "$50,000 - $60,000", "year3": "$70,000", "year5": "$90,000"},
            "roadmap": [{"phase": "Prepare", "duration": "1-3 months", "steps": ["Apply"]}],
            "requiredCredentials": [{"name": "CDL", "timeline": "2 months", "cost": "$3,000"}],
            "familyImpact": {
                "timeCommitment": "40 hrs/week",
                "flexibility": "Moderate",
                "stability": "High",
                "notes": "Predictable schedule"
            },
            "whyThisPath": "Because"
        })
    }

    fn result_json() -> Value {
        json!({
            "summary": "You have strong skills.",
            "pathways": [
                pathway_json("fast-income"),
                pathway_json("balanced"),
                pathway_json("max-upside")
            ]
        })
    }

    #[test]
    fn test_well_formed_payload_parses() {
        let result = parse_result(result_json()).unwrap();
        assert_eq!(result.pathways.len(), 3);
        assert_eq!(result.summary, "You have strong skills.");
    }

    #[test]
    fn test_missing_summary_is_rejected() {
        let mut payload = result_json();
        payload.as_object_mut().unwrap().remove("summary");
        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("summary"));
    }

    #[test]
    fn test_wrong_pathway_count_is_rejected() {
        let mut payload = result_json();
        payload["pathways"].as_array_mut().unwrap().pop();
        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("pathways"));
    }

    #[test]
    fn test_missing_nested_fields_are_all_reported() {
        let mut payload = result_json();
        payload["pathways"][0]
            .as_object_mut()
            .unwrap()
            .remove("familyImpact");
        payload["pathways"][2]["incomeTrajectory"]
            .as_object_mut()
            .unwrap()
            .remove("year5");
        payload["pathways"][1]
            .as_object_mut()
            .unwrap()
            .remove("whyThisPath");

        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("pathways[0].familyImpact"));
        assert!(err.has_field("pathways[1].whyThisPath"));
        assert!(err.has_field("pathways[2].incomeTrajectory.year5"));
    }

    #[test]
    fn test_duplicate_type_is_rejected() {
        let mut payload = result_json();
        payload["pathways"][2]["type"] = json!("balanced");
        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("pathways[2].type"));
        assert!(err
            .fields
            .iter()
            .any(|f| f.message.contains("missing pathway type 'max-upside'")));
    }

    #[test]
    fn test_unknown_type_tag_is_rejected() {
        let mut payload = result_json();
        payload["pathways"][0]["type"] = json!("get-rich-quick");
        assert!(parse_result(payload).is_err());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut payload = result_json();
        payload["pathways"][1]["title"] = json!("  ");
        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("pathways[1].title"));
    }

    #[test]
    fn test_empty_credentials_are_allowed() {
        let mut payload = result_json();
        payload["pathways"][0]["requiredCredentials"] = json!([]);
        assert!(parse_result(payload).is_ok());
    }

    #[test]
    fn test_blank_roadmap_phase_and_summary_are_rejected() {
        let mut payload = result_json();
        payload["summary"] = json!("\n\t ");
        payload["pathways"][2]["roadmap"][0]["phase"] = json!("");
        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("summary"));
        assert!(err.has_field("pathways[2].roadmap[0].phase"));
    }

    #[test]
    fn test_empty_roadmap_is_rejected() {
        let mut payload = result_json();
        payload["pathways"][0]["roadmap"] = json!([]);
        let err = parse_result(payload).unwrap_err();
        assert!(err.has_field("pathways[0].roadmap"));
    }
}
