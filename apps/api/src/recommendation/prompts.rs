// LLM prompt constants for remote career analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::{json, Value};

use crate::llm_client::ToolDefinition;

pub const ANALYSIS_TOOL_NAME: &str = "record_career_analysis";

/// System prompt for career analysis.
pub const ANALYSIS_SYSTEM: &str = "You are an experienced military-to-civilian career transition \
    counselor. You translate military experience into concrete civilian career pathways, \
    weighing family circumstances, location, and long-term goals. \
    You MUST respond by calling the record_career_analysis tool exactly once.";

/// Career analysis prompt template.
/// Replace: {realism_instruction} and every {profile field} placeholder.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"{realism_instruction}

Analyze this veteran's profile and recommend exactly THREE career pathways, one of each type:
- "fast-income": the quickest route to a solid civilian paycheck
- "balanced": a sustainable mix of income growth and family stability
- "max-upside": the highest long-term earning potential, accepting more upfront investment

SERVICE
- Branch: {branch}
- Years of service: {years_of_service}
- Rank: {rank}
- Military occupation code: {military_occupation_code}

SKILLS
- Technical skills: {technical_skills}
- Certifications: {certifications}
- Leadership experience: {leadership_experience}

FAMILY
- Family status: {family_status}
- Dependents: {dependents}
- Spouse employment: {spouse_employment}

LOCATION
- Current location: {current_location}
- Willing to relocate: {willing_to_relocate}
- Preferred locations: {preferred_locations}

GOALS
- Career goals: {career_goals}
- Income expectations: {income_expectations}
- Education interest: {education_interest}
- Timeline: {timeline}

HARD RULES:
1. Return exactly 3 pathways with types "fast-income", "balanced", and "max-upside", each used once
2. incomeTrajectory.year1, year3, and year5 are salary ranges formatted as strings
3. Every pathway needs a roadmap of ordered phases, each with concrete steps
4. familyImpact must speak to this veteran's family situation specifically
5. summary is one paragraph connecting their service to the recommendations"#;

pub fn analysis_tool() -> ToolDefinition {
    ToolDefinition {
        name: ANALYSIS_TOOL_NAME,
        description: "Record the career pathway analysis for the veteran.",
        input_schema: analysis_schema(),
    }
}

/// JSON Schema mirroring `AnalysisResult`.
///
/// Declares exactly what `validate_result` enforces: every string must hold a
/// non-whitespace character and every roadmap needs at least one phase.
pub fn analysis_schema() -> Value {
    let string = json!({"type": "string", "minLength": 1, "pattern": "\\S"});
    json!({
        "type": "object",
        "required": ["summary", "pathways"],
        "properties": {
            "summary": string,
            "pathways": {
                "type": "array",
                "minItems": 3,
                "maxItems": 3,
                "items": {
                    "type": "object",
                    "required": [
                        "type", "title", "description", "incomeTrajectory", "roadmap",
                        "requiredCredentials", "familyImpact", "whyThisPath"
                    ],
                    "properties": {
                        "type": {"type": "string", "enum": ["fast-income", "balanced", "max-upside"]},
                        "title": string,
                        "description": string,
                        "incomeTrajectory": {
                            "type": "object",
                            "required": ["year1", "year3", "year5"],
                            "properties": {"year1": string, "year3": string, "year5": string}
                        },
                        "roadmap": {
                            "type": "array",
                            "minItems": 1,
                            "items": {
                                "type": "object",
                                "required": ["phase", "duration", "steps"],
                                "properties": {
                                    "phase": string,
                                    "duration": string,
                                    "steps": {"type": "array", "items": string}
                                }
                            }
                        },
                        "requiredCredentials": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["name", "timeline", "cost"],
                                "properties": {"name": string, "timeline": string, "cost": string}
                            }
                        },
                        "familyImpact": {
                            "type": "object",
                            "required": ["timeCommitment", "flexibility", "stability", "notes"],
                            "properties": {
                                "timeCommitment": string,
                                "flexibility": string,
                                "stability": string,
                                "notes": string
                            }
                        },
                        "whyThisPath": string
                    }
                }
            }
        }
    })
}
