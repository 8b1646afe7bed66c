//! Remote Analysis: delegates generation to the Anthropic API.
//!
//! One outbound call per invocation, no retries at this layer (the LLM client
//! owns transport retries). Anything short of a fully conforming payload is
//! an error; partial results are never returned.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::prompts::REALISM_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError, ToolDefinition};
use crate::models::analysis::AnalysisResult;
use crate::models::profile::Profile;
use crate::recommendation::prompts::{analysis_tool, ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::recommendation::provider::RemoteAnalyzer;
use crate::validation::result::parse_result;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum RemoteAnalysisError {
    #[error("remote analysis call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("remote analysis timed out after {0:?}")]
    Timeout(Duration),

    #[error("remote response does not match the analysis schema: {0}")]
    Schema(#[from] ValidationError),

    /// The failure carried no usable error value (e.g. the call panicked).
    #[error("Unknown error")]
    Unknown,
}

impl RemoteAnalysisError {
    /// Stable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteAnalysisError::Llm(e) => e.kind(),
            RemoteAnalysisError::Timeout(_) => "Timeout",
            RemoteAnalysisError::Schema(_) => "Schema",
            RemoteAnalysisError::Unknown => "Unknown",
        }
    }
}

/// Remote analyzer backed by the shared `LlmClient`.
pub struct AnthropicAnalyzer {
    llm: LlmClient,
    tool: ToolDefinition,
}

impl AnthropicAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            tool: analysis_tool(),
        }
    }
}

#[async_trait]
impl RemoteAnalyzer for AnthropicAnalyzer {
    async fn analyze(&self, profile: &Profile) -> Result<AnalysisResult, RemoteAnalysisError> {
        let prompt = build_analysis_prompt(profile);
        let payload = self
            .llm
            .call_tool(&prompt, ANALYSIS_SYSTEM, &self.tool)
            .await?;
        Ok(parse_result(payload)?)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

/// Fills the analysis template with every profile field.
pub fn build_analysis_prompt(profile: &Profile) -> String {
    fill_placeholders(ANALYSIS_PROMPT_TEMPLATE, |name| {
        let value = match name {
            "realism_instruction" => REALISM_INSTRUCTION.to_string(),
            "branch" => profile.branch.clone(),
            "years_of_service" => profile.years_of_service.to_string(),
            "rank" => profile.rank.clone(),
            "military_occupation_code" => profile.military_occupation_code.clone(),
            "technical_skills" => list_or_none(&profile.technical_skills),
            "certifications" => list_or_none(&profile.certifications),
            "leadership_experience" => profile.leadership_experience.clone(),
            "family_status" => profile.family_status.clone(),
            "dependents" => profile.dependents.to_string(),
            "spouse_employment" => profile.spouse_employment.clone(),
            "current_location" => profile.current_location.clone(),
            "willing_to_relocate" => yes_no(profile.willing_to_relocate).to_string(),
            "preferred_locations" => preferred_locations(profile),
            "career_goals" => profile.career_goals.clone(),
            "income_expectations" => profile.income_expectations.clone(),
            "education_interest" => profile.education_interest.clone(),
            "timeline" => profile.timeline.clone(),
            _ => return None,
        };
        Some(value)
    })
}

/// Replaces each known `{name}` in one left-to-right scan. Substituted text
/// is never rescanned, so braces inside user values come through verbatim.
/// Unknown names are left as written.
fn fill_placeholders<F>(template: &str, value_of: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let filled = after
            .find('}')
            .and_then(|end| value_of(&after[..end]).map(|value| (end, value)));
        match filled {
            Some((end, value)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn preferred_locations(profile: &Profile) -> String {
    if !profile.willing_to_relocate {
        "Not applicable (not willing to relocate)".to_string()
    } else if profile.preferred_locations.is_empty() {
        "Open to any location".to_string()
    } else {
        profile.preferred_locations.join(", ")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None listed".to_string()
    } else {
        items.join(", ")
    }
}
