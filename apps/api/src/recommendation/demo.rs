//! Demo Mode: deterministic, template-based recommendations.
//!
//! Needs no external service: selection and customization are pure, so the
//! same profile always yields the same result.

use tracing::debug;

use crate::models::analysis::AnalysisResult;
use crate::models::profile::Profile;
use crate::recommendation::customizer::customize;
use crate::recommendation::selector::select_template;
use crate::validation::result::validate_result;
use crate::validation::ValidationError;

/// Selects a template, customizes it, and checks the output contract.
///
/// An `Err` here means the catalogue or customizer is broken, not the input.
pub fn analyze_demo(profile: &Profile) -> Result<AnalysisResult, ValidationError> {
    let template = select_template(profile);
    debug!(template = template.id, "Selected pathway template");

    let result = customize(profile, template);
    validate_result(&result)?;
    Ok(result)
}
