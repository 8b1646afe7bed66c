//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;
use crate::validation::profile::validate_profile;

/// POST /api/v1/analyze
///
/// Validates the submitted profile and returns three career pathways.
/// Whether the remote analyzer or the demo path produced them is not
/// visible in the response.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::MalformedBody(rejection.body_text())
        }
    })?;

    let profile = validate_profile(&body)?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        mode = state.recommender.mode().as_str(),
        branch = %profile.branch,
        "Generating career pathways"
    );

    let recommendation = state.recommender.recommend(&profile).await?;

    info!(
        %request_id,
        pathways = recommendation.result.pathways.len(),
        "Career pathways generated"
    );

    Ok(Json(recommendation.result))
}
