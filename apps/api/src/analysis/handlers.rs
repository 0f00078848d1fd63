//! Axum route handler for the analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::models::{AnalysisResult, AnalyzeRequest, MISSING_INPUT_MESSAGE};
use crate::analysis::pipeline::analyze_skill_gap;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze
///
/// Compares the skills a live listing for `jobRole` asks for with the skills
/// mentioned in `userText`, and suggests a learning link per missing skill.
/// A body that cannot be read as the request shape is treated like missing
/// fields.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        debug!("Rejected analyze body: {rejection}");
        AppError::Validation(MISSING_INPUT_MESSAGE.to_string())
    })?;
    let request = body.validate()?;

    let span = info_span!("analyze", request_id = %Uuid::new_v4(), job_role = %request.job_role);
    let result = analyze_skill_gap(
        &state.vocabulary,
        state.job_search.as_ref(),
        &state.enricher,
        state.job_search_failure_policy,
        &request,
    )
    .instrument(span)
    .await?;

    Ok(Json(result))
}
