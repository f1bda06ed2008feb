//! Health Score Routes
//!
//! - GET /api/v1/health-score/sliders - Slider definitions
//! - POST /api/v1/health-score/compute - Compute a score from slider readings
//! - POST /api/v1/customers/:name/health-score/preview - Stored vs proposed score
//! - PUT /api/v1/customers/:name/health-score - Save a new score

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{
    ComputeResponse, PreviewResponse, SaveScoreResponse, ScoreRequest, SliderListResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::roster::format_score;
use crate::scoring::{sliders, HealthInputs};

/// GET /api/v1/health-score/sliders
pub async fn list_sliders() -> Json<SliderListResponse> {
    Json(SliderListResponse {
        sliders: sliders().to_vec(),
    })
}

/// POST /api/v1/health-score/compute
///
/// Stateless score computation.
pub async fn compute_score(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<ComputeResponse>> {
    let Json(req) = payload?;
    let inputs = validate_inputs(req)?;
    let score = inputs.score();

    Ok(Json(ComputeResponse {
        inputs,
        score,
        score_display: format_score(score),
    }))
}

/// POST /api/v1/customers/:name/health-score/preview
///
/// Show what the sliders would change without saving.
pub async fn preview_score(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<PreviewResponse>> {
    let Json(req) = payload?;
    let inputs = validate_inputs(req)?;
    let session = state.session.read().await;
    let proposal = session.propose_health_score(&name, &inputs)?;

    Ok(Json(PreviewResponse {
        customer: name,
        current: proposal.current,
        current_display: format_score(proposal.current),
        proposed: proposal.proposed,
        proposed_display: format_score(proposal.proposed),
    }))
}

/// PUT /api/v1/customers/:name/health-score
///
/// Save action: compute from the sliders and store the result.
pub async fn save_score(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<SaveScoreResponse>> {
    let Json(req) = payload?;
    let inputs = validate_inputs(req)?;
    let score = state.session.write().await.save_health_score(&name, &inputs)?;

    Ok(Json(SaveScoreResponse {
        status: "ok".to_string(),
        message: format!("Saved new health score of {:.1} for {}", score, name),
        customer: name,
        health_score: score,
        saved_at: Utc::now().timestamp_millis(),
    }))
}

/// Reject readings outside their slider ranges
fn validate_inputs(req: ScoreRequest) -> ApiResult<HealthInputs> {
    let inputs = HealthInputs::from(req);
    let bad = inputs.out_of_range();

    if bad.is_empty() {
        return Ok(inputs);
    }

    let detail: Vec<String> = bad
        .iter()
        .map(|s| format!("{} must be between {:.1} and {:.1}", s.key, s.min, s.max))
        .collect();
    Err(ApiError::Validation(detail.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_inputs_accepts_bounds() {
        let req = ScoreRequest {
            usage: 1.0,
            ticket_load: 10.0,
            nps: 10.0,
        };
        assert!(validate_inputs(req).is_ok());
    }

    #[test]
    fn test_validate_inputs_rejects_out_of_range() {
        let req = ScoreRequest {
            usage: 5.0,
            ticket_load: -1.0,
            nps: 7.0,
        };
        let err = validate_inputs(req).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: ticket_load must be between 0.0 and 10.0"
        );
    }

    #[test]
    fn test_validate_inputs_rejects_nan() {
        let req = ScoreRequest {
            usage: f64::NAN,
            ticket_load: 2.0,
            nps: 7.0,
        };
        assert!(validate_inputs(req).is_err());
    }
}
