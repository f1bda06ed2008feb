//! Session Routes
//!
//! - POST /api/v1/session/reset - Re-run session initialization

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ResetResponse;
use crate::api::state::AppState;

/// POST /api/v1/session/reset
///
/// Reseeds only when the roster has drifted; edits otherwise survive.
pub async fn reset_session(State(state): State<Arc<AppState>>) -> Json<ResetResponse> {
    let mut session = state.session.write().await;
    let reseeded = session.initialize();

    tracing::info!(reseeded, "Session re-initialized");

    Json(ResetResponse {
        reseeded,
        customers: session.customers().len(),
    })
}
