//! Notes Routes
//!
//! - GET /api/v1/customers/:name/notes - Read notes
//! - PUT /api/v1/customers/:name/notes - Save notes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{NotesResponse, SaveNotesRequest, SaveNotesResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/customers/:name/notes
///
/// Never fails; unknown names read as empty.
pub async fn get_notes(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<NotesResponse> {
    let text = state.session.read().await.note(&name).to_string();
    Json(NotesResponse {
        customer: name,
        text,
    })
}

/// PUT /api/v1/customers/:name/notes
///
/// Save action for the notes text area.
pub async fn save_notes(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: Result<Json<SaveNotesRequest>, JsonRejection>,
) -> ApiResult<Json<SaveNotesResponse>> {
    let Json(req) = payload?;
    state.session.write().await.save_notes(&name, req.text)?;

    Ok(Json(SaveNotesResponse {
        status: "ok".to_string(),
        message: format!("Notes saved for {}", name),
        customer: name,
        saved_at: Utc::now().timestamp_millis(),
    }))
}
