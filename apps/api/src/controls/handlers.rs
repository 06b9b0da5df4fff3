use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::control::ControlRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ControlListResponse {
    pub total_controls: usize,
    pub controls: Vec<ControlRecord>,
}

/// GET /api/v1/controls
///
/// Returns the Annex A catalogue loaded from the reference CSV.
pub async fn handle_list_controls(State(state): State<AppState>) -> Json<ControlListResponse> {
    Json(ControlListResponse {
        total_controls: state.controls.len(),
        controls: state.controls.all().to_vec(),
    })
}
