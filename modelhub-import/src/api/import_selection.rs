//! Import selection API handlers
//!
//! GET /import/state, POST /import/open, POST /import/select,
//! POST /import/dialog, POST /import/drop, POST /import/dismiss,
//! POST /import/reset, POST /import/stage

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    error::{ApiError, ApiResult},
    models::{DroppedFile, ImportStage},
    services::{ImportSnapshot, StageTransition},
    workflow::SelectionOutcome,
    AppState,
};

/// POST /import/select request (result of a UI-side file dialog)
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// `null` or `[]` when the user cancelled
    #[serde(default)]
    pub paths: Option<Vec<PathBuf>>,
}

/// POST /import/drop request
#[derive(Debug, Deserialize)]
pub struct DropRequest {
    #[serde(default)]
    pub files: Vec<DroppedFile>,
}

/// POST /import/stage request
#[derive(Debug, Deserialize)]
pub struct StageRequest {
    pub stage: ImportStage,
}

/// Response for selection endpoints
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub outcome: SelectionOutcome,
    pub stage: ImportStage,
}

/// Response for stage transition endpoints
#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub stage: ImportStage,
    /// Transition performed, `null` when the request was a no-op
    pub transition: Option<StageTransition>,
}

fn stage_response(state: &AppState, transition: Option<StageTransition>) -> Json<StageResponse> {
    Json(StageResponse {
        stage: state.controller().stage(),
        transition,
    })
}

fn selection_response(state: &AppState, outcome: SelectionOutcome) -> Json<SelectionResponse> {
    Json(SelectionResponse {
        outcome,
        stage: state.controller().stage(),
    })
}

/// GET /import/state
pub async fn get_state(State(state): State<AppState>) -> Json<ImportSnapshot> {
    Json(state.controller().snapshot())
}

/// POST /import/open
pub async fn open_import(State(state): State<AppState>) -> Json<StageResponse> {
    let transition = state.controller().open();
    stage_response(&state, transition)
}

/// POST /import/select
///
/// Relative paths are skipped per entry like any other unresolvable path.
pub async fn select_files(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Json<SelectionResponse> {
    let outcome = state.workflow.stage_dialog_paths(request.paths).await;
    selection_response(&state, outcome)
}

/// POST /import/dialog
///
/// Opens the host file picker (cancelled on headless builds).
pub async fn select_via_dialog(State(state): State<AppState>) -> Json<SelectionResponse> {
    let outcome = state.workflow.select_via_dialog().await;
    selection_response(&state, outcome)
}

/// POST /import/drop
pub async fn drop_files(
    State(state): State<AppState>,
    Json(request): Json<DropRequest>,
) -> Json<SelectionResponse> {
    let outcome = state.workflow.drop_files(request.files);
    selection_response(&state, outcome)
}

/// POST /import/dismiss
pub async fn dismiss_import(State(state): State<AppState>) -> Json<StageResponse> {
    let transition = state.controller().dismiss();
    stage_response(&state, transition)
}

/// POST /import/reset
pub async fn reset_import(State(state): State<AppState>) -> Json<StageResponse> {
    let transition = state.controller().reset();
    stage_response(&state, transition)
}

/// POST /import/stage
///
/// Used by the later import screens to move past `MODEL_SELECTED`.
/// Selection stages are rejected; use open/dismiss/reset or a selection.
pub async fn set_stage(
    State(state): State<AppState>,
    Json(request): Json<StageRequest>,
) -> ApiResult<Json<StageResponse>> {
    if !request.stage.is_past_selection() {
        return Err(ApiError::BadRequest(format!(
            "Stage {} is not reachable through /import/stage",
            request.stage
        )));
    }

    let transition = state.controller().transition_to(request.stage);
    Ok(stage_response(&state, transition))
}

/// Build import selection routes
pub fn import_routes() -> Router<AppState> {
    Router::new()
        .route("/import/state", get(get_state))
        .route("/import/open", post(open_import))
        .route("/import/select", post(select_files))
        .route("/import/dialog", post(select_via_dialog))
        .route("/import/drop", post(drop_files))
        .route("/import/dismiss", post(dismiss_import))
        .route("/import/reset", post(reset_import))
        .route("/import/stage", post(set_stage))
}
