//! Assistant listing endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::models::Assistant;
use crate::services::get_assistants;
use crate::AppState;

/// GET /assistants
///
/// Empty list when no assistant extension is registered.
pub async fn list_assistants(State(state): State<AppState>) -> Json<Vec<Assistant>> {
    Json(get_assistants(&state.extensions).await)
}

pub fn assistant_routes() -> Router<AppState> {
    Router::new().route("/assistants", get(list_assistants))
}
