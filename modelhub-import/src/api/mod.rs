//! HTTP API handlers for modelhub-import
//!
//! REST endpoints for the selection entry points plus an SSE stream of
//! stage events.

pub mod assistants;
pub mod health;
pub mod import_selection;
pub mod sse;

pub use assistants::assistant_routes;
pub use health::health_routes;
pub use import_selection::import_routes;
pub use sse::import_event_stream;

use crate::error::ApiError;

/// Fallback for unknown routes
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
