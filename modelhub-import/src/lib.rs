//! modelhub-import library interface
//!
//! Model import staging: resolves file selections into import jobs, stages
//! them on a shared stage controller and exposes the result over HTTP + SSE.

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod workflow;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use modelhub_common::events::EventBus;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{ExtensionRegistry, FilePicker, FileStat, ImportStageController};
use crate::workflow::ImportWorkflow;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Selection entry points (owns the stage controller handle)
    pub workflow: Arc<ImportWorkflow>,
    /// Optional extension implementations
    pub extensions: Arc<ExtensionRegistry>,
    /// Event bus for SSE broadcasting
    pub event_bus: EventBus,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Wire one controller + workflow around the given collaborators
    pub fn new(
        event_bus: EventBus,
        stat: Arc<dyn FileStat>,
        picker: Arc<dyn FilePicker>,
        extensions: Arc<ExtensionRegistry>,
    ) -> Self {
        let controller = Arc::new(ImportStageController::new(event_bus.clone()));
        let workflow = Arc::new(ImportWorkflow::new(controller, stat, picker));
        Self {
            workflow,
            extensions,
            event_bus,
            startup_time: Utc::now(),
        }
    }

    pub fn controller(&self) -> &Arc<ImportStageController> {
        self.workflow.controller()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::import_routes())
        .merge(api::assistant_routes())
        .merge(api::health_routes())
        .route("/import/events", axum::routing::get(api::import_event_stream))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
