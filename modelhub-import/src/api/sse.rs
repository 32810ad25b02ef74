//! Server-Sent Events (SSE) for import stage streaming

use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// GET /import/events - SSE event stream for the import workflow
///
/// Sends the current snapshot first, then streams:
/// - StageChanged
/// - SelectionStaged
pub async fn import_event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected to import events");

    // Subscribe before taking the snapshot so no event falls in between
    let mut rx = state.event_bus.subscribe();
    let snapshot = state.controller().snapshot();

    let stream = async_stream::stream! {
        match serde_json::to_string(&snapshot) {
            Ok(json) => yield Ok(Event::default().event("InitialState").data(json)),
            Err(e) => warn!("SSE: Failed to serialize initial state: {}", e),
        }

        loop {
            match rx.recv().await {
                Ok(event) => {
                    let event_type = event.event_type();
                    match serde_json::to_string(&event) {
                        Ok(event_json) => {
                            debug!("SSE: Broadcasting import event: {}", event_type);
                            yield Ok(Event::default().event(event_type).data(event_json));
                        }
                        Err(e) => {
                            warn!("SSE: Failed to serialize event {}: {}", event_type, e);
                        }
                    }
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!(missed, "SSE: Client lagged behind, events dropped");
                }
                Err(RecvError::Closed) => {
                    info!("SSE: Event bus closed, ending stream");
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("heartbeat"),
    )
}
