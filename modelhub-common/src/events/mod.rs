//! Event types for the modelhub event system
//!
//! Provides shared event definitions and the EventBus.

mod import_types;

pub use import_types::ImportStage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Import workflow events
///
/// Events are broadcast via EventBus and can be serialized for SSE transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportEvent {
    /// Import stage changed
    ///
    /// Triggers:
    /// - SSE: Open/close the import surface, switch screens
    StageChanged {
        /// Stage before the transition
        old_stage: ImportStage,
        /// Stage after the transition
        new_stage: ImportStage,
        /// When the stage changed
        timestamp: DateTime<Utc>,
    },

    /// A selection replaced the staged job list
    ///
    /// Triggers:
    /// - SSE: Render the staged jobs
    /// - Execution collaborator: pick up the new batch
    SelectionStaged {
        /// Import ids of the staged jobs, in selection order
        import_ids: Vec<Uuid>,
        /// When the batch was staged
        timestamp: DateTime<Utc>,
    },
}

impl ImportEvent {
    /// Event type name used as the SSE `event:` field
    pub fn event_type(&self) -> &'static str {
        match self {
            ImportEvent::StageChanged { .. } => "StageChanged",
            ImportEvent::SelectionStaged { .. } => "SelectionStaged",
        }
    }
}

// ========================================
// EventBus Implementation
// ========================================

/// Central event distribution bus for import events
///
/// The EventBus uses tokio::broadcast internally, providing:
/// - Non-blocking publish (slow subscribers don't block producers)
/// - Multiple concurrent subscribers
/// - Lagged message detection for slow subscribers
///
/// # Examples
///
/// ```
/// use modelhub_common::events::{EventBus, ImportEvent, ImportStage};
///
/// let event_bus = EventBus::new(100);
/// let mut rx = event_bus.subscribe();
///
/// event_bus.emit_lossy(ImportEvent::StageChanged {
///     old_stage: ImportStage::None,
///     new_stage: ImportStage::SelectingModel,
///     timestamp: chrono::Utc::now(),
/// });
///
/// assert!(rx.try_recv().is_ok());
/// ```
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ImportEvent>,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of events to buffer before lagging receivers
    ///   lose old events. Must be greater than zero.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<ImportEvent> {
        self.tx.subscribe()
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: ImportEvent) {
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers_is_silent() {
        let bus = EventBus::new(10);
        bus.emit_lossy(ImportEvent::StageChanged {
            old_stage: ImportStage::None,
            new_stage: ImportStage::SelectingModel,
            timestamp: Utc::now(),
        });

        let mut rx = bus.subscribe();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let bus = EventBus::new(10);
        let mut rx = bus.subscribe();

        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        bus.emit_lossy(ImportEvent::SelectionStaged {
            import_ids: ids.clone(),
            timestamp: Utc::now(),
        });

        match rx.recv().await.unwrap() {
            ImportEvent::SelectionStaged { import_ids, .. } => {
                assert_eq!(import_ids, ids);
            }
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = ImportEvent::StageChanged {
            old_stage: ImportStage::SelectingModel,
            new_stage: ImportStage::ModelSelected,
            timestamp: Utc::now(),
        };
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "StageChanged");
        assert_eq!(json["old_stage"], "SELECTING_MODEL");
        assert_eq!(json["new_stage"], "MODEL_SELECTED");
        assert_eq!(event.event_type(), "StageChanged");
    }
}
