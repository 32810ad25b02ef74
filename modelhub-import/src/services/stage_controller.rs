//! Import stage controller
//!
//! Single owner of the import stage and the staged job list. Writers go
//! through the transition methods below; readers take a snapshot or
//! subscribe to the watch channel. Stage and jobs are published together so
//! no observer sees a new stage with an old job list.
//!
//! ```text
//! NONE            --open-->              SELECTING_MODEL
//! SELECTING_MODEL --stage_selection-->   MODEL_SELECTED
//! SELECTING_MODEL --dismiss-->           NONE
//! MODEL_SELECTED  --transition_to-->     later screens
//! later screens   --transition_to-->     later screens
//! any             --reset-->             NONE
//! ```

use chrono::{DateTime, Utc};
use modelhub_common::events::{EventBus, ImportEvent};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::models::{ImportJob, ImportStage};

/// Stage and staged jobs as seen by observers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSnapshot {
    pub stage: ImportStage,
    pub jobs: Vec<ImportJob>,
}

/// Record of one effective stage change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageTransition {
    pub old_stage: ImportStage,
    pub new_stage: ImportStage,
    pub transitioned_at: DateTime<Utc>,
}

/// Owner of the import stage state machine
pub struct ImportStageController {
    state: watch::Sender<ImportSnapshot>,
    event_bus: EventBus,
}

impl ImportStageController {
    /// Controller starting at `NONE` with nothing staged
    pub fn new(event_bus: EventBus) -> Self {
        let (state, _) = watch::channel(ImportSnapshot::default());
        Self { state, event_bus }
    }

    /// Current stage
    pub fn stage(&self) -> ImportStage {
        self.state.borrow().stage
    }

    /// Copy of the staged job list
    pub fn staged_jobs(&self) -> Vec<ImportJob> {
        self.state.borrow().jobs.clone()
    }

    /// Copy of stage + jobs taken atomically
    pub fn snapshot(&self) -> ImportSnapshot {
        self.state.borrow().clone()
    }

    /// Watch receiver notified on every published change
    pub fn subscribe(&self) -> watch::Receiver<ImportSnapshot> {
        self.state.subscribe()
    }

    /// User opened the import surface: `NONE -> SELECTING_MODEL`
    ///
    /// Ignored in any other stage.
    pub fn open(&self) -> Option<StageTransition> {
        self.transition_if(ImportStage::SelectingModel, |stage| {
            stage == ImportStage::None
        })
    }

    /// Replace the staged jobs and move to `MODEL_SELECTED`
    ///
    /// An empty batch is a no-op: nothing is replaced and the stage does not
    /// move. A non-empty batch always replaces the previous one wholesale,
    /// whatever the current stage.
    pub fn stage_selection(&self, jobs: Vec<ImportJob>) -> Option<StageTransition> {
        if jobs.is_empty() {
            debug!("Empty selection, nothing staged");
            return None;
        }

        let import_ids = jobs.iter().map(|j| j.import_id).collect::<Vec<_>>();
        let mut old_stage = ImportStage::None;
        self.state.send_modify(|snapshot| {
            old_stage = snapshot.stage;
            snapshot.jobs = jobs;
            snapshot.stage = ImportStage::ModelSelected;
        });

        let transition = StageTransition {
            old_stage,
            new_stage: ImportStage::ModelSelected,
            transitioned_at: Utc::now(),
        };

        info!(
            count = import_ids.len(),
            old_stage = %old_stage,
            "Staged model selection"
        );

        self.event_bus.emit_lossy(ImportEvent::SelectionStaged {
            import_ids,
            timestamp: transition.transitioned_at,
        });
        if old_stage != ImportStage::ModelSelected {
            self.publish(transition);
        }

        Some(transition)
    }

    /// Return to `NONE`
    ///
    /// Staged jobs stay in place for whichever consumer reads them next.
    pub fn reset(&self) -> Option<StageTransition> {
        self.transition_if(ImportStage::None, |_| true)
    }

    /// External dismissal of the import surface
    ///
    /// Closes (`-> NONE`) only while `SELECTING_MODEL`; later stages own
    /// their own dismissal policy, so the signal is ignored there.
    pub fn dismiss(&self) -> Option<StageTransition> {
        let transition = self.transition_if(ImportStage::None, |stage| {
            stage == ImportStage::SelectingModel
        });
        if transition.is_none() {
            debug!(stage = %self.stage(), "Dismiss ignored outside SELECTING_MODEL");
        }
        transition
    }

    /// Transition between the later import screens
    ///
    /// Only `IMPORTING_MODEL`, `EDIT_MODEL_INFO` and `CONFIRM_CANCEL` are
    /// valid targets, and only once a selection is staged. The selection
    /// stages are reachable through `open`, `stage_selection`, `dismiss` and
    /// `reset` alone. Returns `None` when refused or already in `new_stage`.
    pub fn transition_to(&self, new_stage: ImportStage) -> Option<StageTransition> {
        if !new_stage.is_past_selection() {
            debug!(new_stage = %new_stage, "Refusing transition to a selection stage");
            return None;
        }
        self.transition_if(new_stage, |stage| {
            stage == ImportStage::ModelSelected || stage.is_past_selection()
        })
    }

    fn transition_if(
        &self,
        new_stage: ImportStage,
        allowed: impl FnOnce(ImportStage) -> bool,
    ) -> Option<StageTransition> {
        let mut old_stage = None;
        self.state.send_if_modified(|snapshot| {
            if snapshot.stage == new_stage || !allowed(snapshot.stage) {
                return false;
            }
            old_stage = Some(snapshot.stage);
            snapshot.stage = new_stage;
            true
        });

        let transition = StageTransition {
            old_stage: old_stage?,
            new_stage,
            transitioned_at: Utc::now(),
        };
        self.publish(transition);
        Some(transition)
    }

    fn publish(&self, transition: StageTransition) {
        info!(
            old_stage = %transition.old_stage,
            new_stage = %transition.new_stage,
            "Import stage changed"
        );
        self.event_bus.emit_lossy(ImportEvent::StageChanged {
            old_stage: transition.old_stage,
            new_stage: transition.new_stage,
            timestamp: transition.transitioned_at,
        });
    }
}
