//! Model selection entry points
//!
//! Clicking the drop zone (dialog) and dropping files are two independent
//! entry points into the same pipeline:
//!
//! resolve → build jobs → stage selection
//!
//! Every failure is absorbed here. A cancelled dialog, an all-directory
//! selection or a batch where nothing could be stat'ed leaves the stage
//! unchanged; skipped entries are counted in the outcome.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::models::{DroppedFile, ImportStage};
use crate::services::{
    build_import_jobs, FilePicker, FileResolver, FileStat, ImportStageController, Resolution,
};

/// Result of one selection gesture
///
/// Serialized as `{"kind": "staged", "count": 2, "skipped": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// Dialog returned nothing, or nothing was dropped
    Cancelled,
    /// Every entry was skipped; stage unchanged
    NothingStaged { skipped: usize },
    /// Jobs staged and stage moved to `MODEL_SELECTED`
    Staged { count: usize, skipped: usize },
}

impl SelectionOutcome {
    /// Entries dropped while resolving the selection
    pub fn skipped(&self) -> usize {
        match self {
            SelectionOutcome::Cancelled => 0,
            SelectionOutcome::NothingStaged { skipped } | SelectionOutcome::Staged { skipped, .. } => {
                *skipped
            }
        }
    }
}

/// Selection workflow wired to one stage controller
pub struct ImportWorkflow {
    controller: Arc<ImportStageController>,
    resolver: FileResolver,
    picker: Arc<dyn FilePicker>,
}

impl ImportWorkflow {
    pub fn new(
        controller: Arc<ImportStageController>,
        stat: Arc<dyn FileStat>,
        picker: Arc<dyn FilePicker>,
    ) -> Self {
        Self {
            controller,
            resolver: FileResolver::new(stat),
            picker,
        }
    }

    pub fn controller(&self) -> &Arc<ImportStageController> {
        &self.controller
    }

    /// "Click to upload": run the file picker, then stage its result
    pub async fn select_via_dialog(&self) -> SelectionOutcome {
        let paths = self.picker.select_model_files().await;
        self.stage_dialog_paths(paths).await
    }

    /// Stage paths produced by a file-picker dialog
    ///
    /// `None` or an empty list means the user cancelled.
    pub async fn stage_dialog_paths(&self, paths: Option<Vec<PathBuf>>) -> SelectionOutcome {
        let paths = match paths {
            Some(paths) if !paths.is_empty() => paths,
            _ => {
                tracing::debug!("File selection cancelled");
                return SelectionOutcome::Cancelled;
            }
        };

        let resolution = self.resolver.resolve_paths(&paths).await;
        self.stage_resolution(resolution)
    }

    /// "Drag and drop": stage dropped file handles
    pub fn drop_files(&self, files: Vec<DroppedFile>) -> SelectionOutcome {
        if files.is_empty() {
            tracing::debug!("Drop event carried no files");
            return SelectionOutcome::Cancelled;
        }

        let resolution = self.resolver.resolve_dropped(files);
        self.stage_resolution(resolution)
    }

    fn stage_resolution(&self, resolution: Resolution) -> SelectionOutcome {
        let skipped = resolution.skipped.len();
        if skipped > 0 {
            tracing::warn!(skipped, "Some selected entries were skipped");
        }

        let jobs = build_import_jobs(&resolution.descriptors);
        let count = jobs.len();

        match self.controller.stage_selection(jobs) {
            Some(_) => SelectionOutcome::Staged { count, skipped },
            None => {
                tracing::info!(
                    skipped,
                    stage = %self.controller.stage(),
                    "Nothing to import, stage unchanged"
                );
                SelectionOutcome::NothingStaged { skipped }
            }
        }
    }

    /// Current import stage
    pub fn stage(&self) -> ImportStage {
        self.controller.stage()
    }
}
