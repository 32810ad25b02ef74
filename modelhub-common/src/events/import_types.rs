//! Import workflow type definitions
//!
//! Supporting types shared between the import staging core and anything
//! that observes it over the event bus.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the multi-step model import workflow
///
/// Exactly one stage is active at a time. `None`, `SelectingModel` and
/// `ModelSelected` belong to the selection step; the remaining stages are
/// driven by the later import screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportStage {
    /// Import surface closed
    #[default]
    None,
    /// Import surface open, waiting for files
    SelectingModel,
    /// Files staged, waiting for confirmation
    ModelSelected,
    /// Execution collaborator copying/validating files
    ImportingModel,
    /// User editing name/description/tags of staged jobs
    EditModelInfo,
    /// User asked to cancel an in-flight import
    ConfirmCancel,
}

impl ImportStage {
    /// Wire name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStage::None => "NONE",
            ImportStage::SelectingModel => "SELECTING_MODEL",
            ImportStage::ModelSelected => "MODEL_SELECTED",
            ImportStage::ImportingModel => "IMPORTING_MODEL",
            ImportStage::EditModelInfo => "EDIT_MODEL_INFO",
            ImportStage::ConfirmCancel => "CONFIRM_CANCEL",
        }
    }

    /// Stage owned by the later import screens rather than the selection step
    pub fn is_past_selection(&self) -> bool {
        matches!(
            self,
            ImportStage::ImportingModel | ImportStage::EditModelInfo | ImportStage::ConfirmCancel
        )
    }
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
