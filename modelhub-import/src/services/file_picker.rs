//! Native file-picker collaborator
//!
//! `None` or an empty list means the user cancelled the dialog.

use async_trait::async_trait;
use std::path::PathBuf;

/// Host file-picker dialog
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Let the user pick one or more model files
    async fn select_model_files(&self) -> Option<Vec<PathBuf>>;
}

/// Picker for headless builds; every dialog counts as cancelled
///
/// Headless deployments receive dialog results from the UI over HTTP instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessFilePicker;

#[async_trait]
impl FilePicker for HeadlessFilePicker {
    async fn select_model_files(&self) -> Option<Vec<PathBuf>> {
        tracing::debug!("No native dialog available, treating selection as cancelled");
        None
    }
}

/// Native dialog via `rfd`, filtered to GGUF files, multi-select
#[cfg(feature = "native-dialog")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdFilePicker;

#[cfg(feature = "native-dialog")]
#[async_trait]
impl FilePicker for RfdFilePicker {
    async fn select_model_files(&self) -> Option<Vec<PathBuf>> {
        use crate::models::ModelFormat;

        let handles = rfd::AsyncFileDialog::new()
            .set_title("Import Model")
            .add_filter("GGUF", &[ModelFormat::Gguf.extension()])
            .pick_files()
            .await?;

        Some(handles.iter().map(|h| h.path().to_path_buf()).collect())
    }
}
