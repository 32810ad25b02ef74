//! Data models for the import staging workflow

pub mod assistant;
pub mod file_descriptor;
pub mod import_job;

pub use assistant::Assistant;
pub use file_descriptor::{file_name_from_path, DroppedFile, FileDescriptor};
pub use import_job::{ImportJob, ImportJobStatus, ModelFormat};
pub use modelhub_common::events::ImportStage;
