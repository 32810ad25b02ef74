//! Services for the model import staging workflow

pub mod candidate_builder;
pub mod extensions;
pub mod file_picker;
pub mod file_resolver;
pub mod file_stat;
pub mod stage_controller;

pub use candidate_builder::{build_import_jobs, ACCEPTED_FORMAT};
pub use extensions::{get_assistants, AssistantProvider, Extension, ExtensionKind, ExtensionRegistry};
pub use file_picker::{FilePicker, HeadlessFilePicker};
#[cfg(feature = "native-dialog")]
pub use file_picker::RfdFilePicker;
pub use file_resolver::{FileResolver, Resolution, SkipReason, SkippedEntry};
pub use file_stat::{FileStat, FileStatInfo, TokioFileStat};
pub use stage_controller::{ImportSnapshot, ImportStageController, StageTransition};
