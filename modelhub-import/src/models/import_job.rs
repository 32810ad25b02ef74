//! Import job records staged for the execution collaborator

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use super::FileDescriptor;

/// Lifecycle status of an import job
///
/// The staging workflow only ever creates `Preparing` jobs; the remaining
/// states are written by the execution collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportJobStatus {
    #[default]
    Preparing,
    Importing,
    Imported,
    Failed,
}

/// Model file format tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// GGUF single-file binary model
    #[default]
    Gguf,
}

impl ModelFormat {
    /// File extension accepted for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ModelFormat::Gguf => "gguf",
        }
    }
}

/// One file queued for import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportJob {
    /// Process-unique id, fixed at creation
    pub import_id: Uuid,
    /// Catalog id assigned later by the execution collaborator
    pub model_id: Option<String>,
    pub name: String,
    pub description: String,
    pub path: PathBuf,
    pub tags: Vec<String>,
    pub size: u64,
    pub status: ImportJobStatus,
    pub format: ModelFormat,
}

impl ImportJob {
    /// New `Preparing` job for a file descriptor
    pub fn prepare(descriptor: &FileDescriptor, format: ModelFormat) -> Self {
        Self {
            import_id: modelhub_common::uuid_utils::generate(),
            model_id: None,
            name: descriptor.name.clone(),
            description: String::new(),
            path: descriptor.path.clone(),
            tags: Vec::new(),
            size: descriptor.size,
            status: ImportJobStatus::Preparing,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_sets_initial_fields() {
        let descriptor = FileDescriptor::file("/m/a.gguf", 10);
        let job = ImportJob::prepare(&descriptor, ModelFormat::Gguf);

        assert_eq!(job.name, "a.gguf");
        assert_eq!(job.path, PathBuf::from("/m/a.gguf"));
        assert_eq!(job.size, 10);
        assert_eq!(job.model_id, None);
        assert!(job.description.is_empty());
        assert!(job.tags.is_empty());
        assert_eq!(job.status, ImportJobStatus::Preparing);
        assert_eq!(job.format, ModelFormat::Gguf);
    }

    #[test]
    fn test_job_wire_format() {
        let job = ImportJob::prepare(&FileDescriptor::file("/m/a.gguf", 10), ModelFormat::Gguf);
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["importId"], job.import_id.to_string());
        assert!(json["modelId"].is_null());
        assert_eq!(json["status"], "PREPARING");
        assert_eq!(json["format"], "gguf");
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["size"], 10);
    }
}
