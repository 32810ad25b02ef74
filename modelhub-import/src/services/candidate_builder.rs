//! Import candidate builder
//!
//! Maps resolved descriptors to `Preparing` import jobs. Pure apart from
//! id generation: every job gets a fresh UUIDv4, even for duplicate paths.

use crate::models::{FileDescriptor, ImportJob, ModelFormat};

/// The only format this workflow accepts
pub const ACCEPTED_FORMAT: ModelFormat = ModelFormat::Gguf;

/// Build one import job per file descriptor, preserving order
///
/// Directory descriptors are never turned into jobs.
pub fn build_import_jobs(descriptors: &[FileDescriptor]) -> Vec<ImportJob> {
    descriptors
        .iter()
        .filter(|d| !d.is_directory)
        .map(|d| ImportJob::prepare(d, ACCEPTED_FORMAT))
        .collect()
}
