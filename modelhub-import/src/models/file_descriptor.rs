//! Normalized file descriptors produced from raw selection input

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Normalized `{path, name, size, is_directory}` record for one selected entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Absolute filesystem location
    pub path: PathBuf,
    /// Last path segment, never empty
    pub name: String,
    /// Size in bytes (meaningless for directories)
    pub size: u64,
    /// Directory flag reported by the stat collaborator
    pub is_directory: bool,
}

impl FileDescriptor {
    /// Descriptor for a regular file, deriving the name from the path
    pub fn file(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        Self {
            name: file_name_from_path(&path),
            path,
            size,
            is_directory: false,
        }
    }
}

/// A file handle delivered by a drag-and-drop event
///
/// The drop source has already materialized name, path and size, so no
/// stat call is needed. There is no directory concept for dropped handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedFile {
    #[serde(default)]
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Last non-empty path segment, splitting on both `/` and `\`
///
/// Falls back to the whole path text when there is no segment (e.g. `/`),
/// so the result is empty only for an empty path.
pub fn file_name_from_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    let last = text
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .map(str::to_string);
    last.unwrap_or_else(|| text.into_owned())
}
