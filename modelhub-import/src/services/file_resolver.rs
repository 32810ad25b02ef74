//! File descriptor resolver
//!
//! Turns raw selection input into normalized [`FileDescriptor`]s:
//! - Dialog paths are stat'ed one by one (symlinks followed). A relative
//!   path, a path that cannot be stat'ed, or a directory is skipped.
//! - Dropped handles already carry name/size/path and pass straight through,
//!   unless no name can be derived for them.
//!
//! No entry ever aborts the batch. Skipped entries are reported alongside the
//! descriptors so callers can surface a count.

use std::path::PathBuf;
use std::sync::Arc;

use crate::models::{file_name_from_path, DroppedFile, FileDescriptor};
use crate::services::FileStat;

/// Why an entry was left out of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Dialog path is not absolute
    NotAbsolute,
    /// Entry is a directory
    Directory,
    /// Dropped handle with neither a name nor a path to derive one from
    Unnamed,
    /// Stat collaborator failed for this path
    StatFailed(String),
}

/// An entry dropped while resolving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Resolver output: descriptors in input order plus what was skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub descriptors: Vec<FileDescriptor>,
    pub skipped: Vec<SkippedEntry>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Resolves dialog paths and dropped handles into descriptors
pub struct FileResolver {
    stat: Arc<dyn FileStat>,
}

impl FileResolver {
    pub fn new(stat: Arc<dyn FileStat>) -> Self {
        Self { stat }
    }

    /// Resolve paths returned by the file-picker dialog
    pub async fn resolve_paths(&self, paths: &[PathBuf]) -> Resolution {
        let mut resolution = Resolution::default();

        for path in paths {
            if !path.is_absolute() {
                tracing::warn!(path = %path.display(), "Selected path is not absolute, skipping");
                resolution.skipped.push(SkippedEntry {
                    path: path.clone(),
                    reason: SkipReason::NotAbsolute,
                });
                continue;
            }

            match self.stat.file_stat(path, true).await {
                Ok(info) if info.is_directory => {
                    tracing::debug!(path = %path.display(), "Skipping directory");
                    resolution.skipped.push(SkippedEntry {
                        path: path.clone(),
                        reason: SkipReason::Directory,
                    });
                }
                Ok(info) => {
                    tracing::debug!(path = %path.display(), size = info.size, "Resolved file");
                    resolution.descriptors.push(FileDescriptor::file(path.clone(), info.size));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Cannot stat selected path, skipping");
                    resolution.skipped.push(SkippedEntry {
                        path: path.clone(),
                        reason: SkipReason::StatFailed(e.to_string()),
                    });
                }
            }
        }

        resolution
    }

    /// Resolve handles delivered by a drop event
    pub fn resolve_dropped(&self, files: Vec<DroppedFile>) -> Resolution {
        let mut resolution = Resolution::default();

        for file in files {
            let name = if file.name.trim().is_empty() {
                file_name_from_path(&file.path)
            } else {
                file.name
            };

            if name.trim().is_empty() {
                tracing::warn!(path = %file.path.display(), "Dropped file has no name, skipping");
                resolution.skipped.push(SkippedEntry {
                    path: file.path,
                    reason: SkipReason::Unnamed,
                });
                continue;
            }

            resolution.descriptors.push(FileDescriptor {
                path: file.path,
                name,
                size: file.size,
                is_directory: false,
            });
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FileStatInfo, TokioFileStat};
    use async_trait::async_trait;
    use std::path::Path;
    use tempfile::TempDir;

    /// Stat that fails for any path containing "broken"
    struct FlakyStat;

    #[async_trait]
    impl FileStat for FlakyStat {
        async fn file_stat(
            &self,
            path: &Path,
            _follow_symlinks: bool,
        ) -> modelhub_common::Result<FileStatInfo> {
            if path.to_string_lossy().contains("broken") {
                return Err(modelhub_common::Error::NotFound(path.display().to_string()));
            }
            Ok(FileStatInfo {
                size: 1,
                is_directory: false,
            })
        }
    }

    #[tokio::test]
    async fn test_resolve_paths_filters_directories_and_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.gguf");
        let a = temp_dir.path().join("a.gguf");
        let dir = temp_dir.path().join("folder");
        std::fs::write(&b, b"bb").unwrap();
        std::fs::write(&a, b"aaaa").unwrap();
        std::fs::create_dir(&dir).unwrap();

        let resolver = FileResolver::new(Arc::new(TokioFileStat));
        let resolution = resolver.resolve_paths(&[b.clone(), dir.clone(), a.clone()]).await;

        let names: Vec<_> = resolution.descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b.gguf", "a.gguf"]);
        assert_eq!(resolution.descriptors[0].size, 2);
        assert_eq!(resolution.descriptors[1].size, 4);
        assert_eq!(
            resolution.skipped,
            vec![SkippedEntry {
                path: dir,
                reason: SkipReason::Directory
            }]
        );
    }

    #[tokio::test]
    async fn test_stat_failure_does_not_abort_batch() {
        let resolver = FileResolver::new(Arc::new(FlakyStat));
        let paths = vec![
            PathBuf::from("/m/ok-1.gguf"),
            PathBuf::from("/m/broken.gguf"),
            PathBuf::from("/m/ok-2.gguf"),
        ];

        let resolution = resolver.resolve_paths(&paths).await;

        assert_eq!(resolution.descriptors.len(), 2);
        assert_eq!(resolution.skipped.len(), 1);
        assert!(matches!(resolution.skipped[0].reason, SkipReason::StatFailed(_)));
    }

    #[tokio::test]
    async fn test_empty_input_resolves_empty() {
        let resolver = FileResolver::new(Arc::new(FlakyStat));
        let resolution = resolver.resolve_paths(&[]).await;
        assert!(resolution.is_empty());
        assert!(resolution.skipped.is_empty());
    }

    #[test]
    fn test_dropped_files_pass_through() {
        let resolver = FileResolver::new(Arc::new(FlakyStat));
        let resolution = resolver.resolve_dropped(vec![
            DroppedFile {
                name: "first.gguf".to_string(),
                path: PathBuf::from("/drop/first.gguf"),
                size: 5,
            },
            DroppedFile {
                name: String::new(),
                path: PathBuf::from("/drop/second.gguf"),
                size: 7,
            },
        ]);

        assert_eq!(resolution.descriptors.len(), 2);
        assert_eq!(resolution.descriptors[0].name, "first.gguf");
        assert_eq!(resolution.descriptors[1].name, "second.gguf");
        assert_eq!(resolution.descriptors[1].size, 7);
        assert!(resolution.descriptors.iter().all(|d| !d.is_directory));
    }

    #[tokio::test]
    async fn test_relative_path_skipped_without_stat() {
        let resolver = FileResolver::new(Arc::new(FlakyStat));
        let paths = vec![PathBuf::from("models/broken.gguf"), PathBuf::from("/m/ok.gguf")];

        let resolution = resolver.resolve_paths(&paths).await;

        assert_eq!(resolution.descriptors.len(), 1);
        assert_eq!(resolution.descriptors[0].name, "ok.gguf");
        assert_eq!(
            resolution.skipped,
            vec![SkippedEntry {
                path: PathBuf::from("models/broken.gguf"),
                reason: SkipReason::NotAbsolute
            }]
        );
    }

    #[test]
    fn test_dropped_file_without_any_name_is_skipped() {
        let resolver = FileResolver::new(Arc::new(FlakyStat));
        let resolution = resolver.resolve_dropped(vec![
            DroppedFile {
                name: "  ".to_string(),
                path: PathBuf::new(),
                size: 1,
            },
            DroppedFile {
                name: "kept.gguf".to_string(),
                path: PathBuf::from("/drop/kept.gguf"),
                size: 2,
            },
        ]);

        assert_eq!(resolution.descriptors.len(), 1);
        assert_eq!(resolution.descriptors[0].name, "kept.gguf");
        assert_eq!(resolution.skipped.len(), 1);
        assert_eq!(resolution.skipped[0].reason, SkipReason::Unnamed);
    }
}
