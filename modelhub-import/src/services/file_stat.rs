//! Filesystem stat collaborator
//!
//! The resolver only needs `{size, is_directory}` for a path. Tests inject
//! their own [`FileStat`] to simulate failures.

use async_trait::async_trait;
use modelhub_common::Result;
use std::path::Path;

/// Metadata returned by a stat call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatInfo {
    pub size: u64,
    pub is_directory: bool,
}

/// Read-only metadata query
#[async_trait]
pub trait FileStat: Send + Sync {
    /// Stat `path`; with `follow_symlinks` the link target is described
    async fn file_stat(&self, path: &Path, follow_symlinks: bool) -> Result<FileStatInfo>;
}

/// Production stat backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileStat;

#[async_trait]
impl FileStat for TokioFileStat {
    async fn file_stat(&self, path: &Path, follow_symlinks: bool) -> Result<FileStatInfo> {
        let metadata = if follow_symlinks {
            tokio::fs::metadata(path).await?
        } else {
            tokio::fs::symlink_metadata(path).await?
        };

        Ok(FileStatInfo {
            size: metadata.len(),
            is_directory: metadata.is_dir(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_stat_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.gguf");
        std::fs::write(&path, b"GGUF0123").unwrap();

        let info = TokioFileStat.file_stat(&path, true).await.unwrap();
        assert_eq!(info, FileStatInfo { size: 8, is_directory: false });
    }

    #[tokio::test]
    async fn test_stat_directory() {
        let temp_dir = TempDir::new().unwrap();
        let info = TokioFileStat.file_stat(temp_dir.path(), true).await.unwrap();
        assert!(info.is_directory);
    }

    #[tokio::test]
    async fn test_stat_missing_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = TokioFileStat
            .file_stat(&temp_dir.path().join("missing.gguf"), true)
            .await;
        assert!(matches!(result, Err(modelhub_common::Error::Io(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stat_follows_symlink_when_asked() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.gguf");
        std::fs::write(&target, b"0123456789").unwrap();
        let link = temp_dir.path().join("link.gguf");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let followed = TokioFileStat.file_stat(&link, true).await.unwrap();
        assert_eq!(followed.size, 10);

        let dir_link = temp_dir.path().join("dir-link");
        std::os::unix::fs::symlink(temp_dir.path(), &dir_link).unwrap();
        assert!(TokioFileStat.file_stat(&dir_link, true).await.unwrap().is_directory);
        assert!(!TokioFileStat.file_stat(&dir_link, false).await.unwrap().is_directory);
    }
}
