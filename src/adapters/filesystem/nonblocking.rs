//! `AsyncPackageFilesystemPort` implementation for `LocalFilesystem`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::AppError;
use crate::ports::AsyncPackageFilesystemPort;

use super::{LocalFilesystem, listing_error};

#[async_trait]
impl AsyncPackageFilesystemPort for LocalFilesystem {
    async fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut entries = match fs::read_dir(directory).await {
            Ok(entries) => entries,
            Err(err) => return listing_error(directory, err),
        };
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(AppError::from)? {
            if entry.file_type().await.map_err(AppError::from)?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }

    async fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).await.map_err(AppError::from)
    }
}
