//! Filesystem capabilities the resolution pipeline depends on.
//!
//! The pipeline only ever lists one directory at a time and reads whole
//! manifest files; everything else stays behind these ports.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AppError;

/// Blocking filesystem port.
pub trait PackageFilesystemPort {
    /// Absolute paths of the regular files directly inside `directory`,
    /// in a deterministic order. A missing directory has no files.
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;
}

/// Async counterpart of [`PackageFilesystemPort`] with the same contract.
#[async_trait]
pub trait AsyncPackageFilesystemPort: Send + Sync {
    async fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError>;

    async fn read_text(&self, path: &Path) -> Result<String, AppError>;
}
