use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::AppError;
use crate::ports::{AsyncPackageFilesystemPort, PackageFilesystemPort};

/// In-memory filesystem for testing. Directories exist implicitly.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryFilesystem {
    files: BTreeMap<PathBuf, String>,
    unlistable: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Listing `directory` fails with `PermissionDenied`.
    pub(crate) fn with_unlistable(mut self, directory: &str) -> Self {
        self.unlistable.insert(PathBuf::from(directory));
        self
    }

    fn list(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError> {
        if self.unlistable.contains(directory) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Cannot list files for {}", directory.display()),
            )));
        }
        // BTreeMap iteration keeps the listing sorted.
        Ok(self.files.keys().filter(|path| path.parent() == Some(directory)).cloned().collect())
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
        })
    }
}

impl PackageFilesystemPort for MemoryFilesystem {
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError> {
        self.list(directory)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.read(path)
    }
}

#[async_trait]
impl AsyncPackageFilesystemPort for MemoryFilesystem {
    async fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError> {
        tokio::task::yield_now().await;
        self.list(directory)
    }

    async fn read_text(&self, path: &Path) -> Result<String, AppError> {
        tokio::task::yield_now().await;
        self.read(path)
    }
}
