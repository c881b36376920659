//! Filesystem adapter implementations for the package filesystem ports.
//!
//! `LocalFilesystem` implements both `PackageFilesystemPort` (via `std::fs`)
//! and `AsyncPackageFilesystemPort` (via `tokio::fs`), so the sync and async
//! pipelines observe the same directory listings. Only regular files are
//! listed; symlinks are skipped even when they point at a file.

mod blocking;
mod nonblocking;

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed adapter over the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

/// A missing directory lists as empty; other failures carry the directory.
fn listing_error(directory: &Path, err: io::Error) -> Result<Vec<PathBuf>, AppError> {
    if err.kind() == io::ErrorKind::NotFound {
        Ok(Vec::new())
    } else {
        Err(AppError::Io(io::Error::new(
            err.kind(),
            format!("Cannot list files for {}: {}", directory.display(), err),
        )))
    }
}
