//! `PackageFilesystemPort` implementation for `LocalFilesystem`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PackageFilesystemPort;

use super::{LocalFilesystem, listing_error};

impl PackageFilesystemPort for LocalFilesystem {
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(err) => return listing_error(directory, err),
        };
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::from)?;
            // Symlinks are not followed.
            if entry.file_type().map_err(AppError::from)?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }
}
