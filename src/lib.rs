//! pkgroot: find the package directory a caller belongs to, including when the
//! caller is installed inside a consuming project's dependency tree.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::LocalFilesystem;
use app::commands::resolve;

pub use app::config::{CallerLocation, ResolveOptions};
pub use domain::{AppError, CandidateManifest, RootStrategy, Target};

// =============================================================================
// Resolution API
// =============================================================================

/// Resolve a package directory, blocking the calling thread.
///
/// `target` defaults to [`Target::Caller`]. Every call walks the filesystem
/// afresh; nothing is cached between calls.
///
/// # Errors
/// [`AppError::PackageRootNotFound`] when no manifest qualifies,
/// [`AppError::UntrustedRoot`] when the only consumer root is too far away,
/// [`AppError::DoubleSelfReference`] when this library is nested in itself.
pub fn resolve_package_directory_sync(
    target: Option<Target>,
    options: &ResolveOptions,
) -> Result<PathBuf, AppError> {
    resolve::execute(&LocalFilesystem::new(), &target.unwrap_or_default(), options)
}

/// Resolve a package directory asynchronously.
///
/// Same semantics and errors as [`resolve_package_directory_sync`].
pub async fn resolve_package_directory(
    target: Option<Target>,
    options: &ResolveOptions,
) -> Result<PathBuf, AppError> {
    resolve::execute_async(&LocalFilesystem::new(), &target.unwrap_or_default(), options).await
}

/// Ordered manifest candidates a resolution would choose from, closest first.
pub fn list_candidates_sync(
    target: Option<Target>,
    options: &ResolveOptions,
) -> Result<Vec<CandidateManifest>, AppError> {
    resolve::list_candidates(&LocalFilesystem::new(), &target.unwrap_or_default(), options)
}

/// Async counterpart of [`list_candidates_sync`].
pub async fn list_candidates(
    target: Option<Target>,
    options: &ResolveOptions,
) -> Result<Vec<CandidateManifest>, AppError> {
    resolve::list_candidates_async(&LocalFilesystem::new(), &target.unwrap_or_default(), options)
        .await
}

/// This library's own package directory. For tests and bootstrap code.
pub fn self_package_directory(options: &ResolveOptions) -> Result<PathBuf, AppError> {
    resolve_package_directory_sync(Some(Target::SelfPackage), options)
}
