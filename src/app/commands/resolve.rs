//! Package directory resolution pipeline.
//!
//! walk ancestors → collect markers → read manifests → self guard → pick.
//!
//! The blocking and async variants share every decision (`check_self_reference`,
//! `pick_package_directory`) and differ only in how they touch the filesystem.
//! Ancestors are inspected strictly in order, closest first.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::app::config::ResolveOptions;
use crate::domain::{
    AncestorWalk, AppError, CandidateManifest, GuardDecision, Target, check_self_reference,
    is_marker_file, pick_package_directory,
};
use crate::ports::{AsyncPackageFilesystemPort, PackageFilesystemPort};

// =============================================================================
// Blocking
// =============================================================================

/// Manifests at or above `start`, closest first.
pub fn collect_candidates<F>(
    fs: &F,
    start: &Path,
    manifest_name: &str,
) -> Result<Vec<CandidateManifest>, AppError>
where
    F: PackageFilesystemPort + ?Sized,
{
    let mut candidates = Vec::new();
    for directory in AncestorWalk::new(start) {
        let directory = directory?;
        for marker in fs.list_files(&directory)? {
            if !is_marker_file(&marker, manifest_name) {
                continue;
            }
            let read = fs.read_text(&marker).map_err(|err| err.to_string());
            candidates.push(CandidateManifest::from_read(&marker, read));
        }
        trace!(directory = %directory.display(), found = candidates.len(), "inspected ancestor");
    }
    log_candidates(start, &candidates);
    Ok(candidates)
}

/// Candidates for `target` after self-reference redirection.
pub fn list_candidates<F>(
    fs: &F,
    target: &Target,
    options: &ResolveOptions,
) -> Result<Vec<CandidateManifest>, AppError>
where
    F: PackageFilesystemPort + ?Sized,
{
    options.validate()?;
    let mut start = options.start_directory(target)?;
    debug!(%target, start = %start.display(), "resolving package directory");

    let mut redirected = false;
    loop {
        let candidates = collect_candidates(fs, &start, &options.manifest_name)?;
        match check_self_reference(&candidates, options.self_marker_for(target), redirected)? {
            GuardDecision::Proceed => return Ok(candidates),
            GuardDecision::RestartFrom(directory) => {
                redirected = true;
                start = directory;
            }
        }
    }
}

/// Resolve the package directory for `target`.
pub fn execute<F>(fs: &F, target: &Target, options: &ResolveOptions) -> Result<PathBuf, AppError>
where
    F: PackageFilesystemPort + ?Sized,
{
    let candidates = list_candidates(fs, target, options)?;
    let directory = pick_package_directory(&candidates, target, &options.manifest_name)?;
    debug!(%target, directory = %directory.display(), "resolved package directory");
    Ok(directory)
}

// =============================================================================
// Async
// =============================================================================

/// Async counterpart of [`collect_candidates`].
pub async fn collect_candidates_async<F>(
    fs: &F,
    start: &Path,
    manifest_name: &str,
) -> Result<Vec<CandidateManifest>, AppError>
where
    F: AsyncPackageFilesystemPort + ?Sized,
{
    let mut candidates = Vec::new();
    for directory in AncestorWalk::new(start) {
        let directory = directory?;
        for marker in fs.list_files(&directory).await? {
            if !is_marker_file(&marker, manifest_name) {
                continue;
            }
            let read = fs.read_text(&marker).await.map_err(|err| err.to_string());
            candidates.push(CandidateManifest::from_read(&marker, read));
        }
        trace!(directory = %directory.display(), found = candidates.len(), "inspected ancestor");
    }
    log_candidates(start, &candidates);
    Ok(candidates)
}

/// Async counterpart of [`list_candidates`].
pub async fn list_candidates_async<F>(
    fs: &F,
    target: &Target,
    options: &ResolveOptions,
) -> Result<Vec<CandidateManifest>, AppError>
where
    F: AsyncPackageFilesystemPort + ?Sized,
{
    options.validate()?;
    let mut start = options.start_directory(target)?;
    debug!(%target, start = %start.display(), "resolving package directory");

    let mut redirected = false;
    loop {
        let candidates = collect_candidates_async(fs, &start, &options.manifest_name).await?;
        match check_self_reference(&candidates, options.self_marker_for(target), redirected)? {
            GuardDecision::Proceed => return Ok(candidates),
            GuardDecision::RestartFrom(directory) => {
                redirected = true;
                start = directory;
            }
        }
    }
}

/// Async counterpart of [`execute`].
pub async fn execute_async<F>(
    fs: &F,
    target: &Target,
    options: &ResolveOptions,
) -> Result<PathBuf, AppError>
where
    F: AsyncPackageFilesystemPort + ?Sized,
{
    let candidates = list_candidates_async(fs, target, options).await?;
    let directory = pick_package_directory(&candidates, target, &options.manifest_name)?;
    debug!(%target, directory = %directory.display(), "resolved package directory");
    Ok(directory)
}

fn log_candidates(start: &Path, candidates: &[CandidateManifest]) {
    debug!(
        start = %start.display(),
        candidates = ?candidates.iter().map(|c| c.manifest_path.display().to_string()).collect::<Vec<_>>(),
        "found manifests"
    );
    for candidate in candidates {
        if let Some(error) = &candidate.decode_error {
            debug!(manifest = %candidate.manifest_path.display(), %error, "manifest unreadable");
        }
    }
}
