//! Detection of this library's own manifest on the ancestor path.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::paths::directory_of;
use crate::domain::{AppError, CandidateManifest};

/// What the pipeline should do with a freshly collected candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RestartFrom(PathBuf),
}

/// Inspect the closest candidate for the self marker.
///
/// `marker_field` of `None` disables the check. A self-manifest found while
/// already `redirected` is an invariant violation.
pub fn check_self_reference(
    candidates: &[CandidateManifest],
    marker_field: Option<&str>,
    redirected: bool,
) -> Result<GuardDecision, AppError> {
    let Some(marker_field) = marker_field else {
        return Ok(GuardDecision::Proceed);
    };
    let Some(closest) = candidates.first() else {
        return Ok(GuardDecision::Proceed);
    };
    if !closest.is_self(marker_field) {
        return Ok(GuardDecision::Proceed);
    }

    if redirected {
        return Err(AppError::DoubleSelfReference {
            manifest_path: closest.manifest_path.clone(),
        });
    }

    // Escape `<container>/<this package>`, e.g. `node_modules/pkgroot`. Near the
    // filesystem root this clamps to the root, where the walk finds nothing.
    let restart = directory_of(&directory_of(&closest.manifest_directory));

    debug!(
        manifest = %closest.manifest_path.display(),
        restart = %restart.display(),
        "closest manifest belongs to this library; restarting above it"
    );
    Ok(GuardDecision::RestartFrom(restart))
}
