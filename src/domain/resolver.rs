//! Selection of the final package directory from ordered candidates.
//!
//! Candidates arrive closest-first. Dependency installs are flat, so a
//! dependency's manifest never sits more than one container hop below its
//! consumer; a consumer root further away than
//! `name segments + 1` is treated as coincidental and rejected.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::paths::segment_distance;
use crate::domain::{AppError, CandidateManifest, RootStrategy, Target};

pub fn pick_package_directory(
    candidates: &[CandidateManifest],
    target: &Target,
    manifest_name: &str,
) -> Result<PathBuf, AppError> {
    let not_found = || AppError::not_found(manifest_name, target.not_found_hint());

    match target {
        Target::SelfPackage | Target::ExplicitDirectory(_) | Target::Caller => candidates
            .first()
            .map(|closest| closest.manifest_directory.clone())
            .ok_or_else(not_found),
        Target::Root { strategy: RootStrategy::FurthestAncestor } => candidates
            .last()
            .map(|furthest| furthest.manifest_directory.clone())
            .ok_or_else(not_found),
        Target::Root { strategy: RootStrategy::ClosestConsumer } => match candidates {
            [] => Err(not_found()),
            [only] => {
                debug!(root = %only.manifest_directory.display(), "single candidate is the root");
                Ok(only.manifest_directory.clone())
            }
            [own, consumer, ..] => pick_consumer(own, consumer),
        },
    }
}

fn pick_consumer(
    own: &CandidateManifest,
    consumer: &CandidateManifest,
) -> Result<PathBuf, AppError> {
    let allowed = own.name_segments() + 1;
    let distance = segment_distance(&consumer.manifest_directory, &own.manifest_directory);

    debug!(
        own = %own.manifest_directory.display(),
        consumer = %consumer.manifest_directory.display(),
        name = own.name().unwrap_or("<none>"),
        distance,
        allowed,
        "comparing consumer root distance"
    );

    if distance <= allowed {
        Ok(consumer.manifest_directory.clone())
    } else {
        Err(AppError::UntrustedRoot {
            root: consumer.manifest_directory.clone(),
            caller: own.manifest_directory.clone(),
            distance,
            allowed,
        })
    }
}
