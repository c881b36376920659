pub mod error;
pub mod manifest;
pub mod paths;
pub mod resolver;
pub mod self_guard;
pub mod target;
pub mod walk;

pub use error::AppError;
pub use manifest::{
    CandidateManifest, DEFAULT_MANIFEST_NAME, DEFAULT_SELF_MARKER_FIELD, is_marker_file,
};
pub use resolver::pick_package_directory;
pub use self_guard::{GuardDecision, check_self_reference};
pub use target::{RootStrategy, Target};
pub use walk::AncestorWalk;
