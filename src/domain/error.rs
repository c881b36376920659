use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for package-root resolution.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of manifest reads.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Caller location was given as a URL that does not name a local file.
    #[error("Invalid caller URL '{0}': expected a file:// URL")]
    InvalidCallerUrl(String),

    /// The walk reached the filesystem root without finding a usable manifest.
    #[error("Could not find {manifest}. {hint}")]
    PackageRootNotFound { manifest: String, hint: String },

    /// A consumer root was found but sits too far from the caller's own package.
    #[error(
        "Cannot trust the found package root {root}: it is {distance} segments from {caller}, \
         more than the {allowed} allowed"
    )]
    UntrustedRoot { root: PathBuf, caller: PathBuf, distance: usize, allowed: usize },

    /// The library's own manifest was found again after redirecting past it.
    #[error("Unexpected double self-detection at {manifest_path}")]
    DoubleSelfReference { manifest_path: PathBuf },

    /// Output could not be rendered as JSON.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The parent of a directory did not shorten the path.
    #[error("Directory walk stalled at {0}: parent directory did not shorten the path")]
    WalkStalled(PathBuf),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn not_found<M: Into<String>, H: Into<String>>(manifest: M, hint: H) -> Self {
        AppError::PackageRootNotFound { manifest: manifest.into(), hint: hint.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    ///
    /// Both "nothing exists" and "something exists but is untrustworthy" report
    /// `NotFound`; match on the variant to tell them apart.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::InvalidCallerUrl(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::PackageRootNotFound { .. } | AppError::UntrustedRoot { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::Serialization(_) => io::ErrorKind::InvalidData,
            AppError::DoubleSelfReference { .. } | AppError::WalkStalled(_) => io::ErrorKind::Other,
        }
    }

    /// Whether this is a "package root not found" failure of either flavor.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::PackageRootNotFound { .. } | AppError::UntrustedRoot { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untrusted_root_shares_not_found_kind_but_not_message() {
        let missing = AppError::not_found("package.json", "Are you inside your project?");
        let untrusted = AppError::UntrustedRoot {
            root: PathBuf::from("/a"),
            caller: PathBuf::from("/a/b/c/d/e"),
            distance: 4,
            allowed: 3,
        };

        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
        assert_eq!(untrusted.kind(), io::ErrorKind::NotFound);
        assert!(missing.is_not_found() && untrusted.is_not_found());
        assert!(missing.to_string().starts_with("Could not find package.json."));
        assert!(untrusted.to_string().contains("Cannot trust the found package root"));
    }

    #[test]
    fn invariant_violations_are_not_not_found() {
        let err = AppError::DoubleSelfReference { manifest_path: PathBuf::from("/x/package.json") };
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(!err.is_not_found());
    }
}
