use std::fmt;
use std::path::PathBuf;

/// How `Target::Root` chooses among several ancestor manifests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootStrategy {
    /// The caller's own project, or the project consuming it when the caller
    /// is installed as a dependency.
    #[default]
    ClosestConsumer,
    /// The outermost manifest on the ancestor path.
    FurthestAncestor,
}

/// Which package directory a resolution is after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Target {
    /// The nearest manifest to the caller's location.
    #[default]
    Caller,
    /// The caller's project root, looking through dependency installs.
    Root { strategy: RootStrategy },
    /// The nearest manifest at or above a given directory.
    ExplicitDirectory(PathBuf),
    /// This library's own manifest. Testing and bootstrap only.
    SelfPackage,
}

impl Target {
    pub fn root() -> Self {
        Target::Root { strategy: RootStrategy::default() }
    }

    /// Hint attached to "not found" failures for this target.
    pub(crate) fn not_found_hint(&self) -> String {
        match self {
            Target::Caller => {
                "Are you running this from inside your project (at or below its manifest)?"
                    .to_string()
            }
            Target::Root { .. } => {
                "No package manifest is associated with this caller's location.".to_string()
            }
            Target::ExplicitDirectory(dir) => {
                format!("No manifest exists at or above {}.", dir.display())
            }
            Target::SelfPackage => "This library's own manifest is missing; the self target is \
                                    for internal bootstrap and testing only."
                .to_string(),
        }
    }
}

impl fmt::Display for RootStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootStrategy::ClosestConsumer => write!(f, "closest-consumer"),
            RootStrategy::FurthestAncestor => write!(f, "furthest-ancestor"),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Caller => write!(f, "caller"),
            Target::Root { strategy } => write!(f, "root ({strategy})"),
            Target::ExplicitDirectory(dir) => write!(f, "directory {}", dir.display()),
            Target::SelfPackage => write!(f, "self"),
        }
    }
}
