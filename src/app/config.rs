//! Resolution options.

use std::path::PathBuf;

use url::Url;

use crate::domain::paths::{absolutize, directory_of};
use crate::domain::{AppError, DEFAULT_MANIFEST_NAME, DEFAULT_SELF_MARKER_FIELD, Target};

/// Where the caller lives. Replaces any inspection of the call stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerLocation {
    /// A source file; the walk starts in its directory.
    File(PathBuf),
    /// A directory; the walk starts there.
    Directory(PathBuf),
}

impl CallerLocation {
    /// Accept a `file://` URL such as an ES module's `import.meta.url`.
    pub fn from_file_url(url: &str) -> Result<Self, AppError> {
        let parsed = Url::parse(url).map_err(|_| AppError::InvalidCallerUrl(url.to_string()))?;
        if parsed.scheme() != "file" {
            return Err(AppError::InvalidCallerUrl(url.to_string()));
        }
        let path = parsed.to_file_path().map_err(|_| AppError::InvalidCallerUrl(url.to_string()))?;
        Ok(CallerLocation::File(path))
    }

    fn directory(&self) -> PathBuf {
        match self {
            CallerLocation::File(file) => directory_of(file),
            CallerLocation::Directory(dir) => dir.clone(),
        }
    }
}

/// Options for a single resolution call.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Caller location; the process working directory when absent.
    pub caller: Option<CallerLocation>,
    /// This library's own install location, needed by `Target::SelfPackage`.
    pub self_location: Option<PathBuf>,
    /// Basename of the manifest file, matched case-insensitively.
    pub manifest_name: String,
    /// Reserved boolean field identifying this library's own manifest.
    pub self_marker_field: String,
    /// Bypass self-reference detection. For this library's own tests.
    pub testing_skip_self_check: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            caller: None,
            self_location: None,
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            self_marker_field: DEFAULT_SELF_MARKER_FIELD.to_string(),
            testing_skip_self_check: false,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller(mut self, caller: CallerLocation) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_caller_file(self, file: impl Into<PathBuf>) -> Self {
        self.with_caller(CallerLocation::File(file.into()))
    }

    pub fn with_caller_directory(self, directory: impl Into<PathBuf>) -> Self {
        self.with_caller(CallerLocation::Directory(directory.into()))
    }

    pub fn with_self_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.self_location = Some(location.into());
        self
    }

    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    pub fn with_self_marker_field(mut self, field: impl Into<String>) -> Self {
        self.self_marker_field = field.into();
        self
    }

    pub fn skip_self_check_for_testing(mut self) -> Self {
        self.testing_skip_self_check = true;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        if self.manifest_name.is_empty() || self.manifest_name.contains(['/', '\\']) {
            return Err(AppError::config_error(format!(
                "Manifest name '{}' must be a bare file name",
                self.manifest_name
            )));
        }
        Ok(())
    }

    /// Marker field to check, or `None` when the check does not apply to `target`.
    pub(crate) fn self_marker_for(&self, target: &Target) -> Option<&str> {
        if self.testing_skip_self_check || matches!(target, Target::SelfPackage) {
            None
        } else {
            Some(self.self_marker_field.as_str())
        }
    }

    /// Absolute, normalized directory the walk starts from.
    pub(crate) fn start_directory(&self, target: &Target) -> Result<PathBuf, AppError> {
        let cwd = std::env::current_dir()?;
        let start = match target {
            Target::ExplicitDirectory(dir) => dir.clone(),
            Target::SelfPackage => self.self_location.clone().ok_or_else(|| {
                AppError::config_error(
                    "The self target needs ResolveOptions::self_location to be set",
                )
            })?,
            Target::Caller | Target::Root { .. } => match &self.caller {
                Some(caller) => caller.directory(),
                None => cwd.clone(),
            },
        };
        Ok(absolutize(&start, &cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_becomes_file_location() {
        let caller = CallerLocation::from_file_url("file:///proj/src/index.js").unwrap();
        assert_eq!(caller, CallerLocation::File(PathBuf::from("/proj/src/index.js")));
        assert_eq!(caller.directory(), PathBuf::from("/proj/src"));
    }

    #[test]
    fn non_file_urls_are_rejected() {
        for url in ["https://example.com/a.js", "not a url"] {
            let err = CallerLocation::from_file_url(url).unwrap_err();
            assert!(matches!(err, AppError::InvalidCallerUrl(_)), "{url}");
        }
    }

    #[test]
    fn start_directory_follows_target() {
        let options = ResolveOptions::new()
            .with_caller_file("/proj/node_modules/dep/lib/index.js")
            .with_self_location("/opt/pkgroot/");

        assert_eq!(
            options.start_directory(&Target::Caller).unwrap(),
            PathBuf::from("/proj/node_modules/dep/lib")
        );
        assert_eq!(
            options.start_directory(&Target::root()).unwrap(),
            PathBuf::from("/proj/node_modules/dep/lib")
        );
        assert_eq!(
            options.start_directory(&Target::ExplicitDirectory("/x/./y/".into())).unwrap(),
            PathBuf::from("/x/y")
        );
        assert_eq!(
            options.start_directory(&Target::SelfPackage).unwrap(),
            PathBuf::from("/opt/pkgroot")
        );
    }

    #[test]
    fn self_target_without_location_is_a_configuration_error() {
        let err = ResolveOptions::new().start_directory(&Target::SelfPackage).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn self_check_is_disabled_for_self_target_and_testing() {
        let options = ResolveOptions::new();
        assert_eq!(options.self_marker_for(&Target::Caller), Some(DEFAULT_SELF_MARKER_FIELD));
        assert_eq!(options.self_marker_for(&Target::SelfPackage), None);

        let skipping = ResolveOptions::new().skip_self_check_for_testing();
        assert_eq!(skipping.self_marker_for(&Target::root()), None);
    }

    #[test]
    fn manifest_name_must_be_bare() {
        assert!(ResolveOptions::new().validate().is_ok());
        assert!(ResolveOptions::new().with_manifest_name("a/package.json").validate().is_err());
        assert!(ResolveOptions::new().with_manifest_name("").validate().is_err());
    }
}
