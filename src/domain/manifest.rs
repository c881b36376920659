//! Candidate manifest model.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::paths::{directory_of, name_segment_count};

/// The manifest basename searched for when none is configured.
pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// Reserved boolean field marking a manifest as this library's own.
pub const DEFAULT_SELF_MARKER_FIELD: &str = "packageRootSelf";

/// Segment count assumed for a name that is absent or not a string.
///
/// Two is the generous choice: it admits `@scope/name` layouts.
const FALLBACK_NAME_SEGMENTS: usize = 2;

/// One manifest found on the ancestor path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateManifest {
    pub manifest_path: PathBuf,
    pub manifest_directory: PathBuf,
    pub content: Option<Map<String, Value>>,
    pub decode_error: Option<String>,
    /// The file could be read, even if decoding then failed.
    pub file_found: bool,
}

impl CandidateManifest {
    /// Build a candidate from the outcome of reading `manifest_path`.
    pub fn from_read(manifest_path: &Path, read: Result<String, String>) -> Self {
        let manifest_directory = directory_of(manifest_path);
        match read {
            Ok(text) => match decode(&text) {
                Ok(content) => Self {
                    manifest_path: manifest_path.to_path_buf(),
                    manifest_directory,
                    content: Some(content),
                    decode_error: None,
                    file_found: true,
                },
                Err(cause) => Self {
                    manifest_path: manifest_path.to_path_buf(),
                    manifest_directory,
                    content: None,
                    decode_error: Some(format!(
                        "Failed to read json from {}. Could not parse JSON because: {}",
                        manifest_path.display(),
                        cause
                    )),
                    file_found: true,
                },
            },
            Err(cause) => Self {
                manifest_path: manifest_path.to_path_buf(),
                manifest_directory,
                content: None,
                decode_error: Some(format!(
                    "Failed to read json from {}: {}",
                    manifest_path.display(),
                    cause
                )),
                file_found: false,
            },
        }
    }

    /// The declared `name` field, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.content.as_ref()?.get("name")?.as_str()
    }

    /// Segments in the declared name, falling back to two.
    pub fn name_segments(&self) -> usize {
        self.name().map(name_segment_count).unwrap_or(FALLBACK_NAME_SEGMENTS)
    }

    /// Whether `marker_field` is present and `true`.
    pub fn is_self(&self, marker_field: &str) -> bool {
        self.content
            .as_ref()
            .and_then(|content| content.get(marker_field))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Strict JSON; the top level must be an object.
fn decode(text: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected a JSON object, found {}", json_kind(&other))),
        Err(err) => Err(err.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whether `file` has `manifest_name` as its basename, ignoring ASCII case.
pub fn is_marker_file(file: &Path, manifest_name: &str) -> bool {
    file.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(manifest_name))
}
