//! Shared testing utilities for pkgroot integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest that marks a package as pkgroot's own install.
#[allow(dead_code)]
pub const SELF_MANIFEST: &str = r#"{"name":"pkgroot","packageRootSelf":true}"#;

/// Isolated directory tree for building package layouts.
#[allow(dead_code)]
pub struct PackageTree {
    root: TempDir,
}

#[allow(dead_code)]
impl PackageTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path of the tree root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `relative` inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Create a directory (and parents).
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write `package.json` into `relative_dir` and return that directory.
    pub fn package(&self, relative_dir: &str, manifest: &str) -> PathBuf {
        let file = if relative_dir.is_empty() {
            "package.json".to_string()
        } else {
            format!("{relative_dir}/package.json")
        };
        self.file(&file, manifest);
        self.path(relative_dir)
    }

    /// `/proj` consuming `/proj/node_modules/dep`, with a source file inside `dep`.
    pub fn consumer_with_dependency() -> Self {
        let tree = Self::new();
        tree.package("proj", r#"{"name":"proj"}"#);
        tree.package("proj/node_modules/dep", r#"{"name":"dep"}"#);
        tree.file("proj/node_modules/dep/lib/index.js", "module.exports = {};");
        tree.file("proj/src/main.js", "require('dep');");
        tree
    }

    /// Build a command for invoking the compiled `pkgroot` binary inside the tree.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pkgroot").expect("Failed to locate pkgroot binary");
        cmd.current_dir(self.root()).env_remove("RUST_LOG");
        cmd
    }
}
