//! Lexical path helpers shared by the walker and the resolver.
//!
//! Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Normalize path by resolving `.` and `..` components logically.
/// Trailing separators disappear as a side effect of rebuilding from components.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

/// Make `path` absolute against `base` (unless it already is) and normalize it.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() { normalize_path(path) } else { normalize_path(&base.join(path)) }
}

/// Whether the walk may continue above `directory`.
///
/// The separator alone and anything of two characters or fewer (`C:`, `/a`) count as root.
pub fn directory_has_parent(directory: &Path) -> bool {
    let text = directory.to_string_lossy();
    !(text == std::path::MAIN_SEPARATOR_STR || text.chars().count() <= 2)
}

/// Parent directory of `path`, or `path` itself when it has none.
pub fn directory_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

/// Number of path segments separating two directories.
///
/// Counts the `..` hops up from `from` to the common ancestor plus the hops down
/// to `to`. Identical directories are zero apart.
pub fn segment_distance(from: &Path, to: &Path) -> usize {
    let from: Vec<_> = normalize_path(from).components().map(|c| c.as_os_str().to_owned()).collect();
    let to: Vec<_> = normalize_path(to).components().map(|c| c.as_os_str().to_owned()).collect();

    let common = from.iter().zip(to.iter()).take_while(|(a, b)| a == b).count();
    (from.len() - common) + (to.len() - common)
}

/// Number of `/`-separated segments in a package name (`@scope/name` is two).
pub fn name_segment_count(name: &str) -> usize {
    name.split('/').count()
}
