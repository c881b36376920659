//! Upward directory walk from a start directory toward the filesystem root.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::paths::{directory_has_parent, directory_of};

type ParentFn = fn(&Path) -> PathBuf;

#[derive(Debug)]
enum WalkState {
    At(PathBuf),
    Stalled(PathBuf),
    Done,
}

/// Ancestor chain of a directory, closest first, excluding the filesystem root.
///
/// Every step must strictly shorten the path. A parent that does not is reported
/// once as [`AppError::WalkStalled`] and ends the walk.
#[derive(Debug)]
pub struct AncestorWalk<F = ParentFn> {
    state: WalkState,
    parent_of: F,
}

impl AncestorWalk {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self::with_parent_fn(start, directory_of as ParentFn)
    }
}

impl<F> AncestorWalk<F>
where
    F: Fn(&Path) -> PathBuf,
{
    pub(crate) fn with_parent_fn(start: impl Into<PathBuf>, parent_of: F) -> Self {
        Self { state: WalkState::At(start.into()), parent_of }
    }
}

impl<F> Iterator for AncestorWalk<F>
where
    F: Fn(&Path) -> PathBuf,
{
    type Item = Result<PathBuf, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, WalkState::Done) {
            WalkState::Done => None,
            WalkState::Stalled(directory) => Some(Err(AppError::WalkStalled(directory))),
            WalkState::At(current) => {
                if !directory_has_parent(&current) {
                    return None;
                }
                let parent = (self.parent_of)(&current);
                self.state = if parent.as_os_str().len() < current.as_os_str().len() {
                    WalkState::At(parent)
                } else {
                    WalkState::Stalled(current.clone())
                };
                Some(Ok(current))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(start: &str) -> Vec<PathBuf> {
        AncestorWalk::new(start).collect::<Result<Vec<_>, _>>().expect("walk should not stall")
    }

    #[test]
    fn walks_from_start_to_last_non_root_ancestor() {
        assert_eq!(
            collect("/home/user/project/src"),
            vec![
                PathBuf::from("/home/user/project/src"),
                PathBuf::from("/home/user/project"),
                PathBuf::from("/home/user"),
                PathBuf::from("/home"),
            ]
        );
    }

    #[test]
    fn root_and_short_paths_yield_nothing() {
        assert!(collect("/").is_empty());
        assert!(collect("/a").is_empty());
        assert_eq!(collect("/a/b"), vec![PathBuf::from("/a/b")]);
    }

    #[test]
    fn non_shortening_parent_is_reported_not_looped() {
        let items: Vec<_> = AncestorWalk::with_parent_fn("/stuck/here", |p: &Path| p.to_path_buf())
            .collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), Path::new("/stuck/here"));
        assert!(matches!(&items[1], Err(AppError::WalkStalled(dir)) if dir == Path::new("/stuck/here")));
    }

    #[test]
    fn each_walk_is_independent() {
        let first = collect("/var/lib/app");
        let second = collect("/var/lib/app");
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn walk_is_finite_and_strictly_shortening(segments in prop::collection::vec("[a-z]{1,8}", 0..12)) {
            let start = format!("/{}", segments.join("/"));
            let walked = collect(&start);

            prop_assert!(walked.len() <= segments.len());
            for pair in walked.windows(2) {
                prop_assert!(pair[1].as_os_str().len() < pair[0].as_os_str().len());
                prop_assert!(pair[0].starts_with(&pair[1]));
            }
        }
    }
}
