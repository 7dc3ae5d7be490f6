//! Collapse state: the set of container paths rendered in summary form.

use std::collections::HashSet;

use crate::model::{Path, Value};

/// Set of collapsed paths for one rendering session.
///
/// Membership is the only state: a present path renders collapsed, an absent
/// one expanded. Toggling a path never touches any other entry, so the state
/// of descendants survives collapsing and re-expanding their ancestor. Paths
/// that no longer resolve (after the value changed shape) are left in place
/// and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    paths: HashSet<Path>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Flips membership of `path`, returning `true` if it is now collapsed.
    pub fn toggle(&mut self, path: &Path) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.clone());
            true
        }
    }

    /// Returns a copy of this state with `path` flipped.
    pub fn toggled(&self, path: &Path) -> Self {
        let mut next = self.clone();
        next.toggle(path);
        next
    }

    pub fn collapse(&mut self, path: &Path) {
        self.paths.insert(path.clone());
    }

    pub fn expand(&mut self, path: &Path) {
        self.paths.remove(path);
    }

    /// Collapses every container in `value`.
    pub fn collapse_all(&mut self, value: &Value) {
        self.paths.extend(value.container_paths());
    }

    /// Expands everything.
    pub fn expand_all(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}

impl FromIterator<Path> for CollapseState {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
