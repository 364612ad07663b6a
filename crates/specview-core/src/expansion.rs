//! Expand/collapse state for the specification tree

use std::collections::HashSet;

use crate::document::DocumentNode;
use crate::path::PathKey;
use crate::tree::all_paths;

/// Set of expanded paths; always contains root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<PathKey>,
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionState {
    pub fn new() -> Self {
        let mut expanded = HashSet::new();
        expanded.insert(PathKey::root());
        Self { expanded }
    }

    pub fn is_expanded(&self, path: &PathKey) -> bool {
        self.expanded.contains(path)
    }

    /// Flip membership of `path`, returning whether it is now expanded
    ///
    /// Root cannot be collapsed.
    pub fn toggle(&mut self, path: &PathKey) -> bool {
        if path.is_root() {
            return true;
        }
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.clone());
            true
        }
    }

    /// Returns true if the path was newly expanded
    pub fn expand(&mut self, path: &PathKey) -> bool {
        self.expanded.insert(path.clone())
    }

    /// Returns true if the path was expanded before
    pub fn collapse(&mut self, path: &PathKey) -> bool {
        if path.is_root() {
            return false;
        }
        self.expanded.remove(path)
    }

    /// Expand every node in the document
    pub fn expand_all(&mut self, document: &DocumentNode) {
        self.expanded.insert(PathKey::root());
        self.expanded.extend(all_paths(document));
    }

    /// Reset to just root
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.expanded.insert(PathKey::root());
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Always false; root is a permanent member
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathKey> {
        self.expanded.iter()
    }
}
