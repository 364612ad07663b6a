//! Visible-row model for the specification tree
//!
//! The tree widget draws whatever [`visible_rows`] returns; the rows are a
//! pure function of the document and the expansion state.

use crate::document::DocumentNode;
use crate::expansion::ExpansionState;
use crate::path::PathKey;

/// A single visible line of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub path: PathKey,
    pub label: String,
    /// Top-level entries are depth 0
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
    /// Present for scalars and empty containers
    pub inline_value: Option<String>,
}

/// Rows visible for the given expansion state, in display order
///
/// Children appear only when their parent and every ancestor (including
/// root) are expanded. Traversal uses an explicit stack.
pub fn visible_rows(document: &DocumentNode, expansion: &ExpansionState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    let root = PathKey::root();
    if !expansion.is_expanded(&root) {
        return rows;
    }

    let mut stack: Vec<(PathKey, String, &DocumentNode, usize)> = document
        .children()
        .map(|(segment, node)| (root.child(segment.clone()), segment.label(), node, 0))
        .collect();
    stack.reverse();

    while let Some((path, label, node, depth)) = stack.pop() {
        let expandable = node.is_expandable();
        let expanded = expandable && expansion.is_expanded(&path);

        if expanded {
            let children: Vec<_> = node
                .children()
                .map(|(segment, child)| {
                    (path.child(segment.clone()), segment.label(), child, depth + 1)
                })
                .collect();
            stack.extend(children.into_iter().rev());
        }

        rows.push(TreeRow {
            inline_value: node.inline_value(),
            path,
            label,
            depth,
            expandable,
            expanded,
        });
    }

    rows
}

/// Every node path in the document except root, in pre-order
pub fn all_paths(document: &DocumentNode) -> Vec<PathKey> {
    let mut paths = Vec::new();
    let mut stack = vec![(PathKey::root(), document)];

    while let Some((path, node)) = stack.pop() {
        let children: Vec<_> = node
            .children()
            .map(|(segment, child)| (path.child(segment), child))
            .collect();
        stack.extend(children.into_iter().rev());
        if !path.is_root() {
            paths.push(path);
        }
    }

    paths
}

/// Index of the row addressed by `path`
pub fn row_index(rows: &[TreeRow], path: &PathKey) -> Option<usize> {
    rows.iter().position(|row| &row.path == path)
}

/// Plain-text rendering used by print mode and tests
pub fn rows_to_text(rows: &[TreeRow], indent: usize) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&" ".repeat(row.depth * indent));
        out.push_str(match (row.expandable, row.expanded) {
            (true, true) => "▼ ",
            (true, false) => "▶ ",
            (false, _) => "  ",
        });
        out.push_str(&row.label);
        if let Some(value) = &row.inline_value {
            out.push_str(": ");
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}
