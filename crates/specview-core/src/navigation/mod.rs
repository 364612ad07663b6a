//! Static documentation outline for the reference page
//!
//! The outline is a hand-authored tree of [`NavigationSection`]s describing
//! every field of an OpenCLI document. It never changes at runtime; the
//! reference page derives a pre-order flat list from it to lay out the
//! documentation bodies, and shows the tree itself in its navigator.

mod structure;

use std::collections::HashSet;

pub use structure::specification_structure;

/// Fallback body text for sections without documentation
pub const DEFAULT_DOCUMENTATION: &str = "Documentation for this property.";

/// Number of outline levels expanded when the navigator opens
pub const DEFAULT_EXPANDED_LEVELS: usize = 2;

/// One entry of the documentation outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSection {
    pub id: &'static str,
    pub title: &'static str,
    pub required: bool,
    /// Field type shown as a badge (`string`, `object`, ...)
    pub kind: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Long-form text shown in the documentation body
    pub documentation: Option<&'static str>,
    /// YAML snippet shown under the body
    pub example: Option<&'static str>,
    pub children: Vec<NavigationSection>,
}

impl NavigationSection {
    pub fn new(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            required: false,
            kind: None,
            description: None,
            documentation: None,
            example: None,
            children: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn documentation(mut self, documentation: &'static str) -> Self {
        self.documentation = Some(documentation);
        self
    }

    pub fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }

    pub fn children(mut self, children: Vec<NavigationSection>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Body text: documentation, else description, else a generic line
    pub fn body_text(&self) -> &'static str {
        self.documentation
            .or(self.description)
            .unwrap_or(DEFAULT_DOCUMENTATION)
    }
}

/// A section paired with its depth in the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatSection<'a> {
    pub section: &'a NavigationSection,
    pub depth: usize,
}

/// Top-level sections shown by the reference page (children of the root)
pub fn reference_sections() -> &'static [NavigationSection] {
    &specification_structure().children
}

/// Pre-order flattening of the outline
pub fn flatten(sections: &[NavigationSection]) -> Vec<FlatSection<'_>> {
    walk(sections, |_| true)
}

/// Pre-order list of sections whose ancestors are all expanded
pub fn visible_sections<'a>(
    sections: &'a [NavigationSection],
    expanded: &HashSet<String>,
) -> Vec<FlatSection<'a>> {
    walk(sections, |section| expanded.contains(section.id))
}

fn walk<'a>(
    sections: &'a [NavigationSection],
    descend: impl Fn(&NavigationSection) -> bool,
) -> Vec<FlatSection<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<FlatSection<'a>> = sections
        .iter()
        .rev()
        .map(|section| FlatSection { section, depth: 0 })
        .collect();

    while let Some(entry) = stack.pop() {
        if descend(entry.section) {
            stack.extend(entry.section.children.iter().rev().map(|section| {
                FlatSection {
                    section,
                    depth: entry.depth + 1,
                }
            }));
        }
        out.push(entry);
    }

    out
}

pub fn find_section_by_id<'a>(
    sections: &'a [NavigationSection],
    id: &str,
) -> Option<&'a NavigationSection> {
    flatten(sections)
        .into_iter()
        .find(|entry| entry.section.id == id)
        .map(|entry| entry.section)
}

pub fn all_section_ids(sections: &[NavigationSection]) -> Vec<&'static str> {
    flatten(sections)
        .into_iter()
        .map(|entry| entry.section.id)
        .collect()
}

/// Ids of sections with children in the first [`DEFAULT_EXPANDED_LEVELS`]
/// levels
pub fn default_expanded(sections: &[NavigationSection]) -> HashSet<String> {
    flatten(sections)
        .into_iter()
        .filter(|entry| entry.depth < DEFAULT_EXPANDED_LEVELS && entry.section.has_children())
        .map(|entry| entry.section.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> Vec<NavigationSection> {
        vec![
            NavigationSection::new("a", "a").children(vec![
                NavigationSection::new("a1", "a1").children(vec![NavigationSection::new(
                    "a1x", "a1x",
                )
                .children(vec![NavigationSection::new("a1xy", "a1xy")])]),
                NavigationSection::new("a2", "a2"),
            ]),
            NavigationSection::new("b", "b"),
        ]
    }

    #[test]
    fn test_flatten_is_pre_order_with_depth() {
        let outline = outline();
        let flat: Vec<(&str, usize)> = flatten(&outline)
            .iter()
            .map(|e| (e.section.id, e.depth))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("a", 0),
                ("a1", 1),
                ("a1x", 2),
                ("a1xy", 3),
                ("a2", 1),
                ("b", 0)
            ]
        );
    }

    #[test]
    fn test_default_expanded_covers_two_levels() {
        let outline = outline();
        let expanded = default_expanded(&outline);
        assert!(expanded.contains("a"));
        assert!(expanded.contains("a1"));
        assert!(!expanded.contains("a1x"));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_visible_sections_respects_expansion() {
        let outline = outline();
        let expanded = default_expanded(&outline);
        let ids: Vec<&str> = visible_sections(&outline, &expanded)
            .iter()
            .map(|e| e.section.id)
            .collect();
        assert_eq!(ids, vec!["a", "a1", "a1x", "a2", "b"]);

        let ids: Vec<&str> = visible_sections(&outline, &HashSet::new())
            .iter()
            .map(|e| e.section.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_find_section_by_id() {
        let outline = outline();
        assert_eq!(find_section_by_id(&outline, "a1xy").map(|s| s.id), Some("a1xy"));
        assert!(find_section_by_id(&outline, "zzz").is_none());
    }

    #[test]
    fn test_body_text_fallbacks() {
        let bare = NavigationSection::new("x", "x");
        assert_eq!(bare.body_text(), DEFAULT_DOCUMENTATION);
        let described = NavigationSection::new("x", "x").description("short");
        assert_eq!(described.body_text(), "short");
        let documented = described.documentation("long");
        assert_eq!(documented.body_text(), "long");
    }

    #[test]
    fn test_reference_outline_ids_are_unique() {
        let ids = all_section_ids(reference_sections());
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.first(), Some(&"opencli"));
    }

    #[test]
    fn test_reference_outline_shape() {
        let sections = reference_sections();
        let top: Vec<&str> = sections.iter().map(|s| s.id).collect();
        assert_eq!(
            top,
            vec![
                "opencli",
                "info",
                "externalDocs",
                "platforms",
                "environment",
                "tags",
                "commands",
                "components"
            ]
        );
        let schema = find_section_by_id(sections, "parameter-schema").unwrap();
        assert_eq!(schema.children.len(), 5);
        assert!(find_section_by_id(sections, "opencli").unwrap().required);
    }
}
