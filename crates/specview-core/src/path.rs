//! Path addressing for document nodes
//!
//! A [`PathKey`] names a node by the route taken from the document root.
//! Mapping keys and sequence indices are joined with `.`; indices are
//! written as `[i]`. The same textual form is used for expansion-set
//! membership and for locating rows in the rendered tree.
//!
//! Key segments are escaped so that distinct children of the same parent
//! never collide: `\`, `.` and `[` are prefixed with a backslash and the
//! empty key is written as `\_`. A mapping key `"0"` is therefore `0`
//! while sequence index 0 is `[0]`.

use std::fmt;

/// Display name of the root node
pub const ROOT_LABEL: &str = "root";

/// One step of a path: a mapping key or a sequence index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Human-readable label (`name` or `[3]`)
    pub fn label(&self) -> String {
        match self {
            PathSegment::Key(key) if key.is_empty() => "\"\"".to_string(),
            PathSegment::Key(key) => key.clone(),
            PathSegment::Index(index) => format!("[{}]", index),
        }
    }

    fn encode_into(&self, out: &mut String) {
        match self {
            PathSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
            PathSegment::Key(key) if key.is_empty() => out.push_str("\\_"),
            PathSegment::Key(key) => {
                for c in key.chars() {
                    if matches!(c, '\\' | '.' | '[') {
                        out.push('\\');
                    }
                    out.push(c);
                }
            }
        }
    }
}

/// Unique, stable address of a node within a document
///
/// Only constructed through [`PathKey::root`], [`PathKey::child`] and
/// [`PathKey::parse`], so the inner string is always well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(String);

impl PathKey {
    /// The document root (empty address, displayed as `root`)
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical textual form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address of a child of this node
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut out = String::with_capacity(self.0.len() + 8);
        out.push_str(&self.0);
        if !self.0.is_empty() {
            out.push('.');
        }
        segment.encode_into(&mut out);
        Self(out)
    }

    /// Address of the mapping entry `name` under this node
    pub fn key(&self, name: &str) -> Self {
        self.child(PathSegment::Key(name.to_string()))
    }

    /// Address of the sequence element `index` under this node
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Parse a canonical path string, rejecting malformed input
    pub fn parse(text: &str) -> Option<Self> {
        parse_segments(text).map(|_| Self(text.to_string()))
    }

    /// Decode the path back into its segments
    pub fn segments(&self) -> Vec<PathSegment> {
        parse_segments(&self.0).unwrap_or_default()
    }

    /// Number of segments (0 for root)
    pub fn depth(&self) -> usize {
        self.segments().len()
    }

    /// Label of the last segment, or `root`
    pub fn label(&self) -> String {
        self.segments()
            .last()
            .map(PathSegment::label)
            .unwrap_or_else(|| ROOT_LABEL.to_string())
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut segments = self.segments();
        segments.pop();
        Some(Self::from_segments(segments))
    }

    /// Every proper ancestor, starting with root
    pub fn ancestors(&self) -> Vec<Self> {
        let segments = self.segments();
        let mut current = Self::root();
        let mut out = Vec::with_capacity(segments.len());
        for segment in segments {
            let next = current.child(segment);
            out.push(current);
            current = next;
        }
        out
    }

    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        segments
            .into_iter()
            .fold(Self::root(), |path, segment| path.child(segment))
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str(ROOT_LABEL)
        } else {
            f.write_str(&self.0)
        }
    }
}

fn parse_segments(text: &str) -> Option<Vec<PathSegment>> {
    let mut segments = Vec::new();
    if text.is_empty() {
        return Some(segments);
    }

    let mut chars = text.chars().peekable();
    loop {
        if chars.peek() == Some(&'[') {
            chars.next();
            let mut digits = String::new();
            loop {
                match chars.next()? {
                    ']' => break,
                    c if c.is_ascii_digit() => digits.push(c),
                    _ => return None,
                }
            }
            segments.push(PathSegment::Index(digits.parse().ok()?));
        } else {
            let mut key = String::new();
            let mut empty_marker = false;
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                chars.next();
                if c == '\\' {
                    match chars.next()? {
                        '_' => empty_marker = true,
                        escaped => key.push(escaped),
                    }
                } else {
                    key.push(c);
                }
            }
            if key.is_empty() && !empty_marker {
                return None;
            }
            segments.push(PathSegment::Key(key));
        }

        match chars.next() {
            None => return Some(segments),
            Some('.') => continue,
            Some(_) => return None,
        }
    }
}
