//! Document model for parsed specification files
//!
//! [`DocumentNode`] is the in-memory form of a fetched YAML document. It is
//! built once by [`parse_document`] and treated as read-only afterwards.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::{PathKey, PathSegment};

/// A numeric scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(n) if n.is_nan() => f.write_str(".nan"),
            Number::Float(n) if n.is_infinite() && *n > 0.0 => f.write_str(".inf"),
            Number::Float(n) if n.is_infinite() => f.write_str("-.inf"),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Number::Integer(n) => serializer.serialize_i64(*n),
            Number::Float(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<&serde_yaml::Number> for Number {
    fn from(n: &serde_yaml::Number) -> Self {
        match n.as_i64() {
            Some(i) => Number::Integer(i),
            None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

/// A node of a parsed document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentNode {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    Seq(Vec<DocumentNode>),
    /// Mapping with insertion order preserved
    Map(IndexMap<String, DocumentNode>),
}

impl DocumentNode {
    /// True for non-empty sequences and mappings
    pub fn is_expandable(&self) -> bool {
        match self {
            DocumentNode::Seq(items) => !items.is_empty(),
            DocumentNode::Map(entries) => !entries.is_empty(),
            _ => false,
        }
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        match self {
            DocumentNode::Seq(items) => items.len(),
            DocumentNode::Map(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty-printed JSON, keys in document order
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Inline rendering shown next to a row's label
    ///
    /// Scalars render literally (strings quoted), empty containers as `[]`
    /// or `{}`. Non-empty containers have no inline value.
    pub fn inline_value(&self) -> Option<String> {
        match self {
            DocumentNode::Null => Some("null".to_string()),
            DocumentNode::Bool(b) => Some(b.to_string()),
            DocumentNode::Number(n) => Some(n.to_string()),
            DocumentNode::Str(s) => Some(format!("\"{}\"", s)),
            DocumentNode::Seq(items) if items.is_empty() => Some("[]".to_string()),
            DocumentNode::Map(entries) if entries.is_empty() => Some("{}".to_string()),
            DocumentNode::Seq(_) | DocumentNode::Map(_) => None,
        }
    }

    /// Direct children in display order, paired with their path segment
    pub fn children(&self) -> Children<'_> {
        match self {
            DocumentNode::Seq(items) => Children::Seq(items.iter().enumerate()),
            DocumentNode::Map(entries) => Children::Map(entries.iter()),
            _ => Children::Empty,
        }
    }

    /// Look up a descendant by path
    pub fn get(&self, path: &PathKey) -> Option<&DocumentNode> {
        path.segments()
            .iter()
            .try_fold(self, |node, segment| match (node, segment) {
                (DocumentNode::Map(entries), PathSegment::Key(key)) => entries.get(key),
                (DocumentNode::Seq(items), PathSegment::Index(index)) => items.get(*index),
                _ => None,
            })
    }
}

/// Iterator over a node's direct children
pub enum Children<'a> {
    Seq(std::iter::Enumerate<std::slice::Iter<'a, DocumentNode>>),
    Map(indexmap::map::Iter<'a, String, DocumentNode>),
    Empty,
}

impl<'a> Iterator for Children<'a> {
    type Item = (PathSegment, &'a DocumentNode);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Seq(iter) => iter
                .next()
                .map(|(index, node)| (PathSegment::Index(index), node)),
            Children::Map(iter) => iter
                .next()
                .map(|(key, node)| (PathSegment::Key(key.clone()), node)),
            Children::Empty => None,
        }
    }
}

impl TryFrom<serde_yaml::Value> for DocumentNode {
    type Error = Error;

    /// Fails when two keys of one mapping stringify to the same text
    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        use serde_yaml::Value;

        Ok(match value {
            Value::Null => DocumentNode::Null,
            Value::Bool(b) => DocumentNode::Bool(b),
            Value::Number(n) => DocumentNode::Number(Number::from(&n)),
            Value::String(s) => DocumentNode::Str(s),
            Value::Sequence(items) => DocumentNode::Seq(
                items
                    .into_iter()
                    .map(DocumentNode::try_from)
                    .collect::<Result<_>>()?,
            ),
            Value::Mapping(mapping) => {
                let mut entries = IndexMap::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let key = key_to_string(key);
                    if entries.contains_key(&key) {
                        return Err(Error::duplicate_key(key));
                    }
                    entries.insert(key, DocumentNode::try_from(value)?);
                }
                DocumentNode::Map(entries)
            }
            Value::Tagged(tagged) => DocumentNode::try_from(tagged.value)?,
        })
    }
}

/// Mapping keys are displayed as text regardless of their YAML type
fn key_to_string(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Parse YAML text into a document
///
/// Merge keys (`<<`) are applied. The top level must be a mapping; scalars
/// and sequences are rejected with [`Error::InvalidStructure`].
pub fn parse_document(text: &str) -> Result<DocumentNode> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    match DocumentNode::try_from(value)? {
        node @ DocumentNode::Map(_) => Ok(node),
        _ => Err(Error::InvalidStructure),
    }
}
