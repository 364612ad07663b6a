//! # specview-core - Core Domain Types
//!
//! Foundation crate for specview. Provides the document model, path
//! addressing, expansion state, the visible-row tree model, the static
//! reference outline, scroll synchronization helpers, error handling and
//! logging.
//!
//! This crate has **zero internal dependencies**; it only depends on
//! external crates (serde, serde_yaml, indexmap, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Document Model (`document`)
//! - [`DocumentNode`] - Parsed YAML value with ordered mappings
//! - [`parse_document()`] - Parse text, requiring a top-level mapping
//!
//! ### Path Addressing (`path`)
//! - [`PathKey`] - Unique, stable address of a node
//! - [`PathSegment`] - Mapping key or sequence index
//!
//! ### Tree (`expansion`, `tree`)
//! - [`ExpansionState`] - Set of expanded paths, always containing root
//! - [`visible_rows()`] - Rows shown for a document and expansion state
//!
//! ### Reference Outline (`navigation`, `scroll_sync`)
//! - [`NavigationSection`] - Static documentation outline entry
//! - [`nearest_anchor_above()`] - Active-section lookup for a scroll position
//! - [`Throttle`] - Timestamp-based rate limiter with trailing edge
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use specview_core::prelude::*;
//! ```

pub mod document;
pub mod error;
pub mod expansion;
pub mod logging;
pub mod navigation;
pub mod path;
pub mod prelude;
pub mod scroll_sync;
pub mod tree;

// Re-export commonly used types at crate root for convenience
pub use document::{parse_document, DocumentNode, Number};
pub use error::{Error, Result, ResultExt};
pub use expansion::ExpansionState;
pub use navigation::{
    default_expanded, find_section_by_id, flatten, reference_sections, specification_structure,
    visible_sections, FlatSection, NavigationSection,
};
pub use path::{PathKey, PathSegment};
pub use scroll_sync::{nearest_anchor_above, Anchor, Throttle};
pub use tree::{all_paths, row_index, rows_to_text, visible_rows, TreeRow};
