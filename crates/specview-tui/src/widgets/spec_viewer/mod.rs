//! Spec viewer widgets
//!
//! - `TreeView` - expandable document tree with a cursor
//! - `SourceListing` - line-numbered raw YAML/JSON text
//! - `Toolbar` - view-mode selector and toolbar actions
//! - `StatePanel` - loading and error placeholders

mod listing;
mod panel;
mod toolbar;
mod tree;

pub use listing::SourceListing;
pub use panel::StatePanel;
pub use toolbar::Toolbar;
pub use tree::TreeView;
