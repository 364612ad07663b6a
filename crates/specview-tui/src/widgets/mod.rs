//! Custom widget components

mod crash_panel;
mod header;
mod home;
pub mod overlay;
pub mod reference;
pub mod spec_viewer;
mod status_bar;

pub use crash_panel::CrashPanel;
pub use header::MainHeader;
pub use home::HomePage;
pub use reference::{DocBody, Navigator};
pub use spec_viewer::{SourceListing, StatePanel, Toolbar, TreeView};
pub use status_bar::StatusBar;
