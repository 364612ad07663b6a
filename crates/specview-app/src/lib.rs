//! specview-app - Application state and orchestration for specview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] enum, the `update`
//! function and the background actions it requests. It also owns
//! configuration loading, source resolution and fetching, and the
//! clipboard port.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod reference_state;
pub mod signals;
pub mod source;
pub mod state;
pub mod viewer_state;

// Re-export primary types
pub use actions::Services;
pub use clipboard::{ClipboardPort, FallbackClipboard};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use source::{SourceClient, SourceFetcher, SourceFormat, SourceLocation, SourceSet};
pub use state::{AppState, Page};
