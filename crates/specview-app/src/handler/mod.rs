//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page
//! - `scroll`: Scroll messages routed by page, view mode and focus
//! - `viewer`: Spec viewer mount, fetch results, view modes and exports
//! - `reference`: Reference page navigator and clipboard

pub(crate) mod keys;
pub(crate) mod reference;
pub(crate) mod scroll;
pub(crate) mod update;
pub(crate) mod viewer;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::message::Message;
use crate::source::{SourceFormat, SourceLocation};
use crate::viewer_state::MountId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch and parse the primary document for a viewer mount
    FetchDocument {
        mount: MountId,
        location: SourceLocation,
    },

    /// Fetch a raw listing verbatim
    FetchRawSource {
        mount: MountId,
        format: SourceFormat,
        location: SourceLocation,
    },

    /// Write text through the clipboard port
    ///
    /// `label` names the content in the resulting status message.
    CopyToClipboard { text: String, label: String },

    /// Write text to a file
    SaveDownload { text: String, path: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}

impl From<Option<UpdateAction>> for UpdateResult {
    fn from(action: Option<UpdateAction>) -> Self {
        Self {
            message: None,
            action,
        }
    }
}
