//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use specview_core::DocumentNode;

use crate::input_key::InputKey;
use crate::source::SourceFormat;
use crate::state::Page;
use crate::viewer_state::{MountId, ViewMode};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animations, deferred reveals and throttles
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    SwitchPage(Page),
    NextPage,
    PreviousPage,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages (routed by page, view mode and focus)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Spec Viewer Messages
    // ─────────────────────────────────────────────────────────
    /// Primary document fetched and parsed
    DocumentLoaded {
        mount: MountId,
        document: DocumentNode,
    },

    /// Primary document fetch or parse failed
    DocumentLoadFailed { mount: MountId, error: String },

    /// Remount the viewer and fetch again
    RetryLoad,

    /// Toggle the row under the cursor
    ToggleSelected,
    /// Right / l
    ExpandSelected,
    /// Left / h
    CollapseSelected,
    ExpandAll,
    CollapseAll,

    SetViewMode(ViewMode),
    CycleViewMode,

    RawSourceLoaded {
        mount: MountId,
        format: SourceFormat,
        text: String,
    },
    RawSourceFailed {
        mount: MountId,
        format: SourceFormat,
        error: String,
    },
    /// Re-fetch the failed listing of the active mode
    RetryRawSource,
    /// Run the next copy/download whose listing has arrived
    FlushExports { mount: MountId },

    /// Copy the raw text of the active format
    CopyCurrent,
    /// Save the raw text of the active format
    DownloadCurrent,

    // ─────────────────────────────────────────────────────────
    // Reference Page Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll to the navigator section under the cursor
    ActivateSection,
    /// Expand or collapse the navigator subtree under the cursor
    ToggleSection,
    ExpandSection,
    CollapseSection,
    /// `n`: overlay on narrow terminals, focus on wide ones
    ToggleNavigator,
    CloseNavigator,
    SwitchFocus,
    /// Copy the active section's example
    CopyExample,

    // ─────────────────────────────────────────────────────────
    // Background Task Results
    // ─────────────────────────────────────────────────────────
    CopyCompleted { label: String },
    CopyFailed { label: String, error: String },
    DownloadCompleted { path: PathBuf },
    DownloadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Error Boundary
    // ─────────────────────────────────────────────────────────
    /// A frame panicked while drawing
    RenderPanicked { message: String },
    /// Start over with fresh state
    ReloadApp,
}
