//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::reference_state::ReferenceState;
use crate::source::SourceSet;
use crate::viewer_state::{MountId, SpecViewerState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Top-level page shown under the header tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Spec,
    Reference,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Spec, Page::Reference];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Spec => "Specification",
            Page::Reference => "Reference",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::Spec,
            Page::Spec => Page::Reference,
            Page::Reference => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Reference,
            Page::Spec => Page::Home,
            Page::Reference => Page::Spec,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

/// Transient message in the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Page currently shown
    pub page: Page,

    /// Page shown after startup and after a reload
    pub initial_page: Page,

    /// Application settings from config file
    pub settings: Settings,

    /// Resolved document and raw listing locations
    pub sources: SourceSet,

    /// Mounted spec viewer, present only while the Spec page is shown
    pub viewer: Option<SpecViewerState>,

    /// Mounted reference page, present only while it is shown
    pub reference: Option<ReferenceState>,

    pub status: Option<StatusMessage>,

    /// Panic message caught while drawing; replaces the whole UI
    pub crash: Option<String>,

    next_mount: u64,
}

impl AppState {
    pub fn new(settings: Settings, sources: SourceSet, initial_page: Page) -> Self {
        Self {
            phase: AppPhase::Running,
            page: Page::Home,
            initial_page,
            settings,
            sources,
            viewer: None,
            reference: None,
            status: None,
            crash: None,
            next_mount: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Replace the spec viewer with a fresh mount
    pub fn mount_viewer(&mut self) -> MountId {
        self.next_mount += 1;
        let mount = MountId(self.next_mount);
        self.viewer = Some(SpecViewerState::new(mount));
        mount
    }

    /// Viewer for `mount`, if that mount is still the current one
    pub fn viewer_for(&mut self, mount: MountId) -> Option<&mut SpecViewerState> {
        self.viewer.as_mut().filter(|viewer| viewer.mount == mount)
    }

    pub fn mount_reference(&mut self) {
        self.reference = Some(ReferenceState::new(&self.settings.reference));
    }

    /// Reset everything except configuration, as on a fresh start
    pub fn reset(&mut self) {
        self.page = Page::Home;
        self.viewer = None;
        self.reference = None;
        self.status = None;
        self.crash = None;
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: now + self.status_duration(),
        });
    }

    fn status_duration(&self) -> Duration {
        self.settings.ui.status_duration()
    }

    pub fn clear_expired_status(&mut self, now: Instant) {
        if matches!(&self.status, Some(status) if now >= status.expires_at) {
            self.status = None;
        }
    }
}
