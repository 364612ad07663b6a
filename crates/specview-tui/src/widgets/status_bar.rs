//! Status bar widget
//!
//! Shows the transient status message when there is one, otherwise the
//! keys that do something on the current page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use specview_app::reference_state::ReferenceFocus;
use specview_app::state::AppState;
use specview_app::viewer_state::{LoadState, RawSource};
use specview_app::Page;

use crate::theme::styles;

/// Status bar widget showing the status message or key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Key hints for the current page, as `(key, action)` pairs
    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();
        match self.state.page {
            Page::Home => hints.push(("Enter", "Specification")),
            Page::Spec => {
                if let Some(viewer) = &self.state.viewer {
                    match &viewer.load {
                        LoadState::Loading => {}
                        LoadState::Failed(_) => hints.push(("r", "Retry")),
                        LoadState::Loaded(_) => {
                            hints.push(("v", "View"));
                            match viewer.view_mode.source_format() {
                                None => {
                                    hints.push(("Enter", "Toggle"));
                                    hints.push(("h/l", "Collapse/Expand"));
                                }
                                Some(format) => {
                                    if matches!(viewer.raw.get(format), RawSource::Failed(_)) {
                                        hints.push(("r", "Retry"));
                                    }
                                }
                            }
                            hints.push(("j/k", "Move"));
                        }
                    }
                }
            }
            Page::Reference => {
                if let Some(reference) = &self.state.reference {
                    if reference.narrow {
                        hints.push(("n", "Contents"));
                    } else {
                        hints.push(("Tab", "Focus"));
                    }
                    if reference.focus == ReferenceFocus::Navigator && reference.navigator_visible()
                    {
                        hints.push(("Enter", "Go to"));
                        hints.push(("Space", "Fold"));
                    }
                    hints.push(("y", "Copy example"));
                    hints.push(("j/k", "Scroll"));
                }
            }
        }
        hints.push(("]/[", "Page"));
        hints.push(("q", "Quit"));
        hints
    }

    fn hints_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.key_hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match &self.state.status {
            Some(status) => {
                let (icon, style) = styles::status_indicator(status.kind);
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(status.text.clone(), style),
                ])
            }
            None => self.hints_line(),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
