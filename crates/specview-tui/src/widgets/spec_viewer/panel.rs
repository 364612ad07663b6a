use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Centered placeholder for loading and failure states
pub struct StatePanel<'a> {
    title: Line<'a>,
    message: Option<&'a str>,
    retry_hint: bool,
}

impl<'a> StatePanel<'a> {
    pub fn loading(text: &'a str, icon: &'a str) -> Self {
        Self {
            title: Line::from(vec![
                Span::styled(icon, styles::accent()),
                Span::raw(" "),
                Span::styled(text, styles::text_secondary()),
            ]),
            message: None,
            retry_hint: false,
        }
    }

    /// Error title and message with a retry hint
    pub fn error(title: &'a str, message: &'a str, icon: &'a str) -> Self {
        let style = styles::status_red();
        Self {
            title: Line::from(vec![
                Span::styled(icon, style),
                Span::raw(" "),
                Span::styled(title, style.add_modifier(Modifier::BOLD)),
            ]),
            message: Some(message),
            retry_hint: true,
        }
    }
}

impl Widget for StatePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.title, Line::default()];
        if let Some(message) = self.message {
            lines.push(Line::styled(message, styles::text_primary()));
            lines.push(Line::default());
        }
        if self.retry_hint {
            lines.push(Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                Span::styled("r", styles::keybinding()),
                Span::styled(" to retry", styles::text_muted()),
            ]));
        }

        let height = (lines.len() as u16).min(area.height);
        let top = area.y + area.height.saturating_sub(height) / 2;
        let centered = Rect::new(area.x, top, area.width, area.height - (top - area.y));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_error_panel_shows_message_and_retry() {
        let mut term = TestTerminal::new();
        term.render_widget(
            StatePanel::error(
                "Error Loading Specification",
                "Failed to load specification: HTTP 404 Not Found",
                "!",
            ),
            term.area(),
        );

        assert!(term.buffer_contains("Error Loading Specification"));
        assert!(term.buffer_contains("HTTP 404 Not Found"));
        assert!(term.buffer_contains("Press r to retry"));
    }

    #[test]
    fn test_loading_panel_has_no_retry() {
        let mut term = TestTerminal::new();
        term.render_widget(
            StatePanel::loading("Loading specification...", "~"),
            term.area(),
        );

        assert!(term.buffer_contains("Loading specification..."));
        assert!(!term.buffer_contains("retry"));
    }
}
