//! Error boundary panel
//!
//! Replaces the whole UI after a panic was caught while drawing a frame.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::overlay::{centered_rect, dim_background, lift};
use crate::theme::{icons::IconSet, styles};

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 11;

pub struct CrashPanel<'a> {
    message: &'a str,
    icons: IconSet,
}

impl<'a> CrashPanel<'a> {
    pub fn new(message: &'a str, icons: IconSet) -> Self {
        Self { message, icons }
    }
}

impl Widget for CrashPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);
        let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        lift(buf, panel);

        let block = styles::modal_block("");
        let inner = block.inner(panel);
        block.render(panel, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::styled(" Something went wrong", styles::text_bright()),
            ]),
            Line::default(),
            Line::styled(
                "The viewer hit an unexpected error while drawing.",
                styles::text_secondary(),
            ),
            Line::styled(self.message, styles::text_muted()),
            Line::default(),
            Line::from(vec![
                Span::styled("r", styles::keybinding()),
                Span::styled(
                    format!(" {} Reload    ", self.icons.refresh()),
                    styles::text_secondary(),
                ),
                Span::styled("q", styles::keybinding()),
                Span::styled(" Quit", styles::text_secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
