use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Read-only raw source text with a line-number gutter
pub struct SourceListing<'a> {
    text: &'a str,
    scroll: usize,
}

impl<'a> SourceListing<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Digits needed for the largest line number, at least 3
fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len().max(3)
}

impl Widget for SourceListing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = gutter_width(self.text.lines().count());
        let number_style = Style::default().fg(palette::LINE_NUMBER);

        let visible = self
            .text
            .lines()
            .enumerate()
            .skip(self.scroll)
            .take(area.height as usize);

        for (y, (index, text)) in (area.y..).zip(visible) {
            let line = Line::from(vec![
                Span::styled(format!("{:>width$} ", index + 1), number_style),
                Span::styled("│ ", styles::text_muted()),
                Span::styled(text.replace('\t', "    "), styles::text_primary()),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
