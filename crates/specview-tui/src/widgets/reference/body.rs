use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use specview_app::reference_state::{DocLayout, DocLine, DocLineKind};

use crate::theme::{palette, styles};

/// Columns between the pane border and the text
pub const BODY_PADDING: u16 = 1;

/// Documentation body rows starting at `scroll`
pub struct DocBody<'a> {
    layout: &'a DocLayout,
    scroll: usize,
    focused: bool,
}

impl<'a> DocBody<'a> {
    pub fn new(layout: &'a DocLayout) -> Self {
        Self {
            layout,
            scroll: 0,
            focused: false,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn doc_line(line: &'a DocLine) -> Line<'a> {
        match &line.kind {
            DocLineKind::Heading {
                depth,
                required,
                kind,
            } => {
                let title_style = match depth {
                    0 => styles::accent_bold().add_modifier(Modifier::UNDERLINED),
                    1 => styles::accent_bold(),
                    _ => styles::text_bright(),
                };
                let mut spans = vec![Span::styled(line.text.as_str(), title_style)];
                if *required {
                    spans.push(Span::styled(
                        " *",
                        Style::default().fg(palette::BADGE_REQUIRED),
                    ));
                }
                if let Some(kind) = kind {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        format!("[{}]", kind),
                        Style::default().fg(palette::BADGE_KIND),
                    ));
                }
                Line::from(spans)
            }
            DocLineKind::Text => Line::styled(line.text.as_str(), styles::text_primary()),
            DocLineKind::ExampleLabel => Line::styled(
                line.text.as_str(),
                styles::text_muted().add_modifier(Modifier::ITALIC),
            ),
            DocLineKind::Code => Line::styled(
                format!("  {}", line.text),
                Style::default()
                    .fg(palette::VALUE_STRING)
                    .bg(palette::CODE_BG),
            ),
            DocLineKind::Blank => Line::default(),
        }
    }
}

impl Widget for DocBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_area = Rect {
            x: inner.x.saturating_add(BODY_PADDING),
            width: inner.width.saturating_sub(BODY_PADDING * 2),
            ..inner
        };

        let visible = self
            .layout
            .lines
            .iter()
            .skip(self.scroll)
            .take(text_area.height as usize);
        for (y, line) in (text_area.y..).zip(visible) {
            if line.kind == DocLineKind::Code {
                buf.set_style(
                    Rect::new(text_area.x, y, text_area.width, 1),
                    Style::default().bg(palette::CODE_BG),
                );
            }
            buf.set_line(text_area.x, y, &Self::doc_line(line), text_area.width);
        }
    }
}
