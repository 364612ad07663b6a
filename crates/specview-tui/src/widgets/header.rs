//! Header bar widget
//!
//! Shows the app title and the page tabs inside a glass container.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use specview_app::Page;

use crate::theme::{icons::IconSet, palette, styles};

const TITLE: &str = "OpenCLI Specification";

/// Main header showing app title and page tabs
pub struct MainHeader {
    page: Page,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(page: Page, icons: IconSet) -> Self {
        Self { page, icons }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| {
                Line::from(vec![
                    Span::styled(format!("{}", i + 1), styles::keybinding()),
                    Span::raw(format!(" {}", page.title())),
                ])
            })
            .collect()
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.terminal()), styles::accent()),
            Span::styled(TITLE, styles::accent_bold()),
        ]);
        let title_width = title.width() as u16 + 2;
        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(title_width), Constraint::Min(0)])
                .areas(inner);

        Paragraph::new(title).render(title_area, buf);

        let selected = Page::ALL.iter().position(|page| *page == self.page);
        Tabs::new(Self::tab_titles())
            .select(selected)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::text_muted()))
            .render(tabs_area, buf);
    }
}
