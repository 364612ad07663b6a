use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use specview_core::FlatSection;

use crate::theme::{icons::IconSet, palette, styles};

/// Collapsible outline of the reference sections
pub struct Navigator<'a> {
    entries: &'a [FlatSection<'static>],
    expanded: &'a HashSet<String>,
    selected: usize,
    active: &'a str,
    focused: bool,
    icons: IconSet,
}

impl<'a> Navigator<'a> {
    pub fn new(
        entries: &'a [FlatSection<'static>],
        expanded: &'a HashSet<String>,
        icons: IconSet,
    ) -> Self {
        Self {
            entries,
            expanded,
            selected: 0,
            active: "",
            focused: false,
            icons,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Id of the section currently in view
    pub fn active(mut self, active: &'a str) -> Self {
        self.active = active;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn entry_line(&self, entry: &FlatSection<'static>) -> Line<'static> {
        let section = entry.section;
        let toggle = if !section.has_children() {
            "  "
        } else if self.expanded.contains(section.id) {
            self.icons.chevron_down()
        } else {
            self.icons.chevron_right()
        };
        let title_style = if section.id == self.active {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::raw(" ".repeat(1 + entry.depth * 2)),
            Span::styled(format!("{:<2}", toggle), styles::text_muted()),
            Span::styled(section.title, title_style),
        ];
        if section.required {
            spans.push(Span::styled(
                " *",
                Style::default().fg(palette::BADGE_REQUIRED),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for Navigator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(
                format!(" {} Contents ", self.icons.book()),
                styles::text_secondary(),
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        if height == 0 {
            return;
        }
        let offset = self.selected.saturating_sub(height - 1);
        let selected_style = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };

        let visible = self.entries.iter().enumerate().skip(offset).take(height);
        for (y, (index, entry)) in (inner.y..).zip(visible) {
            buf.set_line(inner.x, y, &self.entry_line(entry), inner.width);
            if index == self.selected {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), selected_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use specview_app::config::IconMode;
    use specview_core::{default_expanded, reference_sections, visible_sections};

    fn render(expanded: &HashSet<String>, selected: usize, height: u16) -> TestTerminal {
        let entries = visible_sections(reference_sections(), expanded);
        let mut term = TestTerminal::with_size(34, height);
        term.render_widget(
            Navigator::new(&entries, expanded, IconSet::new(IconMode::Unicode))
                .selected(selected)
                .active("info")
                .focused(true),
            term.area(),
        );
        term
    }

    #[test]
    fn test_navigator_lists_top_level_sections() {
        let term = render(&HashSet::new(), 0, 14);
        assert!(term.buffer_contains("Contents"));
        assert!(term.buffer_contains("opencli *"));
        assert!(term.buffer_contains("▸ info *"));
        assert!(term.buffer_contains("components"));
        assert!(!term.buffer_contains("title"));
    }

    #[test]
    fn test_expanded_sections_show_children() {
        let expanded = default_expanded(reference_sections());
        let term = render(&expanded, 0, 30);
        assert!(term.buffer_contains("▾ info *"));
        assert!(term.buffer_contains("title *"));
    }

    #[test]
    fn test_selection_stays_in_view() {
        let expanded = default_expanded(reference_sections());
        let entries = visible_sections(reference_sections(), &expanded);
        let last = entries.len() - 1;
        let term = render(&expanded, last, 6);

        let title = entries[last].section.title;
        assert!(term.buffer_contains(title));
    }
}
