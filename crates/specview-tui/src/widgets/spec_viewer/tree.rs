use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use specview_core::TreeRow;

use crate::theme::{icons::IconSet, styles};

/// Visible tree rows, scrolled to `scroll_offset`
pub struct TreeView<'a> {
    rows: &'a [TreeRow],
    selected: usize,
    scroll_offset: usize,
    indent: usize,
    icons: IconSet,
}

impl<'a> TreeView<'a> {
    pub fn new(rows: &'a [TreeRow], icons: IconSet) -> Self {
        Self {
            rows,
            selected: 0,
            scroll_offset: 0,
            indent: 2,
            icons,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn scroll_offset(mut self, scroll_offset: usize) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// Columns per depth level
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn row_line(&self, row: &'a TreeRow, width: usize) -> Line<'a> {
        let toggle = match (row.expandable, row.expanded) {
            (true, true) => format!("{} ", self.icons.chevron_down()),
            (true, false) => format!("{} ", self.icons.chevron_right()),
            (false, _) => "  ".to_string(),
        };
        let label_style = if row.expandable {
            styles::text_bright()
        } else {
            styles::text_primary()
        };

        let prefix = row.depth * self.indent + 2 + row.label.width() + 2;
        let mut spans = vec![
            Span::raw(" ".repeat(row.depth * self.indent)),
            Span::styled(toggle, styles::accent()),
            Span::styled(row.label.as_str(), label_style),
        ];
        if let Some(value) = row.inline_value.as_deref() {
            spans.push(Span::styled(": ", styles::text_muted()));
            spans.push(Span::styled(
                ellipsize(value, width.saturating_sub(prefix)),
                styles::inline_value(value),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for TreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(area.height as usize);

        for (y, (index, row)) in (area.y..).zip(visible) {
            let line = self.row_line(row, area.width as usize);
            buf.set_line(area.x, y, &line, area.width);
            if index == self.selected {
                buf.set_style(Rect::new(area.x, y, area.width, 1), styles::focused_selected());
            }
        }
    }
}

/// Cut `text` to `max` columns, marking the cut with an ellipsis
fn ellipsize(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use specview_app::config::IconMode;
    use specview_core::{parse_document, visible_rows, ExpansionState, PathKey};

    fn scenario_rows(expand: &[PathKey]) -> Vec<TreeRow> {
        let document = parse_document("a: 1\nb: [2, 3]\nc: {d: \"x\"}\ne: []\n").unwrap();
        let mut expansion = ExpansionState::new();
        for path in expand {
            expansion.expand(path);
        }
        visible_rows(&document, &expansion)
    }

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_collapsed_rows_show_values_and_toggles() {
        let rows = scenario_rows(&[]);
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(TreeView::new(&rows, icons()), term.area());

        assert_eq!(term.line(0), "  a: 1");
        assert_eq!(term.line(1), "▸ b");
        assert_eq!(term.line(2), "▸ c");
        assert_eq!(term.line(3), "  e: []");
    }

    #[test]
    fn test_expanded_children_are_indented() {
        let rows = scenario_rows(&[PathKey::root().key("c")]);
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(TreeView::new(&rows, icons()).indent(4), term.area());

        assert_eq!(term.line(2), "▾ c");
        assert_eq!(term.line(3), "      d: \"x\"");
    }

    #[test]
    fn test_scroll_offset_skips_rows() {
        let rows = scenario_rows(&[PathKey::root().key("b")]);
        let mut term = TestTerminal::with_size(40, 2);
        term.render_widget(
            TreeView::new(&rows, icons()).scroll_offset(2).selected(2),
            term.area(),
        );

        assert_eq!(term.line(0), "    [0]: 2");
        assert_eq!(term.line(1), "    [1]: 3");
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let rows = scenario_rows(&[]);
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(TreeView::new(&rows, icons()).selected(1), term.area());

        let style = styles::focused_selected();
        assert_eq!(term.buffer()[(0, 1)].bg, style.bg.unwrap());
        assert_ne!(term.buffer()[(0, 0)].bg, style.bg.unwrap());
    }

    #[test]
    fn test_long_values_are_ellipsized() {
        let document = parse_document("title: abcdefghijklmnop\n").unwrap();
        let rows = visible_rows(&document, &ExpansionState::new());
        let mut term = TestTerminal::with_size(16, 1);
        term.render_widget(TreeView::new(&rows, icons()), term.area());

        assert_eq!(term.line(0), "  title: abcdef…");
    }

    #[test]
    fn test_ellipsize_counts_display_columns() {
        assert_eq!(ellipsize("short", 10), "short");
        assert_eq!(ellipsize("日本語テキスト", 5), "日本…");
        assert_eq!(ellipsize("abc", 0), "");
    }
}
