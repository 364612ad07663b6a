use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use specview_app::viewer_state::ViewMode;

use crate::theme::{icons::IconSet, styles};

/// View-mode selector plus the actions available in the current mode
pub struct Toolbar {
    mode: ViewMode,
    icons: IconSet,
}

impl Toolbar {
    pub fn new(mode: ViewMode, icons: IconSet) -> Self {
        Self { mode, icons }
    }

    fn mode_key(mode: ViewMode) -> &'static str {
        match mode {
            ViewMode::Tree => "T",
            ViewMode::Yaml => "Y",
            ViewMode::Json => "J",
        }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for mode in ViewMode::ALL {
            let style = if mode == self.mode {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(
                format!(" {} {} ", Self::mode_key(mode), mode.label()),
                style,
            ));
        }

        spans.push(Span::styled("  │ ", styles::text_muted()));
        let mut action = |key: &'static str, label: String| {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_secondary()));
        };
        let format = self.mode.export_format().label();
        action("y", format!("{} Copy {}", self.icons.copy(), format));
        action("d", format!("{} Download {}", self.icons.download(), format));
        if self.mode == ViewMode::Tree {
            action("e", "Expand all".to_string());
            action("c", "Collapse all".to_string());
        }
        Line::from(spans)
    }
}

impl Widget for Toolbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use specview_app::config::IconMode;

    fn render(mode: ViewMode) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(
            Toolbar::new(mode, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_tree_mode_offers_bulk_operations() {
        let term = render(ViewMode::Tree);
        assert!(term.buffer_contains("T Tree"));
        assert!(term.buffer_contains("Copy YAML"));
        assert!(term.buffer_contains("Expand all"));
        assert!(term.buffer_contains("Collapse all"));
    }

    #[test]
    fn test_raw_mode_hides_bulk_operations() {
        let term = render(ViewMode::Json);
        assert!(term.buffer_contains("Copy JSON"));
        assert!(term.buffer_contains("Download JSON"));
        assert!(!term.buffer_contains("Expand all"));
    }

    #[test]
    fn test_json_toolbar_layout() {
        let term = render(ViewMode::Json);
        insta::assert_snapshot!(
            term.line(0).trim_start(),
            @"T Tree  Y YAML  J JSON   │ y ⎘ Copy JSON  d ↓ Download JSON"
        );
    }
}
