//! Home page: what OpenCLI is and where to go next

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

const TAGLINE: &str = "An open-source YAML specification for building standardized, \
self-documenting command-line interfaces that are ready for the AI era. Just as OpenAPI \
revolutionized REST APIs, OpenCLI brings consistency and automation to CLI development.";

const FEATURES: [(&str, &str); 3] = [
    ("AI Integration", "Perfect for MCP servers and AI assistants"),
    ("Auto Documentation", "Generate help, man pages, and guides"),
    ("Code Generation", "Create CLIs, completions, and tests"),
];

pub struct HomePage;

impl HomePage {
    fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("OpenCLI Specification", styles::accent_bold())),
            Line::default(),
            Line::from(Span::styled(TAGLINE, styles::text_primary())),
            Line::default(),
        ];

        for (title, text) in FEATURES {
            lines.push(Line::from(vec![
                Span::styled("  • ", styles::accent()),
                Span::styled(title, styles::text_bright()),
                Span::styled(format!("  {}", text), styles::text_secondary()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Press ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" to explore the specification, ", styles::text_muted()),
            Span::styled("3", styles::keybinding()),
            Span::styled(" for the reference", styles::text_muted()),
        ]));
        lines
    }
}

impl Widget for HomePage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let padded = Rect {
            x: inner.x.saturating_add(2),
            y: inner.y.saturating_add(1),
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(1),
        };
        Paragraph::new(Self::lines())
            .wrap(Wrap { trim: true })
            .render(padded, buf);
    }
}
