//! Test helpers for widget and view rendering

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use specview_app::config::{Settings, SourceSettings};
use specview_app::{AppState, Page, SourceSet};

/// Terminal over an in-memory buffer
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        Self { terminal }
    }

    /// Small terminal for layout edge cases
    pub fn compact() -> Self {
        Self::with_size(40, 12)
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw");
    }

    pub fn draw(&mut self, f: impl FnOnce(&mut Frame)) {
        self.terminal.draw(f).expect("draw");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer text, one line per row with trailing spaces trimmed
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                let row: String = (area.x..area.x + area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect();
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Text of a single row
    pub fn line(&self, y: u16) -> String {
        self.content()
            .lines()
            .nth(y as usize)
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// App state whose sources point at a directory nothing reads from
pub fn test_app_state(page: Page) -> AppState {
    let sources = SourceSet::resolve("/nonexistent/specview", &SourceSettings::default())
        .expect("directory sources always resolve");
    AppState::new(Settings::default(), sources, page)
}
