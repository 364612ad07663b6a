//! Helpers for panels drawn over other content
//!
//! Used by the crash panel and the narrow-terminal navigator overlay.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Mute everything under an overlay
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    buf.set_style(area.intersection(buf.area), dim);
}

/// Clear `area` and draw a one-cell shadow along its right and bottom edges
pub fn lift(buf: &mut Buffer, area: Rect) {
    let shadow = Rect::new(area.x + 1, area.y + 1, area.width, area.height);
    buf.set_style(
        shadow.intersection(buf.area),
        Style::default().bg(palette::SHADOW),
    );
    Clear.render(area.intersection(buf.area), buf);
}
