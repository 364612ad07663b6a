//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use specview_app::state::StatusKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Keybinding hint style
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row in a pane without focus
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::BORDER_DIM)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status line ---

/// Icon and style for a transient status message
pub fn status_indicator(kind: StatusKind) -> (&'static str, Style) {
    match kind {
        StatusKind::Success => ("✓", Style::default().fg(palette::STATUS_GREEN)),
        StatusKind::Info => ("ℹ", Style::default().fg(palette::STATUS_BLUE)),
        StatusKind::Error => (
            "✗",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

// --- Tree values ---

/// Style for an inline scalar as rendered by the tree model
pub fn inline_value(text: &str) -> Style {
    let color = match text {
        "null" | "true" | "false" => palette::VALUE_KEYWORD,
        "[]" | "{}" => palette::VALUE_EMPTY,
        _ if text.starts_with('"') => palette::VALUE_STRING,
        _ => palette::VALUE_NUMBER,
    };
    Style::default().fg(color)
}
