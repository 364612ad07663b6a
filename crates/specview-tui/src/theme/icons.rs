//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use specview_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }

    /// Collapsed tree or navigator node
    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b8}",   // ▸
        }
    }

    /// Expanded tree or navigator node
    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{25be}",   // ▾
        }
    }

    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c5}", // nf-fa-copy
            IconMode::Unicode => "\u{2398}",   // ⎘
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f019}", // nf-fa-download
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }

    pub fn book(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f02d}", // nf-fa-book
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }
}
