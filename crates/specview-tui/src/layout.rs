//! Screen layout definitions for the TUI
//!
//! Every page shares a header with the page tabs and a one-row footer for
//! status messages and key hints. The pages split the body further.

use ratatui::layout::{Constraint, Layout, Rect};

use specview_app::reference_state::NAV_WIDTH;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and page tabs (glass container)
    pub header: Rect,

    /// Page content
    pub body: Rect,

    /// Status message or key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + title/tabs row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Spec page: toolbar above the tree or listing pane
#[derive(Debug, Clone, Copy)]
pub struct ViewerAreas {
    pub toolbar: Rect,
    pub pane: Rect,
}

pub fn split_viewer(body: Rect) -> ViewerAreas {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(body);
    ViewerAreas {
        toolbar: chunks[0],
        pane: chunks[1],
    }
}

/// Reference page: docked navigator (wide terminals) and content pane
#[derive(Debug, Clone, Copy)]
pub struct ReferenceAreas {
    pub navigator: Option<Rect>,
    pub content: Rect,
}

pub fn split_reference(body: Rect, narrow: bool) -> ReferenceAreas {
    if narrow {
        return ReferenceAreas {
            navigator: None,
            content: body,
        };
    }

    let chunks =
        Layout::horizontal([Constraint::Length(NAV_WIDTH), Constraint::Min(1)]).split(body);
    ReferenceAreas {
        navigator: Some(chunks[0]),
        content: chunks[1],
    }
}

/// Navigator drawn over the left edge of the content on narrow terminals
pub fn navigator_overlay(body: Rect) -> Rect {
    Rect {
        width: NAV_WIDTH.min(body.width),
        ..body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.body.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_split_viewer_reserves_toolbar_row() {
        let areas = split_viewer(Rect::new(0, 3, 80, 20));
        assert_eq!(areas.toolbar, Rect::new(0, 3, 80, 1));
        assert_eq!(areas.pane, Rect::new(0, 4, 80, 19));
    }

    #[test]
    fn test_split_reference_wide_docks_navigator() {
        let areas = split_reference(Rect::new(0, 3, 120, 20), false);
        assert_eq!(areas.navigator.map(|r| r.width), Some(NAV_WIDTH));
        assert_eq!(areas.content.x, NAV_WIDTH);
        assert_eq!(areas.content.width, 120 - NAV_WIDTH);
    }

    #[test]
    fn test_split_reference_narrow_gives_content_everything() {
        let body = Rect::new(0, 3, 60, 20);
        let areas = split_reference(body, true);
        assert!(areas.navigator.is_none());
        assert_eq!(areas.content, body);
    }

    #[test]
    fn test_navigator_overlay_clamped_to_body() {
        let overlay = navigator_overlay(Rect::new(0, 3, 20, 10));
        assert_eq!(overlay, Rect::new(0, 3, 20, 10));

        let overlay = navigator_overlay(Rect::new(0, 3, 60, 10));
        assert_eq!(overlay.width, NAV_WIDTH);
    }
}
