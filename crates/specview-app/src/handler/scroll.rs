//! Scroll message handlers
//!
//! One set of scroll messages drives the tree cursor, the raw listing, the
//! reference navigator and the reference body, depending on what has focus.

use std::time::Instant;

use crate::reference_state::{ReferenceFocus, ReferenceState};
use crate::state::{AppState, Page};
use crate::viewer_state::{SpecViewerState, ViewMode};

use super::UpdateResult;

/// Rows moved by PageUp/PageDown in the navigator
const NAV_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

pub fn handle_scroll(state: &mut AppState, scroll: Scroll) -> UpdateResult {
    match state.page {
        Page::Home => {}
        Page::Spec => {
            if let Some(viewer) = state.viewer.as_mut() {
                scroll_viewer(viewer, scroll);
            }
        }
        Page::Reference => {
            if let Some(reference) = state.reference.as_mut() {
                scroll_reference(reference, scroll, Instant::now());
            }
        }
    }
    UpdateResult::none()
}

fn scroll_viewer(viewer: &mut SpecViewerState, scroll: Scroll) {
    if viewer.view_mode == ViewMode::Tree {
        match scroll {
            Scroll::Up => viewer.select_previous(),
            Scroll::Down => viewer.select_next(),
            Scroll::PageUp => viewer.page_up(),
            Scroll::PageDown => viewer.page_down(),
            Scroll::Top => viewer.select_first(),
            Scroll::Bottom => viewer.select_last(),
        }
        return;
    }

    let page = viewer.viewport_height.max(1) as isize;
    match scroll {
        Scroll::Up => viewer.scroll_raw_by(-1),
        Scroll::Down => viewer.scroll_raw_by(1),
        Scroll::PageUp => viewer.scroll_raw_by(-page),
        Scroll::PageDown => viewer.scroll_raw_by(page),
        Scroll::Top => viewer.scroll_raw_to_top(),
        Scroll::Bottom => viewer.scroll_raw_to_bottom(),
    }
}

fn scroll_reference(reference: &mut ReferenceState, scroll: Scroll, now: Instant) {
    if reference.focus == ReferenceFocus::Navigator && reference.navigator_visible() {
        match scroll {
            Scroll::Up => reference.nav_previous(),
            Scroll::Down => reference.nav_next(),
            Scroll::PageUp => {
                reference.nav_selected = reference.nav_selected.saturating_sub(NAV_PAGE)
            }
            Scroll::PageDown => {
                for _ in 0..NAV_PAGE {
                    reference.nav_next();
                }
            }
            Scroll::Top => reference.nav_first(),
            Scroll::Bottom => reference.nav_last(),
        }
        return;
    }

    match scroll {
        Scroll::Up => reference.scroll_by(-1, now),
        Scroll::Down => reference.scroll_by(1, now),
        Scroll::PageUp => reference.page_up(now),
        Scroll::PageDown => reference.page_down(now),
        Scroll::Top => reference.scroll_to_top(now),
        Scroll::Bottom => reference.scroll_to_bottom(now),
    }
}
