//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use specview_app::reference_state::ReferenceFocus;
use specview_app::source::{SourceFormat, SourceSet};
use specview_app::state::AppState;
use specview_app::viewer_state::{LoadState, RawSource, SpecViewerState};
use specview_app::Page;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::reference::body::BODY_PADDING;

/// Render the complete UI (View function in TEA)
///
/// Besides drawing, this records the geometry each page was given
/// (viewport heights, reference text width and breakpoint) in state, so
/// scrolling and reveal logic work with what is actually on screen.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);

    if let Some(message) = state.crash.as_deref() {
        frame.render_widget(widgets::CrashPanel::new(message, icons), area);
        return;
    }

    let areas = layout::create(area);
    frame.render_widget(widgets::MainHeader::new(state.page, icons), areas.header);

    match state.page {
        Page::Home => frame.render_widget(widgets::HomePage, areas.body),
        Page::Spec => render_spec_page(frame, areas.body, state, icons),
        Page::Reference => render_reference_page(frame, areas.body, state, icons),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);
}

/// Pane title naming what is shown
fn pane_title(viewer: &SpecViewerState, sources: &SourceSet) -> String {
    match viewer.view_mode.source_format() {
        None => format!(
            " Tree · {} ",
            sources.document.file_name(SourceFormat::Yaml)
        ),
        Some(format) => format!(" {} ", sources.raw(format).file_name(format)),
    }
}

fn render_spec_page(frame: &mut Frame, area: Rect, state: &mut AppState, icons: IconSet) {
    let indent = state.settings.ui.tree_indent;
    let Some(viewer) = state.viewer.as_mut() else {
        return;
    };

    let areas = layout::split_viewer(area);
    let block = styles::glass_block(true).title(pane_title(viewer, &state.sources));
    let inner = block.inner(areas.pane);
    frame.render_widget(block, areas.pane);
    viewer.set_viewport_height(inner.height as usize);

    match &viewer.load {
        LoadState::Loading => frame.render_widget(
            widgets::StatePanel::loading("Loading specification...", icons.refresh()),
            inner,
        ),
        LoadState::Failed(message) => frame.render_widget(
            widgets::StatePanel::error("Error Loading Specification", message, icons.alert()),
            inner,
        ),
        LoadState::Loaded(_) => {
            frame.render_widget(widgets::Toolbar::new(viewer.view_mode, icons), areas.toolbar);
            render_spec_content(frame, inner, viewer, indent, icons);
        }
    }
}

fn render_spec_content(
    frame: &mut Frame,
    area: Rect,
    viewer: &SpecViewerState,
    indent: usize,
    icons: IconSet,
) {
    let Some(format) = viewer.view_mode.source_format() else {
        let tree = widgets::TreeView::new(viewer.rows(), icons)
            .selected(viewer.selected)
            .scroll_offset(viewer.scroll_offset)
            .indent(indent);
        frame.render_widget(tree, area);
        return;
    };

    match viewer.raw.get(format) {
        RawSource::NotRequested | RawSource::Loading => {
            let text = format!("Loading {} source...", format.label());
            frame.render_widget(widgets::StatePanel::loading(&text, icons.refresh()), area);
        }
        RawSource::Loaded(text) => {
            frame.render_widget(
                widgets::SourceListing::new(text).scroll(viewer.raw_scroll),
                area,
            );
        }
        RawSource::Failed(error) => {
            let title = format!("Failed to load {} source", format.label());
            frame.render_widget(
                widgets::StatePanel::error(&title, error, icons.alert()),
                area,
            );
        }
    }
}

fn render_reference_page(frame: &mut Frame, area: Rect, state: &mut AppState, icons: IconSet) {
    let Some(reference) = state.reference.as_mut() else {
        return;
    };

    let narrow = reference.is_narrow(area.width);
    let areas = layout::split_reference(area, narrow);

    // Borders plus padding on both sides
    let text_width = areas.content.width.saturating_sub(2 + BODY_PADDING * 2);
    let text_height = areas.content.height.saturating_sub(2);
    reference.set_viewport(narrow, text_width as usize, text_height as usize);

    let nav_focused = reference.focus == ReferenceFocus::Navigator && reference.navigator_visible();
    let body = widgets::DocBody::new(reference.layout())
        .scroll(reference.scroll)
        .focused(!nav_focused);
    frame.render_widget(body, areas.content);

    let nav_area = match areas.navigator {
        Some(docked) => docked,
        None if reference.nav_overlay_open => {
            let overlay = layout::navigator_overlay(area);
            frame.render_widget(Clear, overlay);
            overlay
        }
        None => return,
    };

    let entries = reference.nav_entries();
    let navigator = widgets::Navigator::new(&entries, &reference.expanded, icons)
        .selected(reference.nav_selected)
        .active(&reference.active_section)
        .focused(nav_focused);
    frame.render_widget(navigator, nav_area);
}
