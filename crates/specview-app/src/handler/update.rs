//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use specview_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState, Page, StatusKind};
use crate::viewer_state::ExportKind;

use super::scroll::{handle_scroll, Scroll};
use super::{keys::handle_key, reference, viewer, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            let now = Instant::now();
            state.clear_expired_status(now);
            if let Some(viewer) = state.viewer.as_mut() {
                viewer.poll_reveal(now);
            }
            if let Some(reference) = state.reference.as_mut() {
                reference.tick(now);
            }
            UpdateResult::none()
        }

        Message::SwitchPage(page) => switch_page(state, page),
        Message::NextPage => switch_page(state, state.page.next()),
        Message::PreviousPage => switch_page(state, state.page.previous()),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => handle_scroll(state, Scroll::Up),
        Message::ScrollDown => handle_scroll(state, Scroll::Down),
        Message::PageUp => handle_scroll(state, Scroll::PageUp),
        Message::PageDown => handle_scroll(state, Scroll::PageDown),
        Message::ScrollToTop => handle_scroll(state, Scroll::Top),
        Message::ScrollToBottom => handle_scroll(state, Scroll::Bottom),

        // ─────────────────────────────────────────────────────────
        // Spec Viewer Messages
        // ─────────────────────────────────────────────────────────
        Message::DocumentLoaded { mount, document } => {
            viewer::handle_document_loaded(state, mount, document)
        }
        Message::DocumentLoadFailed { mount, error } => {
            viewer::handle_document_load_failed(state, mount, error)
        }
        Message::RetryLoad => viewer::handle_retry_load(state),
        Message::ToggleSelected => viewer::handle_toggle_selected(state),
        Message::ExpandSelected => viewer::handle_expand_selected(state),
        Message::CollapseSelected => viewer::handle_collapse_selected(state),
        Message::ExpandAll => viewer::handle_expand_all(state),
        Message::CollapseAll => viewer::handle_collapse_all(state),
        Message::SetViewMode(mode) => viewer::handle_set_view_mode(state, mode),
        Message::CycleViewMode => viewer::handle_cycle_view_mode(state),
        Message::RawSourceLoaded {
            mount,
            format,
            text,
        } => viewer::handle_raw_loaded(state, mount, format, text),
        Message::RawSourceFailed {
            mount,
            format,
            error,
        } => viewer::handle_raw_failed(state, mount, format, error),
        Message::RetryRawSource => viewer::handle_retry_raw(state),
        Message::FlushExports { mount } => viewer::handle_flush_exports(state, mount),
        Message::CopyCurrent => viewer::handle_export(state, ExportKind::Copy),
        Message::DownloadCurrent => viewer::handle_export(state, ExportKind::Download),

        // ─────────────────────────────────────────────────────────
        // Reference Page Messages
        // ─────────────────────────────────────────────────────────
        Message::ActivateSection => reference::handle_activate_section(state),
        Message::ToggleSection => reference::handle_toggle_section(state),
        Message::ExpandSection => reference::handle_expand_section(state),
        Message::CollapseSection => reference::handle_collapse_section(state),
        Message::ToggleNavigator => reference::handle_toggle_navigator(state),
        Message::CloseNavigator => reference::handle_close_navigator(state),
        Message::SwitchFocus => reference::handle_switch_focus(state),
        Message::CopyExample => reference::handle_copy_example(state),

        // ─────────────────────────────────────────────────────────
        // Background Task Results
        // ─────────────────────────────────────────────────────────
        Message::CopyCompleted { label } => {
            state.set_status(
                format!("{} copied to clipboard!", label),
                StatusKind::Success,
                Instant::now(),
            );
            UpdateResult::none()
        }

        Message::CopyFailed { label, error } => {
            warn!("Failed to copy {}: {}", label, error);
            state.set_status(
                format!("Failed to copy {}", label),
                StatusKind::Error,
                Instant::now(),
            );
            UpdateResult::none()
        }

        Message::DownloadCompleted { path } => {
            info!("Saved {}", path.display());
            state.set_status(
                format!("Saved {}", path.display()),
                StatusKind::Success,
                Instant::now(),
            );
            UpdateResult::none()
        }

        Message::DownloadFailed { error } => {
            warn!("Download failed: {}", error);
            state.set_status(
                format!("Download failed: {}", error),
                StatusKind::Error,
                Instant::now(),
            );
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Error Boundary
        // ─────────────────────────────────────────────────────────
        Message::RenderPanicked { message } => {
            error!("Render panicked: {}", message);
            state.crash = Some(message);
            UpdateResult::none()
        }

        Message::ReloadApp => {
            info!("Reloading application state");
            state.reset();
            UpdateResult::message(Message::SwitchPage(state.initial_page))
        }
    }
}

/// Show `page`, unmounting the page being left and mounting the new one
fn switch_page(state: &mut AppState, page: Page) -> UpdateResult {
    if page != state.page {
        match state.page {
            Page::Spec => {
                if let Some(viewer) = state.viewer.take() {
                    debug!("Unmounting spec viewer {}", viewer.mount);
                }
            }
            Page::Reference => state.reference = None,
            Page::Home => {}
        }
        debug!("Switching to {} page", page.title());
        state.page = page;
    }

    match page {
        Page::Spec if state.viewer.is_none() => viewer::mount(state),
        Page::Reference if state.reference.is_none() => {
            state.mount_reference();
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}
