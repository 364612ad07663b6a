//! Spec viewer handlers: mount, fetch results, view modes and exports

use std::time::Instant;

use specview_core::prelude::*;
use specview_core::DocumentNode;

use crate::message::Message;
use crate::source::{SourceFormat, SourceSet};
use crate::state::{AppState, StatusKind};
use crate::viewer_state::{ExportKind, LoadState, MountId, RawSource, SpecViewerState, ViewMode};

use super::{UpdateAction, UpdateResult};

/// Mount a fresh viewer and fetch the primary document
pub fn mount(state: &mut AppState) -> UpdateResult {
    let mount = state.mount_viewer();
    info!("Loading specification from {} ({})", state.sources.document, mount);
    UpdateResult::action(UpdateAction::FetchDocument {
        mount,
        location: state.sources.document.clone(),
    })
}

pub fn handle_document_loaded(
    state: &mut AppState,
    mount: MountId,
    document: DocumentNode,
) -> UpdateResult {
    match state.viewer_for(mount) {
        Some(viewer) if viewer.is_loading() => {
            info!(
                "Specification loaded: {} top-level entries",
                document.len()
            );
            viewer.set_document(document);
        }
        Some(_) => debug!("Ignoring duplicate document for {}", mount),
        None => debug!("Discarding document for unmounted {}", mount),
    }
    UpdateResult::none()
}

pub fn handle_document_load_failed(
    state: &mut AppState,
    mount: MountId,
    error: String,
) -> UpdateResult {
    match state.viewer_for(mount) {
        Some(viewer) => {
            warn!("Failed to load specification: {}", error);
            viewer.set_failed(format!("Failed to load specification: {}", error));
        }
        None => debug!("Discarding load error for unmounted {}: {}", mount, error),
    }
    UpdateResult::none()
}

/// `r` on the error panel: a new mount with fresh caches
pub fn handle_retry_load(state: &mut AppState) -> UpdateResult {
    let failed = matches!(
        state.viewer.as_ref().map(|viewer| &viewer.load),
        Some(LoadState::Failed(_))
    );
    if !failed {
        return UpdateResult::none();
    }
    info!("Retrying specification load");
    mount(state)
}

/// Run `f` on the loaded viewer in tree mode
fn with_tree(state: &mut AppState, f: impl FnOnce(&mut SpecViewerState, Instant)) -> UpdateResult {
    if let Some(viewer) = state.viewer.as_mut() {
        if viewer.document().is_some() && viewer.view_mode == ViewMode::Tree {
            f(viewer, Instant::now());
        }
    }
    UpdateResult::none()
}

pub fn handle_toggle_selected(state: &mut AppState) -> UpdateResult {
    let delay = state.settings.ui.reveal_delay();
    with_tree(state, |viewer, now| {
        viewer.toggle_selected(now, delay);
    })
}

pub fn handle_expand_selected(state: &mut AppState) -> UpdateResult {
    let delay = state.settings.ui.reveal_delay();
    with_tree(state, |viewer, now| viewer.expand_selected(now, delay))
}

pub fn handle_collapse_selected(state: &mut AppState) -> UpdateResult {
    with_tree(state, |viewer, _| viewer.collapse_selected())
}

pub fn handle_expand_all(state: &mut AppState) -> UpdateResult {
    with_tree(state, |viewer, _| {
        viewer.expand_all();
        debug!("Expanded {} paths", viewer.expansion.len());
    })
}

pub fn handle_collapse_all(state: &mut AppState) -> UpdateResult {
    with_tree(state, |viewer, _| viewer.collapse_all())
}

/// Start the single fetch for `format` if it has never been requested
///
/// With `retry`, a failed slot is fetched again as well.
fn request_raw(
    viewer: &mut SpecViewerState,
    sources: &SourceSet,
    format: SourceFormat,
    retry: bool,
) -> Option<UpdateAction> {
    let slot = viewer.raw.get_mut(format);
    let should_fetch = match slot {
        RawSource::Failed(_) => retry,
        _ => !slot.is_settled_or_loading(),
    };
    if !should_fetch {
        debug!("{} source already requested for {}", format, viewer.mount);
        return None;
    }

    *slot = RawSource::Loading;
    let location = sources.raw(format).clone();
    debug!("Fetching {} source from {}", format, location);
    Some(UpdateAction::FetchRawSource {
        mount: viewer.mount,
        format,
        location,
    })
}

pub fn handle_set_view_mode(state: &mut AppState, mode: ViewMode) -> UpdateResult {
    let sources = &state.sources;
    let Some(viewer) = state.viewer.as_mut() else {
        return UpdateResult::none();
    };
    viewer.set_view_mode(mode);
    mode.source_format()
        .and_then(|format| request_raw(viewer, sources, format, false))
        .into()
}

pub fn handle_cycle_view_mode(state: &mut AppState) -> UpdateResult {
    match state.viewer.as_ref() {
        Some(viewer) => {
            let next = viewer.view_mode.next();
            handle_set_view_mode(state, next)
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_raw_loaded(
    state: &mut AppState,
    mount: MountId,
    format: SourceFormat,
    text: String,
) -> UpdateResult {
    let Some(viewer) = state.viewer_for(mount) else {
        debug!("Discarding {} source for unmounted {}", format, mount);
        return UpdateResult::none();
    };
    debug!("{} source loaded ({} bytes)", format, text.len());
    *viewer.raw.get_mut(format) = RawSource::Loaded(text);

    if viewer.pending_exports.iter().any(|(_, f)| *f == format) {
        UpdateResult::message(Message::FlushExports { mount })
    } else {
        UpdateResult::none()
    }
}

pub fn handle_raw_failed(
    state: &mut AppState,
    mount: MountId,
    format: SourceFormat,
    error: String,
) -> UpdateResult {
    let Some(viewer) = state.viewer_for(mount) else {
        debug!("Discarding {} source error for unmounted {}", format, mount);
        return UpdateResult::none();
    };
    warn!("Failed to load {} source: {}", format, error);
    *viewer.raw.get_mut(format) = RawSource::Failed(error.clone());

    let before = viewer.pending_exports.len();
    viewer.pending_exports.retain(|(_, f)| *f != format);
    if viewer.pending_exports.len() != before {
        state.set_status(
            format!("Failed to load {} source: {}", format, error),
            StatusKind::Error,
            Instant::now(),
        );
    }
    UpdateResult::none()
}

pub fn handle_retry_raw(state: &mut AppState) -> UpdateResult {
    let sources = &state.sources;
    let Some(viewer) = state.viewer.as_mut() else {
        return UpdateResult::none();
    };
    let Some(format) = viewer.view_mode.source_format() else {
        return UpdateResult::none();
    };
    if !matches!(viewer.raw.get(format), RawSource::Failed(_)) {
        return UpdateResult::none();
    }
    info!("Retrying {} source", format);
    request_raw(viewer, sources, format, true).into()
}

/// Action that completes an export of already-loaded text
fn export_action(state: &AppState, kind: ExportKind, format: SourceFormat, text: &str) -> UpdateAction {
    match kind {
        ExportKind::Copy => UpdateAction::CopyToClipboard {
            text: text.to_string(),
            label: format.label().to_string(),
        },
        ExportKind::Download => {
            let file_name = state.sources.raw(format).file_name(format);
            UpdateAction::SaveDownload {
                text: text.to_string(),
                path: state.settings.download.directory().join(file_name),
            }
        }
    }
}

/// Copy or download the active format, fetching it first if needed
pub fn handle_export(state: &mut AppState, kind: ExportKind) -> UpdateResult {
    let Some(viewer) = state.viewer.as_ref() else {
        return UpdateResult::none();
    };
    let format = viewer.view_mode.export_format();

    if let Some(text) = viewer.raw.get(format).text() {
        return UpdateResult::action(export_action(state, kind, format, text));
    }

    let sources = &state.sources;
    let Some(viewer) = state.viewer.as_mut() else {
        return UpdateResult::none();
    };
    if !viewer.pending_exports.contains(&(kind, format)) {
        viewer.pending_exports.push((kind, format));
    }
    debug!("{:?} of {} waits for its source", kind, format);
    request_raw(viewer, sources, format, true).into()
}

/// Complete one pending export whose text has arrived
pub fn handle_flush_exports(state: &mut AppState, mount: MountId) -> UpdateResult {
    let Some(viewer) = state.viewer_for(mount) else {
        return UpdateResult::none();
    };
    let Some(position) = viewer
        .pending_exports
        .iter()
        .position(|(_, format)| viewer.raw.get(*format).text().is_some())
    else {
        return UpdateResult::none();
    };
    let (kind, format) = viewer.pending_exports.remove(position);
    let more = viewer
        .pending_exports
        .iter()
        .any(|(_, f)| viewer.raw.get(*f).text().is_some());

    let Some(text) = state
        .viewer
        .as_ref()
        .and_then(|viewer| viewer.raw.get(format).text())
    else {
        return UpdateResult::none();
    };
    let result = UpdateResult::action(export_action(state, kind, format, text));
    if more {
        result.with_message(Message::FlushExports { mount })
    } else {
        result
    }
}
