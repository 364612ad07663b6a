//! Reference page handlers

use std::time::Instant;

use specview_core::prelude::*;

use crate::reference_state::ReferenceState;
use crate::state::{AppState, StatusKind};

use super::{UpdateAction, UpdateResult};

fn with_reference(state: &mut AppState, f: impl FnOnce(&mut ReferenceState)) -> UpdateResult {
    if let Some(reference) = state.reference.as_mut() {
        f(reference);
    }
    UpdateResult::none()
}

pub fn handle_activate_section(state: &mut AppState) -> UpdateResult {
    with_reference(state, |reference| {
        if let Some(id) = reference.nav_activate(Instant::now()) {
            debug!("Scrolling to reference section {}", id);
        }
    })
}

pub fn handle_toggle_section(state: &mut AppState) -> UpdateResult {
    with_reference(state, ReferenceState::nav_toggle)
}

pub fn handle_expand_section(state: &mut AppState) -> UpdateResult {
    with_reference(state, ReferenceState::nav_expand)
}

pub fn handle_collapse_section(state: &mut AppState) -> UpdateResult {
    with_reference(state, ReferenceState::nav_collapse)
}

pub fn handle_toggle_navigator(state: &mut AppState) -> UpdateResult {
    with_reference(state, ReferenceState::toggle_navigator)
}

pub fn handle_close_navigator(state: &mut AppState) -> UpdateResult {
    with_reference(state, ReferenceState::close_navigator)
}

pub fn handle_switch_focus(state: &mut AppState) -> UpdateResult {
    with_reference(state, ReferenceState::switch_focus)
}

/// Copy the active section's YAML example
pub fn handle_copy_example(state: &mut AppState) -> UpdateResult {
    let Some(section) = state.reference.as_ref().and_then(|r| r.active()) else {
        return UpdateResult::none();
    };
    match section.example {
        Some(example) => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: example.to_string(),
            label: format!("{} example", section.title),
        }),
        None => {
            state.set_status(
                format!("No example for {}", section.title),
                StatusKind::Info,
                Instant::now(),
            );
            UpdateResult::none()
        }
    }
}
