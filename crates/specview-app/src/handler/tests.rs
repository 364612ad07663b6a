//! Tests for handler module

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::test_support::test_state;
use crate::state::{AppPhase, AppState, Page, StatusKind, StatusMessage};
use crate::viewer_state::{LoadState, RawSource, ViewMode};
use specview_core::{parse_document, PathKey};

const SCENARIO: &str = "a: 1\nb: [2, 3]\nc: {d: \"x\"}\n";

/// Spec page mounted; returns the fetch action
fn mounted_state() -> (AppState, MountId) {
    let mut state = test_state();
    let result = update(&mut state, Message::SwitchPage(Page::Spec));
    let mount = match result.action {
        Some(UpdateAction::FetchDocument { mount, .. }) => mount,
        other => panic!("expected FetchDocument, got {:?}", other),
    };
    (state, mount)
}

fn loaded_state() -> (AppState, MountId) {
    let (mut state, mount) = mounted_state();
    update(
        &mut state,
        Message::DocumentLoaded {
            mount,
            document: parse_document(SCENARIO).unwrap(),
        },
    );
    (state, mount)
}

fn viewer(state: &AppState) -> &crate::viewer_state::SpecViewerState {
    state.viewer.as_ref().expect("viewer mounted")
}

fn labels(state: &AppState) -> Vec<String> {
    viewer(state)
        .rows()
        .iter()
        .map(|row| row.label.clone())
        .collect()
}

/// Run a message and every follow-up, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(message) = next {
        let result = update(state, message);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

// ─────────────────────────────────────────────────────────
// Global
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_ctrl_c_quit() {
    let state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_number_keys_switch_pages() {
    let state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SwitchPage(Page::Reference))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SwitchPage(Page::Spec))
    ));
}

// ─────────────────────────────────────────────────────────
// Mounting and loading
// ─────────────────────────────────────────────────────────

#[test]
fn test_entering_spec_page_fetches_document() {
    let mut state = test_state();
    let result = update(&mut state, Message::SwitchPage(Page::Spec));

    assert_eq!(state.page, Page::Spec);
    assert!(viewer(&state).is_loading());
    assert_eq!(
        result.action,
        Some(UpdateAction::FetchDocument {
            mount: viewer(&state).mount,
            location: state.sources.document.clone(),
        })
    );
}

#[test]
fn test_reentering_same_page_does_not_refetch() {
    let (mut state, _) = mounted_state();
    let result = update(&mut state, Message::SwitchPage(Page::Spec));
    assert!(result.action.is_none());
}

#[test]
fn test_document_loaded_renders_scenario() {
    let (state, _) = loaded_state();
    assert_eq!(labels(&state), vec!["a", "b", "c"]);
    assert_eq!(viewer(&state).rows()[0].inline_value.as_deref(), Some("1"));
}

#[test]
fn test_round_trip_scenario_through_messages() {
    let (mut state, _) = loaded_state();

    // Cursor on "b", expand it
    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::ToggleSelected);
    assert_eq!(labels(&state), vec!["a", "b", "[0]", "[1]", "c"]);

    update(&mut state, Message::ExpandAll);
    assert_eq!(labels(&state), vec!["a", "b", "[0]", "[1]", "c", "d"]);

    update(&mut state, Message::CollapseAll);
    assert_eq!(labels(&state), vec!["a", "b", "c"]);
    assert_eq!(viewer(&state).expansion.len(), 1);
}

#[test]
fn test_leaving_spec_page_unmounts_and_discards_late_results() {
    let (mut state, mount) = mounted_state();
    update(&mut state, Message::SwitchPage(Page::Home));
    assert!(state.viewer.is_none());

    update(
        &mut state,
        Message::DocumentLoaded {
            mount,
            document: parse_document(SCENARIO).unwrap(),
        },
    );
    assert!(state.viewer.is_none());

    let result = update(&mut state, Message::SwitchPage(Page::Spec));
    let new_mount = viewer(&state).mount;
    assert_ne!(new_mount, mount);
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchDocument { .. })
    ));
}

#[test]
fn test_error_then_retry() {
    let (mut state, mount) = mounted_state();
    update(
        &mut state,
        Message::DocumentLoadFailed {
            mount,
            error: "HTTP 500 Internal Server Error".to_string(),
        },
    );
    assert_eq!(
        viewer(&state).load,
        LoadState::Failed(
            "Failed to load specification: HTTP 500 Internal Server Error".to_string()
        )
    );

    let retry = handle_key(&state, InputKey::Char('r'));
    assert!(matches!(retry, Some(Message::RetryLoad)));

    let result = update(&mut state, Message::RetryLoad);
    let new_mount = viewer(&state).mount;
    assert_ne!(new_mount, mount);
    assert!(viewer(&state).is_loading());
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchDocument { mount, .. }) if mount == new_mount
    ));

    // A late success for the failed mount is ignored
    update(
        &mut state,
        Message::DocumentLoaded {
            mount,
            document: parse_document(SCENARIO).unwrap(),
        },
    );
    assert!(viewer(&state).is_loading());

    update(
        &mut state,
        Message::DocumentLoaded {
            mount: new_mount,
            document: parse_document(SCENARIO).unwrap(),
        },
    );
    assert_eq!(labels(&state), vec!["a", "b", "c"]);
}

#[test]
fn test_retry_ignored_when_not_failed() {
    let (mut state, mount) = loaded_state();
    let result = update(&mut state, Message::RetryLoad);
    assert!(result.action.is_none());
    assert_eq!(viewer(&state).mount, mount);
}

// ─────────────────────────────────────────────────────────
// View modes
// ─────────────────────────────────────────────────────────

#[test]
fn test_raw_source_fetched_once() {
    let (mut state, mount) = loaded_state();

    let first = update(&mut state, Message::SetViewMode(ViewMode::Yaml));
    assert_eq!(
        first.action,
        Some(UpdateAction::FetchRawSource {
            mount,
            format: SourceFormat::Yaml,
            location: state.sources.yaml.clone(),
        })
    );
    assert_eq!(viewer(&state).raw.yaml, RawSource::Loading);

    // Leaving and re-entering while loading does not fetch again
    assert!(update(&mut state, Message::SetViewMode(ViewMode::Tree))
        .action
        .is_none());
    assert!(update(&mut state, Message::SetViewMode(ViewMode::Yaml))
        .action
        .is_none());

    update(
        &mut state,
        Message::RawSourceLoaded {
            mount,
            format: SourceFormat::Yaml,
            text: SCENARIO.to_string(),
        },
    );
    assert_eq!(viewer(&state).active_raw_text(), Some(SCENARIO));

    assert!(update(&mut state, Message::SetViewMode(ViewMode::Tree))
        .action
        .is_none());
    assert!(update(&mut state, Message::SetViewMode(ViewMode::Yaml))
        .action
        .is_none());
}

#[test]
fn test_each_raw_mode_fetches_independently() {
    let (mut state, _) = loaded_state();
    let yaml = update(&mut state, Message::CycleViewMode);
    let json = update(&mut state, Message::CycleViewMode);
    let tree = update(&mut state, Message::CycleViewMode);

    assert!(matches!(
        yaml.action,
        Some(UpdateAction::FetchRawSource { format: SourceFormat::Yaml, .. })
    ));
    assert!(matches!(
        json.action,
        Some(UpdateAction::FetchRawSource { format: SourceFormat::Json, .. })
    ));
    assert!(tree.action.is_none());
    assert_eq!(viewer(&state).view_mode, ViewMode::Tree);
}

#[test]
fn test_raw_failure_then_retry() {
    let (mut state, mount) = loaded_state();
    update(&mut state, Message::SetViewMode(ViewMode::Json));
    update(
        &mut state,
        Message::RawSourceFailed {
            mount,
            format: SourceFormat::Json,
            error: "HTTP 404 Not Found".to_string(),
        },
    );
    assert_eq!(
        viewer(&state).raw.json,
        RawSource::Failed("HTTP 404 Not Found".to_string())
    );

    // Switching away and back does not refetch on its own
    update(&mut state, Message::SetViewMode(ViewMode::Tree));
    assert!(update(&mut state, Message::SetViewMode(ViewMode::Json))
        .action
        .is_none());

    let key = handle_key(&state, InputKey::Char('r'));
    assert!(matches!(key, Some(Message::RetryRawSource)));

    let result = update(&mut state, Message::RetryRawSource);
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchRawSource { format: SourceFormat::Json, .. })
    ));
    assert_eq!(viewer(&state).raw.json, RawSource::Loading);
}

#[test]
fn test_stale_raw_result_is_discarded() {
    let (mut state, mount) = loaded_state();
    update(&mut state, Message::SetViewMode(ViewMode::Yaml));
    update(&mut state, Message::SwitchPage(Page::Home));
    update(&mut state, Message::SwitchPage(Page::Spec));

    update(
        &mut state,
        Message::RawSourceLoaded {
            mount,
            format: SourceFormat::Yaml,
            text: SCENARIO.to_string(),
        },
    );
    assert_eq!(viewer(&state).raw.yaml, RawSource::NotRequested);
}

#[test]
fn test_bulk_operations_only_in_tree_mode() {
    let (mut state, _) = loaded_state();
    update(&mut state, Message::SetViewMode(ViewMode::Json));

    assert!(handle_key(&state, InputKey::Char('e')).is_none());
    update(&mut state, Message::ExpandAll);
    assert_eq!(viewer(&state).expansion.len(), 1);
}

#[test]
fn test_keys_ignored_while_loading_except_global() {
    let (state, _) = mounted_state();
    assert!(handle_key(&state, InputKey::Char('v')).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

// ─────────────────────────────────────────────────────────
// Copy and download
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_in_tree_mode_waits_for_yaml_source() {
    let (mut state, mount) = loaded_state();

    let actions = run(&mut state, Message::CopyCurrent);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchRawSource { format: SourceFormat::Yaml, .. }]
    ));
    assert_eq!(viewer(&state).view_mode, ViewMode::Tree);

    let actions = run(
        &mut state,
        Message::RawSourceLoaded {
            mount,
            format: SourceFormat::Yaml,
            text: SCENARIO.to_string(),
        },
    );
    assert_eq!(
        actions,
        vec![UpdateAction::CopyToClipboard {
            text: SCENARIO.to_string(),
            label: "YAML".to_string(),
        }]
    );
    assert!(viewer(&state).pending_exports.is_empty());
}

#[test]
fn test_copy_joins_running_fetch() {
    let (mut state, _) = loaded_state();
    update(&mut state, Message::SetViewMode(ViewMode::Json));

    let actions = run(&mut state, Message::CopyCurrent);
    assert!(actions.is_empty());
    assert_eq!(viewer(&state).pending_exports.len(), 1);
}

#[test]
fn test_copy_and_download_both_complete() {
    let (mut state, mount) = loaded_state();
    update(&mut state, Message::SetViewMode(ViewMode::Json));
    run(&mut state, Message::CopyCurrent);
    run(&mut state, Message::DownloadCurrent);

    let actions = run(
        &mut state,
        Message::RawSourceLoaded {
            mount,
            format: SourceFormat::Json,
            text: "{}".to_string(),
        },
    );
    assert_eq!(
        actions,
        vec![
            UpdateAction::CopyToClipboard {
                text: "{}".to_string(),
                label: "JSON".to_string(),
            },
            UpdateAction::SaveDownload {
                text: "{}".to_string(),
                path: PathBuf::from(".").join("opencli.json"),
            },
        ]
    );
}

#[test]
fn test_copy_with_cached_source_is_immediate() {
    let (mut state, mount) = loaded_state();
    update(&mut state, Message::SetViewMode(ViewMode::Yaml));
    update(
        &mut state,
        Message::RawSourceLoaded {
            mount,
            format: SourceFormat::Yaml,
            text: "a: 1\n".to_string(),
        },
    );

    let result = update(&mut state, Message::CopyCurrent);
    assert_eq!(
        result.action,
        Some(UpdateAction::CopyToClipboard {
            text: "a: 1\n".to_string(),
            label: "YAML".to_string(),
        })
    );
}

#[test]
fn test_failed_source_drops_pending_export_with_status() {
    let (mut state, mount) = loaded_state();
    run(&mut state, Message::CopyCurrent);
    update(
        &mut state,
        Message::RawSourceFailed {
            mount,
            format: SourceFormat::Yaml,
            error: "timed out".to_string(),
        },
    );
    assert!(viewer(&state).pending_exports.is_empty());
    let status = state.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Failed to load YAML source: timed out");
}

#[test]
fn test_copy_status_messages() {
    let mut state = test_state();
    update(
        &mut state,
        Message::CopyCompleted {
            label: "JSON".to_string(),
        },
    );
    assert_eq!(
        state.status.as_ref().map(|s| s.text.as_str()),
        Some("JSON copied to clipboard!")
    );

    update(
        &mut state,
        Message::CopyFailed {
            label: "YAML".to_string(),
            error: "no clipboard".to_string(),
        },
    );
    let status = state.status.as_ref().unwrap();
    assert_eq!(status.text, "Failed to copy YAML");
    assert_eq!(status.kind, StatusKind::Error);
}

#[test]
fn test_tick_clears_expired_status() {
    let mut state = test_state();
    state.status = Some(StatusMessage {
        text: "Saved ./opencli.yaml".to_string(),
        kind: StatusKind::Success,
        expires_at: Instant::now(),
    });
    update(&mut state, Message::Tick);
    assert!(state.status.is_none());
}

// ─────────────────────────────────────────────────────────
// Deferred reveal
// ─────────────────────────────────────────────────────────

#[test]
fn test_tick_fires_due_reveal() {
    let (mut state, _) = loaded_state();
    let viewer = state.viewer.as_mut().unwrap();
    viewer.toggle(
        &PathKey::root().key("c"),
        Instant::now() - Duration::from_secs(1),
        Duration::from_millis(100),
    );
    assert!(viewer.pending_reveal.is_some());

    update(&mut state, Message::Tick);
    assert!(state.viewer.as_ref().unwrap().pending_reveal.is_none());
}

// ─────────────────────────────────────────────────────────
// Reference page
// ─────────────────────────────────────────────────────────

#[test]
fn test_reference_page_mounts_and_unmounts() {
    let mut state = test_state();
    update(&mut state, Message::SwitchPage(Page::Reference));
    assert!(state.reference.is_some());

    update(&mut state, Message::NextPage);
    assert_eq!(state.page, Page::Home);
    assert!(state.reference.is_none());
}

#[test]
fn test_copy_example_of_active_section() {
    let mut state = test_state();
    update(&mut state, Message::SwitchPage(Page::Reference));
    assert!(matches!(
        handle_key(&state, InputKey::Char('y')),
        Some(Message::CopyExample)
    ));

    let result = update(&mut state, Message::CopyExample);
    assert_eq!(
        result.action,
        Some(UpdateAction::CopyToClipboard {
            text: r#"opencli: "1.0.0""#.to_string(),
            label: "opencli example".to_string(),
        })
    );
}

#[test]
fn test_activate_section_scrolls_and_marks_active() {
    let mut state = test_state();
    update(&mut state, Message::SwitchPage(Page::Reference));

    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::ActivateSection);

    let reference = state.reference.as_ref().unwrap();
    assert_eq!(reference.active_section, "info");
    assert!(reference.scroll_target.is_some());
}

#[test]
fn test_tab_moves_scrolling_to_content() {
    let mut state = test_state();
    update(&mut state, Message::SwitchPage(Page::Reference));
    let key = handle_key(&state, InputKey::Tab);
    assert!(matches!(key, Some(Message::SwitchFocus)));
    update(&mut state, Message::SwitchFocus);

    update(&mut state, Message::ScrollDown);
    let reference = state.reference.as_ref().unwrap();
    assert_eq!(reference.scroll, 1);
    assert_eq!(reference.nav_selected, 0);
}

// ─────────────────────────────────────────────────────────
// Error boundary
// ─────────────────────────────────────────────────────────

#[test]
fn test_render_panic_then_reload() {
    let (mut state, _) = loaded_state();
    update(
        &mut state,
        Message::RenderPanicked {
            message: "index out of bounds".to_string(),
        },
    );
    assert_eq!(state.crash.as_deref(), Some("index out of bounds"));

    // Only reload and quit are accepted
    assert!(handle_key(&state, InputKey::Char('v')).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::ReloadApp)
    ));

    let actions = run(&mut state, Message::ReloadApp);
    assert!(state.crash.is_none());
    assert_eq!(state.page, Page::Spec);
    assert!(viewer(&state).is_loading());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchDocument { .. }]
    ));
}
