//! Full-frame rendering tests for each page

use super::*;
use crate::test_utils::{test_app_state, TestTerminal};
use specview_app::handler::update;
use specview_app::message::Message;
use specview_app::state::StatusKind;
use specview_app::viewer_state::ViewMode;
use specview_core::parse_document;
use std::time::Instant;

const SCENARIO: &str = "a: 1\nb: [2, 3]\nc: {d: \"x\"}\n";

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw(|frame| view(frame, state));
}

fn spec_state() -> AppState {
    let mut state = test_app_state(Page::Spec);
    update(&mut state, Message::SwitchPage(Page::Spec));
    state
}

fn loaded_spec_state() -> AppState {
    let mut state = spec_state();
    let mount = state.viewer.as_ref().unwrap().mount;
    update(
        &mut state,
        Message::DocumentLoaded {
            mount,
            document: parse_document(SCENARIO).unwrap(),
        },
    );
    state
}

#[test]
fn test_home_page() {
    let mut term = TestTerminal::with_size(120, 24);
    let mut state = test_app_state(Page::Home);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("1 Home"));
    assert!(term.buffer_contains("Press Enter to explore the specification"));
    assert!(term.buffer_contains("q Quit"));
}

#[test]
fn test_spec_page_while_loading() {
    let mut term = TestTerminal::new();
    let mut state = spec_state();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Loading specification..."));
    assert!(!term.buffer_contains("Copy YAML"));
}

#[test]
fn test_spec_page_tree_and_viewport() {
    let mut term = TestTerminal::with_size(120, 24);
    let mut state = loaded_spec_state();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Tree · opencli.yaml"));
    assert!(term.buffer_contains("a: 1"));
    assert!(term.buffer_contains("▸ b"));
    assert!(term.buffer_contains("Copy YAML"));

    // 24 rows: header 3, footer 1, toolbar 1, pane borders 2
    assert_eq!(state.viewer.as_ref().unwrap().viewport_height, 17);
}

#[test]
fn test_spec_page_error_panel() {
    let mut term = TestTerminal::new();
    let mut state = spec_state();
    let mount = state.viewer.as_ref().unwrap().mount;
    update(
        &mut state,
        Message::DocumentLoadFailed {
            mount,
            error: "HTTP 503 Service Unavailable".to_string(),
        },
    );
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Error Loading Specification"));
    assert!(term.buffer_contains("Failed to load specification: HTTP 503"));
    assert!(term.buffer_contains("Press r to retry"));
}

#[test]
fn test_raw_mode_loading_then_listing() {
    let mut term = TestTerminal::with_size(120, 24);
    let mut state = loaded_spec_state();
    let mount = state.viewer.as_ref().unwrap().mount;

    update(&mut state, Message::SetViewMode(ViewMode::Json));
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Loading JSON source..."));
    assert!(term.buffer_contains("opencli.json"));

    update(
        &mut state,
        Message::RawSourceLoaded {
            mount,
            format: SourceFormat::Json,
            text: "{\n  \"a\": 1\n}".to_string(),
        },
    );
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("  2 │   \"a\": 1"));
    assert!(!term.buffer_contains("Expand all"));
}

#[test]
fn test_raw_mode_failure() {
    let mut term = TestTerminal::new();
    let mut state = loaded_spec_state();
    let mount = state.viewer.as_ref().unwrap().mount;

    update(&mut state, Message::SetViewMode(ViewMode::Yaml));
    update(
        &mut state,
        Message::RawSourceFailed {
            mount,
            format: SourceFormat::Yaml,
            error: "HTTP 404 Not Found".to_string(),
        },
    );
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Failed to load YAML source"));
    assert!(term.buffer_contains("HTTP 404 Not Found"));
    assert!(term.buffer_contains("Press r to retry"));
}

#[test]
fn test_reference_page_wide_docks_navigator() {
    let mut term = TestTerminal::with_size(120, 30);
    let mut state = test_app_state(Page::Reference);
    update(&mut state, Message::SwitchPage(Page::Reference));
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Contents"));
    assert!(term.buffer_contains("opencli * [string]"));

    let reference = state.reference.as_ref().unwrap();
    assert!(!reference.narrow);
    assert_eq!(reference.viewport_height, 30 - 3 - 1 - 2);
}

#[test]
fn test_reference_page_narrow_hides_navigator_until_toggled() {
    let mut term = TestTerminal::with_size(80, 30);
    let mut state = test_app_state(Page::Reference);
    update(&mut state, Message::SwitchPage(Page::Reference));
    draw(&mut term, &mut state);

    assert!(state.reference.as_ref().unwrap().narrow);
    assert!(!term.buffer_contains("≡ Contents"));
    assert!(term.buffer_contains("n Contents"));

    update(&mut state, Message::ToggleNavigator);
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("≡ Contents"));

    update(&mut state, Message::CloseNavigator);
    draw(&mut term, &mut state);
    assert!(!term.buffer_contains("≡ Contents"));
}

#[test]
fn test_status_message_in_footer() {
    let mut term = TestTerminal::new();
    let mut state = loaded_spec_state();
    state.set_status("JSON copied to clipboard!", StatusKind::Success, Instant::now());
    draw(&mut term, &mut state);

    assert!(term.line(23).contains("JSON copied to clipboard!"));
}

#[test]
fn test_crash_replaces_whole_ui() {
    let mut term = TestTerminal::new();
    let mut state = loaded_spec_state();
    state.crash = Some("attempt to subtract with overflow".to_string());
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Something went wrong"));
    assert!(term.buffer_contains("attempt to subtract with overflow"));
    assert!(!term.buffer_contains("1 Home"));
}
