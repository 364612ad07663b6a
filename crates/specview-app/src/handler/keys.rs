//! Key event handlers for each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::reference_state::ReferenceFocus;
use crate::state::{AppState, Page};
use crate::viewer_state::{LoadState, RawSource, ViewMode};

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.crash.is_some() {
        return handle_key_crash(key);
    }

    let page_message = match state.page {
        Page::Home => handle_key_home(key),
        Page::Spec => handle_key_spec(state, key),
        Page::Reference => handle_key_reference(state, key),
    };
    page_message.or_else(|| handle_key_global(key))
}

/// Keys available on every page
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('1') => Some(Message::SwitchPage(Page::Home)),
        InputKey::Char('2') => Some(Message::SwitchPage(Page::Spec)),
        InputKey::Char('3') => Some(Message::SwitchPage(Page::Reference)),
        InputKey::Char(']') => Some(Message::NextPage),
        InputKey::Char('[') => Some(Message::PreviousPage),
        _ => None,
    }
}

/// Shared vertical movement keys
fn handle_key_scroll(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::PageDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// Error boundary panel: reload or quit
fn handle_key_crash(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') | InputKey::Enter => Some(Message::ReloadApp),
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SwitchPage(Page::Spec)),
        _ => None,
    }
}

fn handle_key_spec(state: &AppState, key: InputKey) -> Option<Message> {
    let viewer = state.viewer.as_ref()?;

    match &viewer.load {
        LoadState::Loading => return None,
        LoadState::Failed(_) => {
            return match key {
                InputKey::Char('r') => Some(Message::RetryLoad),
                _ => None,
            }
        }
        LoadState::Loaded(_) => {}
    }

    let mode_message = match key {
        InputKey::Char('v') => Some(Message::CycleViewMode),
        InputKey::Char('T') => Some(Message::SetViewMode(ViewMode::Tree)),
        InputKey::Char('Y') => Some(Message::SetViewMode(ViewMode::Yaml)),
        InputKey::Char('J') => Some(Message::SetViewMode(ViewMode::Json)),
        InputKey::Char('y') => Some(Message::CopyCurrent),
        InputKey::Char('d') => Some(Message::DownloadCurrent),
        _ => None,
    };
    if mode_message.is_some() {
        return mode_message;
    }

    match viewer.view_mode.source_format() {
        None => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelected),
            InputKey::Char('l') | InputKey::Right => Some(Message::ExpandSelected),
            InputKey::Char('h') | InputKey::Left => Some(Message::CollapseSelected),
            InputKey::Char('e') => Some(Message::ExpandAll),
            InputKey::Char('c') => Some(Message::CollapseAll),
            _ => handle_key_scroll(key),
        },
        Some(format) => match key {
            InputKey::Char('r') if matches!(viewer.raw.get(format), RawSource::Failed(_)) => {
                Some(Message::RetryRawSource)
            }
            _ => handle_key_scroll(key),
        },
    }
}

fn handle_key_reference(state: &AppState, key: InputKey) -> Option<Message> {
    let reference = state.reference.as_ref()?;

    match key {
        InputKey::Tab | InputKey::BackTab => return Some(Message::SwitchFocus),
        InputKey::Char('n') => return Some(Message::ToggleNavigator),
        InputKey::Esc if reference.nav_overlay_open => return Some(Message::CloseNavigator),
        InputKey::Char('y') => return Some(Message::CopyExample),
        _ => {}
    }

    if reference.focus == ReferenceFocus::Navigator && reference.navigator_visible() {
        let nav_message = match key {
            InputKey::Enter => Some(Message::ActivateSection),
            InputKey::Char(' ') => Some(Message::ToggleSection),
            InputKey::Char('l') | InputKey::Right => Some(Message::ExpandSection),
            InputKey::Char('h') | InputKey::Left => Some(Message::CollapseSection),
            _ => None,
        };
        if nav_message.is_some() {
            return nav_message;
        }
    }

    handle_key_scroll(key)
}
