//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use specview_app::message::Message;
use specview_app::InputKey;
use specview_core::prelude::*;
use std::time::{Duration, Instant};

/// Tick period for animations and deadlines
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Wall-clock tick schedule, independent of how often input arrives
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    last: Instant,
}

impl TickSchedule {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Time left until the next tick
    pub fn remaining(&self, now: Instant) -> Duration {
        TICK_INTERVAL.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Returns true once per elapsed interval
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= TICK_INTERVAL {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Wait up to `timeout` for a key press
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resizes are picked up by the next draw
        _ => Ok(None),
    }
}
