//! Scroll position to active-section synchronization
//!
//! The reference page lays its documentation bodies out top to bottom; each
//! body starts at an [`Anchor`]. As the content scrolls, the active section
//! becomes the last anchor whose top is at or above the scan position.
//! Recomputation is rate limited by a [`Throttle`].

use std::time::{Duration, Instant};

/// Start row of a documentation body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub top: usize,
}

/// Id of the last anchor (in document order) whose top is at or above
/// `position`
///
/// Anchors are scanned in reverse so that, for anchors sharing a top,
/// the later one wins. Returns `None` when every anchor is below.
pub fn nearest_anchor_above(anchors: &[Anchor], position: usize) -> Option<&str> {
    anchors
        .iter()
        .rev()
        .find(|anchor| position >= anchor.top)
        .map(|anchor| anchor.id.as_str())
}

/// Timestamp-based rate limiter with a trailing edge
///
/// The first request in a quiet period runs immediately. Requests inside
/// the interval are coalesced into a single trailing run, released by
/// [`Throttle::poll_trailing`] once the interval has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: false,
        }
    }

    /// Ask to run now; returns true if the caller may run immediately
    pub fn request(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.saturating_duration_since(last) < self.interval => {
                self.pending = true;
                false
            }
            _ => {
                self.last_run = Some(now);
                self.pending = false;
                true
            }
        }
    }

    /// Returns true once if a coalesced request is due
    pub fn poll_trailing(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        let due = self
            .last_run
            .map_or(true, |last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.last_run = Some(now);
            self.pending = false;
        }
        due
    }

}
