//! Reference page state
//!
//! The reference page shows the static OpenCLI outline twice: as a
//! collapsible navigator and as a long documentation body laid out into
//! wrapped lines. Each section's heading line is an [`Anchor`]; the section
//! whose anchor sits nearest above the scan line is the active one.

use std::collections::HashSet;
use std::time::Instant;

use specview_core::navigation::default_expanded;
use specview_core::prelude::*;
use specview_core::{
    find_section_by_id, flatten, nearest_anchor_above, reference_sections, visible_sections,
    Anchor, FlatSection, NavigationSection, Throttle,
};

use crate::config::ReferenceSettings;

/// Columns taken by the docked navigator
pub const NAV_WIDTH: u16 = 34;

/// Section active before any scrolling
pub const INITIAL_SECTION: &str = "opencli";

const DEFAULT_TEXT_WIDTH: usize = 80;
const MIN_TEXT_WIDTH: usize = 16;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceFocus {
    #[default]
    Navigator,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLineKind {
    Heading {
        depth: usize,
        required: bool,
        kind: Option<&'static str>,
    },
    Text,
    ExampleLabel,
    Code,
    Blank,
}

/// One rendered row of the documentation body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub kind: DocLineKind,
    pub text: String,
}

impl DocLine {
    fn new(kind: DocLineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(DocLineKind::Blank, "")
    }
}

/// Documentation body wrapped to a fixed width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocLayout {
    pub width: usize,
    pub lines: Vec<DocLine>,
    /// Heading row of every section, in document order
    pub anchors: Vec<Anchor>,
}

impl DocLayout {
    pub fn anchor_top(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| anchor.top)
    }
}

/// Lay out every section body in pre-order
pub fn layout_document(sections: &[FlatSection<'_>], width: usize) -> DocLayout {
    let width = width.max(MIN_TEXT_WIDTH);
    let mut lines = Vec::new();
    let mut anchors = Vec::with_capacity(sections.len());

    for entry in sections {
        let section = entry.section;
        anchors.push(Anchor {
            id: section.id.to_string(),
            top: lines.len(),
        });
        lines.push(DocLine::new(
            DocLineKind::Heading {
                depth: entry.depth,
                required: section.required,
                kind: section.kind,
            },
            section.title,
        ));
        lines.extend(
            wrap_text(section.body_text(), width)
                .into_iter()
                .map(|text| DocLine::new(DocLineKind::Text, text)),
        );
        if let Some(example) = section.example {
            lines.push(DocLine::blank());
            lines.push(DocLine::new(DocLineKind::ExampleLabel, "Example"));
            lines.extend(
                example
                    .lines()
                    .map(|text| DocLine::new(DocLineKind::Code, text)),
            );
        }
        lines.push(DocLine::blank());
    }

    DocLayout {
        width,
        lines,
        anchors,
    }
}

/// Greedy word wrap; words wider than `width` are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if line_len > 0 {
                    out.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                out.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }

            let needed = if line_len == 0 { word.len() } else { word.len() + 1 };
            if line_len + needed > width {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        out.push(line);
    }

    out
}

/// State of the reference page
#[derive(Debug, Clone)]
pub struct ReferenceState {
    /// Ids of navigator sections showing their children
    pub expanded: HashSet<String>,
    /// Cursor row in the navigator
    pub nav_selected: usize,
    pub active_section: String,
    pub focus: ReferenceFocus,

    /// First visible body row
    pub scroll: usize,
    /// Destination of an animated scroll
    pub scroll_target: Option<usize>,
    pub viewport_height: usize,

    /// Terminal is narrower than the navigator breakpoint
    pub narrow: bool,
    pub nav_overlay_open: bool,

    layout: DocLayout,
    throttle: Throttle,
    click_offset: usize,
    scan_offset: usize,
    nav_breakpoint: u16,
}

impl ReferenceState {
    pub fn new(settings: &ReferenceSettings) -> Self {
        let sections = reference_sections();
        Self {
            expanded: default_expanded(sections),
            nav_selected: 0,
            active_section: INITIAL_SECTION.to_string(),
            focus: ReferenceFocus::default(),
            scroll: 0,
            scroll_target: None,
            viewport_height: 1,
            narrow: false,
            nav_overlay_open: false,
            layout: layout_document(&flatten(sections), DEFAULT_TEXT_WIDTH),
            throttle: Throttle::new(settings.throttle_interval()),
            click_offset: settings.click_offset,
            scan_offset: settings.scan_offset,
            nav_breakpoint: settings.nav_breakpoint,
        }
    }

    pub fn layout(&self) -> &DocLayout {
        &self.layout
    }

    pub fn is_narrow(&self, total_width: u16) -> bool {
        total_width < self.nav_breakpoint
    }

    /// Whether the navigator is drawn at all
    pub fn navigator_visible(&self) -> bool {
        !self.narrow || self.nav_overlay_open
    }

    /// Record the geometry chosen by the renderer
    ///
    /// The body is re-wrapped when the text width changes.
    pub fn set_viewport(&mut self, narrow: bool, text_width: usize, height: usize) {
        if narrow != self.narrow {
            self.narrow = narrow;
            if !narrow {
                self.nav_overlay_open = false;
            } else if self.focus == ReferenceFocus::Navigator {
                self.focus = ReferenceFocus::Content;
            }
        }

        let text_width = text_width.max(MIN_TEXT_WIDTH);
        if text_width != self.layout.width {
            debug!("Re-laying out reference body at width {}", text_width);
            self.layout = layout_document(&flatten(reference_sections()), text_width);
            if let Some(target) = self.scroll_target {
                self.scroll_target = Some(target.min(self.max_scroll()));
            }
        }

        self.viewport_height = height.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Largest scroll position; the last section can always reach the top
    pub fn max_scroll(&self) -> usize {
        let by_content = self
            .layout
            .lines
            .len()
            .saturating_sub(self.viewport_height);
        let by_anchor = self
            .layout
            .anchors
            .last()
            .map_or(0, |anchor| anchor.top.saturating_sub(self.click_offset));
        by_content.max(by_anchor)
    }

    // ─────────────────────────────────────────────────────────
    // Navigator
    // ─────────────────────────────────────────────────────────

    /// Navigator rows for the current expansion
    pub fn nav_entries(&self) -> Vec<FlatSection<'static>> {
        visible_sections(reference_sections(), &self.expanded)
    }

    fn nav_section(&self) -> Option<&'static NavigationSection> {
        self.nav_entries()
            .get(self.nav_selected)
            .map(|entry| entry.section)
    }

    pub fn nav_next(&mut self) {
        let count = self.nav_entries().len();
        if self.nav_selected + 1 < count {
            self.nav_selected += 1;
        }
    }

    pub fn nav_previous(&mut self) {
        self.nav_selected = self.nav_selected.saturating_sub(1);
    }

    pub fn nav_first(&mut self) {
        self.nav_selected = 0;
    }

    pub fn nav_last(&mut self) {
        self.nav_selected = self.nav_entries().len().saturating_sub(1);
    }

    /// Flip the subtree under the cursor
    pub fn nav_toggle(&mut self) {
        let Some(section) = self.nav_section() else {
            return;
        };
        if !section.has_children() {
            return;
        }
        if !self.expanded.remove(section.id) {
            self.expanded.insert(section.id.to_string());
        }
    }

    pub fn nav_expand(&mut self) {
        if let Some(section) = self.nav_section().filter(|s| s.has_children()) {
            self.expanded.insert(section.id.to_string());
        }
    }

    /// Collapse the cursor's subtree, or move to its parent
    pub fn nav_collapse(&mut self) {
        let entries = self.nav_entries();
        let Some(entry) = entries.get(self.nav_selected) else {
            return;
        };
        if entry.section.has_children() && self.expanded.remove(entry.section.id) {
            return;
        }
        if let Some(parent) = entries[..self.nav_selected]
            .iter()
            .rposition(|candidate| candidate.depth < entry.depth)
        {
            self.nav_selected = parent;
        }
    }

    /// Scroll to the section under the cursor
    pub fn nav_activate(&mut self, now: Instant) -> Option<&'static str> {
        let section = self.nav_section()?;
        self.scroll_to_section(section.id, now).then_some(section.id)
    }

    /// Open or close the overlay (narrow) or focus the navigator (wide)
    pub fn toggle_navigator(&mut self) {
        if self.narrow {
            self.nav_overlay_open = !self.nav_overlay_open;
            self.focus = if self.nav_overlay_open {
                ReferenceFocus::Navigator
            } else {
                ReferenceFocus::Content
            };
        } else {
            self.focus = ReferenceFocus::Navigator;
        }
    }

    pub fn close_navigator(&mut self) {
        if self.nav_overlay_open {
            self.nav_overlay_open = false;
            self.focus = ReferenceFocus::Content;
        }
    }

    pub fn switch_focus(&mut self) {
        if !self.navigator_visible() {
            return;
        }
        self.focus = match self.focus {
            ReferenceFocus::Navigator => ReferenceFocus::Content,
            ReferenceFocus::Content => ReferenceFocus::Navigator,
        };
    }

    // ─────────────────────────────────────────────────────────
    // Body scrolling
    // ─────────────────────────────────────────────────────────

    /// Animate towards `id` and mark it active immediately
    pub fn scroll_to_section(&mut self, id: &str, now: Instant) -> bool {
        let Some(top) = self.layout.anchor_top(id) else {
            warn!("No reference section with id {:?}", id);
            return false;
        };
        let target = top.saturating_sub(self.click_offset).min(self.max_scroll());
        self.active_section = id.to_string();
        self.scroll_target = (target != self.scroll).then_some(target);
        self.throttle.request(now);
        self.close_navigator();
        true
    }

    /// Manual scroll; cancels any animation
    pub fn scroll_by(&mut self, delta: isize, now: Instant) {
        self.scroll_target = None;
        let target = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
        self.set_scroll(target, now);
    }

    pub fn page_down(&mut self, now: Instant) {
        self.scroll_by(self.viewport_height.max(1) as isize, now);
    }

    pub fn page_up(&mut self, now: Instant) {
        self.scroll_by(-(self.viewport_height.max(1) as isize), now);
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        self.scroll_target = None;
        self.set_scroll(0, now);
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        self.scroll_target = None;
        self.set_scroll(self.max_scroll(), now);
    }

    fn set_scroll(&mut self, scroll: usize, now: Instant) {
        if scroll != self.scroll {
            self.scroll = scroll;
            if self.throttle.request(now) {
                self.recompute_active();
            }
        }
    }

    /// Advance the scroll animation and flush a throttled recompute
    pub fn tick(&mut self, now: Instant) {
        if let Some(target) = self.scroll_target {
            let distance = target.abs_diff(self.scroll);
            let step = distance.div_ceil(3).max(1);
            let next = if target > self.scroll {
                self.scroll + step
            } else {
                self.scroll - step
            };
            if next == target {
                self.scroll_target = None;
            }
            self.set_scroll(next, now);
        }

        if self.throttle.poll_trailing(now) {
            self.recompute_active();
        }
    }

    /// Pick the section nearest above the scan line; unchanged if none
    pub fn recompute_active(&mut self) {
        let position = self.scroll + self.scan_offset;
        if let Some(id) = nearest_anchor_above(&self.layout.anchors, position) {
            if id != self.active_section {
                trace!("Active reference section {} -> {}", self.active_section, id);
                self.active_section = id.to_string();
            }
        }
    }

    pub fn active(&self) -> Option<&'static NavigationSection> {
        find_section_by_id(reference_sections(), &self.active_section)
    }

    /// YAML example of the active section, if it has one
    pub fn active_example(&self) -> Option<&'static str> {
        self.active().and_then(|section| section.example)
    }
}
