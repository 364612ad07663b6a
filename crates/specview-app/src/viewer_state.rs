//! Spec viewer state
//!
//! One [`SpecViewerState`] exists per mount of the Spec page. It owns the
//! parsed document, the expansion set, the cached raw listings and the
//! cursor and scroll positions. Unmounting drops all of it; the next mount
//! starts from scratch under a new [`MountId`].

use std::fmt;
use std::time::{Duration, Instant};

use specview_core::{row_index, visible_rows, DocumentNode, ExpansionState, PathKey, TreeRow};

use crate::source::SourceFormat;

/// Identity of one viewer mount
///
/// Fetch results carry the id of the mount that requested them so that
/// late results for an unmounted viewer can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub u64);

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount#{}", self.0)
    }
}

/// Primary document load state
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(DocumentNode),
    /// Full user-facing message
    Failed(String),
}

/// How the document is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Tree,
    Yaml,
    Json,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Tree, ViewMode::Yaml, ViewMode::Json];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Tree => "Tree",
            ViewMode::Yaml => "YAML",
            ViewMode::Json => "JSON",
        }
    }

    /// Raw listing shown by this mode, `None` for the tree
    pub fn source_format(&self) -> Option<SourceFormat> {
        match self {
            ViewMode::Tree => None,
            ViewMode::Yaml => Some(SourceFormat::Yaml),
            ViewMode::Json => Some(SourceFormat::Json),
        }
    }

    /// Format copied or downloaded from this mode
    pub fn export_format(&self) -> SourceFormat {
        self.source_format().unwrap_or(SourceFormat::Yaml)
    }

    pub fn next(&self) -> Self {
        match self {
            ViewMode::Tree => ViewMode::Yaml,
            ViewMode::Yaml => ViewMode::Json,
            ViewMode::Json => ViewMode::Tree,
        }
    }
}

/// Lazily fetched raw listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawSource {
    #[default]
    NotRequested,
    Loading,
    Loaded(String),
    Failed(String),
}

impl RawSource {
    pub fn text(&self) -> Option<&str> {
        match self {
            RawSource::Loaded(text) => Some(text),
            _ => None,
        }
    }

    /// A fetch is running or has already succeeded
    pub fn is_settled_or_loading(&self) -> bool {
        matches!(self, RawSource::Loading | RawSource::Loaded(_))
    }
}

/// One raw slot per format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSources {
    pub yaml: RawSource,
    pub json: RawSource,
}

impl RawSources {
    pub fn get(&self, format: SourceFormat) -> &RawSource {
        match format {
            SourceFormat::Yaml => &self.yaml,
            SourceFormat::Json => &self.json,
        }
    }

    pub fn get_mut(&mut self, format: SourceFormat) -> &mut RawSource {
        match format {
            SourceFormat::Yaml => &mut self.yaml,
            SourceFormat::Json => &mut self.json,
        }
    }
}

/// Toolbar action waiting on a raw listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Copy,
    Download,
}

/// Scroll a just-expanded row into view once `due` has passed
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReveal {
    pub path: PathKey,
    pub due: Instant,
}

/// State of one mounted spec viewer
#[derive(Debug, Clone)]
pub struct SpecViewerState {
    pub mount: MountId,
    pub load: LoadState,
    pub expansion: ExpansionState,
    pub view_mode: ViewMode,
    pub raw: RawSources,

    /// Cursor row in tree mode
    pub selected: usize,
    /// First visible tree row
    pub scroll_offset: usize,
    /// First visible line of the raw listing
    pub raw_scroll: usize,
    /// Rows available to the tree or listing, updated by the renderer
    pub viewport_height: usize,

    pub pending_reveal: Option<PendingReveal>,
    pub pending_exports: Vec<(ExportKind, SourceFormat)>,

    rows: Vec<TreeRow>,
}

impl SpecViewerState {
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            load: LoadState::Loading,
            expansion: ExpansionState::new(),
            view_mode: ViewMode::Tree,
            raw: RawSources::default(),
            selected: 0,
            scroll_offset: 0,
            raw_scroll: 0,
            viewport_height: 1,
            pending_reveal: None,
            pending_exports: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn document(&self) -> Option<&DocumentNode> {
        match &self.load {
            LoadState::Loaded(document) => Some(document),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn set_document(&mut self, document: DocumentNode) {
        self.load = LoadState::Loaded(document);
        self.refresh_rows();
    }

    pub fn set_failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
        self.rows.clear();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Visible rows for the current expansion state
    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.selected)
    }

    /// Rebuild the row cache, keeping the cursor on the same path if it is
    /// still visible, otherwise on its nearest visible ancestor
    fn refresh_rows(&mut self) {
        let previous = self.selected_row().map(|row| row.path.clone());
        self.rows = match &self.load {
            LoadState::Loaded(document) => visible_rows(document, &self.expansion),
            _ => Vec::new(),
        };

        if let Some(path) = previous {
            let found = row_index(&self.rows, &path).or_else(|| {
                path.ancestors()
                    .iter()
                    .rev()
                    .find_map(|ancestor| row_index(&self.rows, ancestor))
            });
            self.selected = found.unwrap_or(0);
        }
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.clamp_scroll();
        self.ensure_selected_visible();
    }

    // ─────────────────────────────────────────────────────────
    // Expansion
    // ─────────────────────────────────────────────────────────

    /// Toggle `path`; schedules a reveal when it becomes expanded
    pub fn toggle(&mut self, path: &PathKey, now: Instant, reveal_delay: Duration) -> bool {
        let expanded = self.expansion.toggle(path);
        if expanded && !path.is_root() {
            self.pending_reveal = Some(PendingReveal {
                path: path.clone(),
                due: now + reveal_delay,
            });
        }
        self.refresh_rows();
        expanded
    }

    /// Toggle the row under the cursor if it is expandable
    pub fn toggle_selected(&mut self, now: Instant, reveal_delay: Duration) -> Option<bool> {
        let row = self.selected_row()?;
        if !row.expandable {
            return None;
        }
        let path = row.path.clone();
        Some(self.toggle(&path, now, reveal_delay))
    }

    /// Expand the cursor row, or step onto its first child if already open
    pub fn expand_selected(&mut self, now: Instant, reveal_delay: Duration) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if !row.expandable {
            return;
        }
        if row.expanded {
            self.select_next();
        } else {
            let path = row.path.clone();
            self.toggle(&path, now, reveal_delay);
        }
    }

    /// Collapse the cursor row, or step onto its parent if already closed
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.expandable && row.expanded {
            let path = row.path.clone();
            self.expansion.collapse(&path);
            self.refresh_rows();
        } else if let Some(index) = row
            .path
            .parent()
            .and_then(|parent| row_index(&self.rows, &parent))
        {
            self.selected = index;
            self.ensure_selected_visible();
        }
    }

    pub fn expand_all(&mut self) {
        if let LoadState::Loaded(document) = &self.load {
            self.expansion.expand_all(document);
        }
        self.refresh_rows();
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
        self.pending_reveal = None;
        self.refresh_rows();
    }

    /// Center a pending reveal once it is due
    ///
    /// Returns true if the reveal fired. A row that is no longer visible is
    /// dropped without scrolling.
    pub fn poll_reveal(&mut self, now: Instant) -> bool {
        let due = matches!(&self.pending_reveal, Some(reveal) if now >= reveal.due);
        if !due {
            return false;
        }
        let Some(reveal) = self.pending_reveal.take() else {
            return false;
        };
        match row_index(&self.rows, &reveal.path) {
            Some(index) => {
                self.scroll_offset = index.saturating_sub(self.viewport_height / 2);
                self.clamp_scroll();
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Tree cursor
    // ─────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
        self.ensure_selected_visible();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selected_visible();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_selected_visible();
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
        self.ensure_selected_visible();
    }

    pub fn page_down(&mut self) {
        let page = self.viewport_height.max(1);
        self.selected = (self.selected + page).min(self.rows.len().saturating_sub(1));
        self.ensure_selected_visible();
    }

    pub fn page_up(&mut self) {
        let page = self.viewport_height.max(1);
        self.selected = self.selected.saturating_sub(page);
        self.ensure_selected_visible();
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.viewport_height.max(1))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn ensure_selected_visible(&mut self) {
        let height = self.viewport_height.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    /// Record the height handed to the tree or listing by the renderer
    pub fn set_viewport_height(&mut self, height: usize) {
        if height != self.viewport_height {
            self.viewport_height = height.max(1);
            self.clamp_scroll();
            self.ensure_selected_visible();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Raw listing
    // ─────────────────────────────────────────────────────────

    /// Text of the listing shown by the active mode, if loaded
    pub fn active_raw_text(&self) -> Option<&str> {
        self.view_mode
            .source_format()
            .and_then(|format| self.raw.get(format).text())
    }

    fn raw_line_count(&self) -> usize {
        self.active_raw_text().map_or(0, |text| text.lines().count())
    }

    fn max_raw_scroll(&self) -> usize {
        self.raw_line_count()
            .saturating_sub(self.viewport_height.max(1))
    }

    pub fn scroll_raw_by(&mut self, delta: isize) {
        let target = self.raw_scroll.saturating_add_signed(delta);
        self.raw_scroll = target.min(self.max_raw_scroll());
    }

    pub fn scroll_raw_to_top(&mut self) {
        self.raw_scroll = 0;
    }

    pub fn scroll_raw_to_bottom(&mut self) {
        self.raw_scroll = self.max_raw_scroll();
    }

    /// Switch mode; the raw listing always starts at its first line
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode != self.view_mode {
            self.view_mode = mode;
            self.raw_scroll = 0;
        }
    }
}
