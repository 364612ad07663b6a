//! Configuration types for specview
//!
//! Defines:
//! - `Settings` - Global application settings (`.specview/config.toml`)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (.specview/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub reference: ReferenceSettings,

    #[serde(default)]
    pub download: DownloadSettings,
}

/// Where the specification is fetched from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Base URL (`http://`, `https://`), directory, or YAML file
    #[serde(default = "default_base")]
    pub base: String,

    /// Path of the primary document, relative to `base`
    #[serde(default = "default_yaml_path")]
    pub document_path: String,

    /// Path of the raw YAML listing, relative to `base`
    #[serde(default = "default_yaml_path")]
    pub yaml_path: String,

    /// Path of the raw JSON listing, relative to `base`
    #[serde(default = "default_json_path")]
    pub json_path: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base: default_base(),
            document_path: default_yaml_path(),
            yaml_path: default_yaml_path(),
            json_path: default_json_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_base() -> String {
    "https://www.openclispec.com".to_string()
}

fn default_yaml_path() -> String {
    "/opencli.yaml".to_string()
}

fn default_json_path() -> String {
    "/opencli.json".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Icon set used by the terminal UI
///
/// Nerd Font glyphs require a patched font; Unicode works everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Columns of indentation per tree level
    #[serde(default = "default_tree_indent")]
    pub tree_indent: usize,

    /// Delay before a newly expanded node is scrolled into view
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// How long copy/download status messages stay visible
    #[serde(default = "default_status_clear_secs")]
    pub status_clear_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            tree_indent: default_tree_indent(),
            reveal_delay_ms: default_reveal_delay_ms(),
            status_clear_secs: default_status_clear_secs(),
        }
    }
}

impl UiSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_secs(self.status_clear_secs)
    }
}

fn default_tree_indent() -> usize {
    2
}

fn default_reveal_delay_ms() -> u64 {
    100
}

fn default_status_clear_secs() -> u64 {
    3
}

/// Reference page settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReferenceSettings {
    /// Rows between the content top and a section selected from the navigator
    #[serde(default = "default_click_offset")]
    pub click_offset: usize,

    /// Rows below the content top used as the active-section threshold
    #[serde(default = "default_scan_offset")]
    pub scan_offset: usize,

    /// Minimum spacing between active-section recomputations
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,

    /// Below this terminal width the navigator becomes an overlay
    #[serde(default = "default_nav_breakpoint")]
    pub nav_breakpoint: u16,
}

impl Default for ReferenceSettings {
    fn default() -> Self {
        Self {
            click_offset: default_click_offset(),
            scan_offset: default_scan_offset(),
            throttle_ms: default_throttle_ms(),
            nav_breakpoint: default_nav_breakpoint(),
        }
    }
}

impl ReferenceSettings {
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

fn default_click_offset() -> usize {
    1
}

fn default_scan_offset() -> usize {
    3
}

fn default_throttle_ms() -> u64 {
    100
}

fn default_nav_breakpoint() -> u16 {
    100
}

/// Download settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DownloadSettings {
    /// Directory for downloaded sources (empty = current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl DownloadSettings {
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.source.base, "https://www.openclispec.com");
        assert_eq!(settings.source.document_path, "/opencli.yaml");
        assert_eq!(settings.source.json_path, "/opencli.json");
        assert_eq!(settings.ui.tree_indent, 2);
        assert_eq!(settings.ui.status_clear_secs, 3);
        assert_eq!(settings.reference.throttle_ms, 100);
        assert_eq!(settings.download.directory(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[source]
base = "./site"

[ui]
icons = "nerd_fonts"
"#,
        )
        .unwrap();
        assert_eq!(settings.source.base, "./site");
        assert_eq!(settings.source.yaml_path, "/opencli.yaml");
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.ui.reveal_delay_ms, 100);
        assert_eq!(settings.reference.nav_breakpoint, 100);
    }

    #[test]
    fn test_timeout_never_zero() {
        let source = SourceSettings {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(source.timeout(), Duration::from_secs(1));
    }
}
