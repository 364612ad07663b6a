//! Settings parser for .specview/config.toml

use super::types::Settings;
use specview_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const SPECVIEW_DIR: &str = ".specview";

/// Load settings from `.specview/config.toml` under `project_path`
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(SPECVIEW_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config in .specview/
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let specview_dir = project_path.join(SPECVIEW_DIR);

    if !specview_dir.exists() {
        std::fs::create_dir_all(&specview_dir)
            .map_err(|e| Error::config(format!("Failed to create .specview dir: {}", e)))?;
    }

    let config_path = specview_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# specview configuration

[source]
# Base URL, local directory, or a single YAML file
base = "https://www.openclispec.com"
document_path = "/opencli.yaml"
yaml_path = "/opencli.yaml"
json_path = "/opencli.json"
timeout_secs = 15

[ui]
icons = "unicode"          # or "nerd_fonts"
tree_indent = 2
reveal_delay_ms = 100      # Delay before scrolling an expanded node into view
status_clear_secs = 3

[reference]
click_offset = 1           # Rows above a section selected from the navigator
scan_offset = 3            # Active-section threshold below the content top
throttle_ms = 100
nav_breakpoint = 100       # Narrower terminals show the navigator as an overlay

[download]
# directory = "."
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
