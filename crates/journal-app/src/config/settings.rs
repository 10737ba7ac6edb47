//! Settings parser for config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{Settings, PAGE_SIZE_RANGE};
use journal_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "skincare-journal";

/// Platform configuration directory for the app
/// (e.g. `~/.config/skincare-journal` on Linux).
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Load settings from `<config_dir>/config.toml`.
///
/// A missing or unreadable file yields defaults; values are not validated
/// here, call [`Settings::validate`] after applying CLI overrides.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

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

/// Write a commented default config.toml unless one already exists.
///
/// Returns the path of the config file.
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

const DEFAULT_CONFIG: &str = r#"# Skincare Journal Configuration

[api]
base_url = "http://localhost:8080/api/products"
page_size = 20          # Products per page (1-100)
timeout_ms = 10000      # Per-request timeout

[behavior]
confirm_delete = true   # Ask before deleting a product
scroll_debounce_ms = 200
prefetch_rows = 3       # Load the next page this many rows before the end

[ui]
show_ingredients = false
"#;

impl Settings {
    /// Reject values the rest of the app cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZE_RANGE.contains(&self.api.page_size) {
            return Err(Error::config_invalid(format!(
                "api.page_size must be between {} and {}, got {}",
                PAGE_SIZE_RANGE.start(),
                PAGE_SIZE_RANGE.end(),
                self.api.page_size
            )));
        }
        if self.api.timeout_ms == 0 {
            return Err(Error::config_invalid("api.timeout_ms must be positive"));
        }
        journal_client::parse_base_url(&self.api.base_url)
            .map_err(|e| Error::config_invalid(e.to_string()))?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.behavior.scroll_debounce_ms)
    }
}
