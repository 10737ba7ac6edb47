//! Configuration types for Skincare Journal
//!
//! Defines `Settings` and its per-section sub-types, all loaded from
//! `config.toml`.

use journal_client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Smallest and largest page size the catalog service accepts
pub const PAGE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Catalog service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the product collection
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Items requested per page (`limit` parameter)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before deleting a product
    #[serde(default = "default_true")]
    pub confirm_delete: bool,

    /// Quiescence window before a scroll signal loads the next page
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,

    /// How close to the last row the selection must be to count as "near end"
    #[serde(default = "default_prefetch_rows")]
    pub prefetch_rows: usize,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_delete: true,
            scroll_debounce_ms: default_scroll_debounce_ms(),
            prefetch_rows: default_prefetch_rows(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Expand ingredient lists by default
    #[serde(default)]
    pub show_ingredients: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}

fn default_scroll_debounce_ms() -> u64 {
    200
}

fn default_prefetch_rows() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:8080/api/products");
        assert_eq!(settings.api.page_size, 20);
        assert_eq!(settings.api.timeout_ms, 10_000);
        assert!(settings.behavior.confirm_delete);
        assert_eq!(settings.behavior.scroll_debounce_ms, 200);
        assert_eq!(settings.behavior.prefetch_rows, 3);
        assert!(!settings.ui.show_ingredients);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[api]
page_size = 50
"#,
        )
        .unwrap();
        assert_eq!(settings.api.page_size, 50);
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(settings.behavior.confirm_delete);
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let mut settings = Settings::default();
        settings.behavior.confirm_delete = false;
        settings.ui.show_ingredients = true;

        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
