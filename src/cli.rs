//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use journal_app::config::{default_config_dir, Settings};
use journal_core::prelude::*;
use journal_core::{FilterState, ProductType, SortKey, AVAILABLE_TAGS};

/// Skincare Journal - browse and curate a skincare product catalog
#[derive(Parser, Debug, Default)]
#[command(name = "journal")]
#[command(about = "Browse and curate a skincare product catalog", long_about = None)]
pub struct Args {
    /// Catalog service base URL (overrides config.toml)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Products requested per page (overrides config.toml)
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Write a default config.toml and exit
    #[arg(long)]
    pub init_config: bool,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    pub headless: bool,

    /// Initial search text
    #[arg(long)]
    pub search: Option<String>,

    /// Initial product type filter, e.g. "Serum"
    #[arg(long = "type", value_name = "TYPE")]
    pub product_type: Option<String>,

    /// Initial brand filter
    #[arg(long)]
    pub brand: Option<String>,

    /// Initial tag filter; repeat for several tags
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Initial sort key, as sent to the service (e.g. "price-desc")
    #[arg(long)]
    pub sort: Option<String>,

    /// Headless only: stop after this many pages
    #[arg(long, value_name = "N")]
    pub max_pages: Option<u32>,
}

impl Args {
    /// Explicit `--config-dir`, else the platform config directory
    pub fn config_dir(&self) -> Result<PathBuf> {
        self.config_dir
            .clone()
            .or_else(default_config_dir)
            .ok_or_else(|| Error::config("No config directory available; pass --config-dir"))
    }

    /// Apply `--api-url` and `--page-size` on top of the loaded file
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if let Some(size) = self.page_size {
            settings.api.page_size = size;
        }
    }

    /// Filter the first page is loaded under
    pub fn initial_filter(&self) -> Result<FilterState> {
        let mut filter = FilterState::default();

        if let Some(search) = &self.search {
            filter = filter.with_search(search.trim());
        }
        if let Some(value) = &self.product_type {
            let product_type = ProductType::parse(value)
                .ok_or_else(|| Error::config_invalid(format!("Unknown product type: {value}")))?;
            filter = filter.with_product_type(Some(product_type));
        }
        if let Some(brand) = &self.brand {
            filter = filter.with_brand(Some(brand.clone()));
        }
        for tag in &self.tags {
            if !AVAILABLE_TAGS.contains(&tag.as_str()) {
                return Err(Error::config_invalid(format!("Unknown tag: {tag}")));
            }
            if !filter.has_tag(tag) {
                filter = filter.with_tag_toggled(tag);
            }
        }
        if let Some(value) = &self.sort {
            let sort = SortKey::parse(value)
                .ok_or_else(|| Error::config_invalid(format!("Unknown sort key: {value}")))?;
            filter = filter.with_sort(sort);
        }

        Ok(filter)
    }
}
