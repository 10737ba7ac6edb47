//! Configuration file parsing for Skincare Journal
//!
//! Settings live in `<config_dir>/skincare-journal/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings};
pub use types::*;
