//! Skincare Journal Library
//!
//! Binary-side glue: command-line parsing, start-up, and the headless
//! NDJSON runner. The catalog logic lives in the workspace crates.

pub mod app;
pub mod cli;
pub mod headless;

// Re-export main entry points
pub use app::run;
pub use cli::Args;
