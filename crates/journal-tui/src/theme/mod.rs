//! Centralized theme for the Cyber-Glass TUI design.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;
