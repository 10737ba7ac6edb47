//! Application start-up
//!
//! Installs error reporting and logging, resolves settings from the config
//! file and CLI flags, then hands an Engine to the TUI or headless runner.

use std::process::ExitCode;

use journal_app::config::{init_config_dir, load_settings, Settings};
use journal_app::Engine;
use journal_client::HttpCatalog;
use journal_core::prelude::*;

use crate::cli::Args;
use crate::headless::runner::run_headless;

/// Main application entry point
pub async fn run(args: Args) -> Result<ExitCode> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let config_dir = args.config_dir()?;

    if args.init_config {
        let path = init_config_dir(&config_dir)
            .with_context(|| format!("Writing default config to {}", config_dir.display()))?;
        println!("Config file: {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    // To file, since the TUI owns stdout
    journal_core::logging::init().context("Initializing logging")?;

    let settings = resolve_settings(&args, &config_dir)?;
    let filter = args.initial_filter()?;
    info!(
        "Catalog {} (page size {}), initial filter active: {}",
        settings.api.base_url,
        settings.api.page_size,
        filter.has_active_filters()
    );

    let catalog = HttpCatalog::new(&settings.api.base_url, settings.request_timeout())
        .context("Building catalog client")?;
    let engine = Engine::with_initial_filter(catalog, settings, filter);

    let result = if args.headless {
        run_headless(engine, args.max_pages).await
    } else {
        journal_tui::run(engine).await.map(|()| ExitCode::SUCCESS)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Skincare Journal exiting");
    result
}

/// Config file, then CLI overrides, then validation
fn resolve_settings(args: &Args, config_dir: &std::path::Path) -> Result<Settings> {
    let mut settings = load_settings(config_dir);
    args.apply_overrides(&mut settings);
    settings.validate().context("Validating settings")?;
    Ok(settings)
}
