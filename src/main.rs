//! Skincare Journal - a terminal catalog manager for a skincare product journal
//!
//! This is the binary entry point. All logic lives in the library.

use std::process::ExitCode;

use clap::Parser;
use journal_core::prelude::*;
use skincare_journal::Args;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    skincare_journal::run(args).await
}
