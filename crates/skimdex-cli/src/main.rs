#![forbid(unsafe_code)]

//! Skimdex CLI
//!
//! Command-line interface for indexing, searching, skimming, and sanitizing
//! exported Markdown docsets.

use anyhow::Result;
use clap::Parser;

use skimdex_cli::commands::{self, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    commands::run(cli)?;
    Ok(())
}
