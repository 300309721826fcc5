//! Sitemap Modal
//!
//! Headless driver for the sitemap entry modal form.
//!
//! This is the main entry point for the command-line binary.

use clap::Parser;
use sitemap_cli::Cli;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout carries command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    sitemap_cli::run(Cli::parse())
}
