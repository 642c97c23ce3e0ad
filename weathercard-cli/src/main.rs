//! Binary crate for the `weathercard` terminal host.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and the city-override prompt
//! - Rendering the card's display tree as ANSI text

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
