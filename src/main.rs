//! Seats CLI - find and book a lunch seat on the office floor.

mod api;
mod cli;
mod commands;
mod config;
mod engine;
mod floor;
mod types;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Controlled by RUST_LOG; quiet by default so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute().await
}
