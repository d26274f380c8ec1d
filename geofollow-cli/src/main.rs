//! GeoFollow CLI - Command-line interface
//!
//! This binary replays a recorded route through the GeoFollow library,
//! fetching static map images as the simulated device moves and writing
//! them to disk.

mod commands;
mod display;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Location-following static map display.
#[derive(Parser)]
#[command(name = "geofollow", version = geofollow::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow a recorded route, updating the map as the position moves.
    Follow(commands::follow::FollowArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Follow(args) => commands::follow::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
