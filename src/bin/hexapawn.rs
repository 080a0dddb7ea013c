//! Hexapawn CLI - play against or train the rote-learning engine
//!
//! - `play`: a human plays the engine at the terminal; the engine learns
//!   from each loss
//! - `train`: the engine plays scripted opponents in batch

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(version, about = "Hexapawn with a rote-learning engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(hexapawn::cli::commands::play::PlayArgs),

    /// Train the engine against a scripted opponent
    Train(hexapawn::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match &cli.command {
        Commands::Train(args) if args.verbose => "hexapawn=debug",
        _ => "warn",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Commands::Play(args) => hexapawn::cli::commands::play::execute(args),
        Commands::Train(args) => hexapawn::cli::commands::train::execute(args),
    }
}
