use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use term_snake::game::GameConfig;
use term_snake::logging::init_file_logging;
use term_snake::modes::HumanMode;
use tracing::info;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Starting tick interval in milliseconds (lower is faster)
    #[arg(long)]
    speed: Option<u64>,

    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    // Create game configuration from file and CLI arguments
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(speed) = cli.speed {
        config.tick_interval_ms = speed;
    }
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {e}"))?;
    info!(?config, "Starting");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
