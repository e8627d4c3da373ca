use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use grid_snake::telemetry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic Snake on a wrapping grid")]
struct Cli {
    /// Seed for food placement, to replay the same game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_file.as_deref())?;

    let mut human_mode = HumanMode::new(GameConfig::default(), cli.seed);
    human_mode.run().await?;

    Ok(())
}
