use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging::init_log;
use grid_snake::modes::HumanMode;
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid Snake arcade game for the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playfield width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Playfield height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Pixel size of one grid cell
    #[arg(long)]
    cell_size: Option<i32>,

    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Fixed seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the title screen
    #[arg(long)]
    no_intro: bool,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,

    /// Where to write the log
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_intro {
            config.intro_ms = 0;
        }
        if self.mute {
            config.bell = false;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_log(cli.log_level, &cli.log_file)?;

    let config = cli.game_config()?;
    info!("config: {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
