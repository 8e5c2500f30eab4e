use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::state::Position;
use crate::error::ConfigError;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Pixel size of one grid cell
    pub cell_size: i32,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    /// Milliseconds between redraws
    pub render_ms: u64,
    /// How long the title screen stays up before the first tick
    pub intro_ms: u64,
    /// Where the apple sits at the start of every run
    pub apple_start: Position,
    /// Fixed RNG seed for apple placement; entropy when None
    pub seed: Option<u64>,
    /// Ring the terminal bell on audio cues
    pub bell: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            cell_size: 40,
            tick_ms: 300,
            render_ms: 33,
            intro_ms: 3000,
            apple_start: Position::new(160, 160),
            seed: None,
            bell: true,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            ..Default::default()
        }
    }

    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::Playfield {
                width: self.width,
                height: self.height,
                cell: self.cell_size,
            });
        }
        // Only the width has to divide evenly; a partial last row is allowed.
        if self.width % self.cell_size != 0 {
            return Err(ConfigError::UnevenWidth {
                width: self.width,
                cell: self.cell_size,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroInterval("tick"));
        }
        if self.render_ms == 0 {
            return Err(ConfigError::ZeroInterval("render"));
        }

        let grid = self.grid();
        if !grid.contains(self.apple_start) || !grid.is_aligned(self.apple_start) {
            return Err(ConfigError::AppleStart {
                x: self.apple_start.x,
                y: self.apple_start.y,
            });
        }

        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_ms)
    }

    pub fn intro_duration(&self) -> Duration {
        Duration::from_millis(self.intro_ms)
    }
}
