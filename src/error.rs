use std::path::PathBuf;

use thiserror::Error;

/// Problems with a [`GameConfig`](crate::game::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),

    #[error("playfield must be at least one cell ({cell}px), got {width}x{height}")]
    Playfield { width: i32, height: i32, cell: i32 },

    #[error("width {width} is not a multiple of cell size {cell}")]
    UnevenWidth { width: i32, cell: i32 },

    #[error("{0} interval must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("apple start ({x}, {y}) is not on a whole cell of the playfield")]
    AppleStart { x: i32, y: i32 },

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
