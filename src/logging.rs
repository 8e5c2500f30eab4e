//! File logging setup
//!
//! The terminal is owned by the UI, so log records go to a file through a
//! log4rs file appender.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

fn build_config(level: LevelFilter, file_path: &Path) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(file_path)
        .with_context(|| format!("Failed to open log file {}", file_path.display()))?;

    Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("Failed to build log configuration")
}

/// Install the global logger. Call once, before the game starts.
pub fn init_log(level: LevelFilter, file_path: &Path) -> Result<()> {
    let config = build_config(level, file_path)?;
    log4rs::init_config(config).context("Failed to install logger")?;
    Ok(())
}
