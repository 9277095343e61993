use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "gpt-writer.log";

/// Logs go to a file; stdout belongs to the terminal UI.
pub fn init(dir: &Path, level: LevelFilter) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file =
        File::create(&path).with_context(|| format!("Failed to open log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .add_filter_allow_str("gpt_writer")
        .build();

    WriteLogger::init(level, config, file).context("Logger already initialised")?;
    Ok(path)
}
