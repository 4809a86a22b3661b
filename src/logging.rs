use crate::errors::ShellResult;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

/// Install the global logger.
///
/// Logs go to `file` when given (appending), otherwise to stderr. With
/// `LevelFilter::Off` nothing is installed so shell output stays untouched.
pub fn init(level: LevelFilter, file: Option<&Path>) -> ShellResult<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    match file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            WriteLogger::init(level, config, file)?;
        }
        None => TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?,
    }

    Ok(())
}
