use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::DEFAULT_PROMPT;

/// Shell command line arguments
#[derive(Parser, Debug)]
#[command(name = "minish", version)]
#[command(about = "A small interactive shell", long_about = None)]
pub struct ShellArgs {
    /// Prompt printed before each line is read
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, env = "MINISH_LOG", default_value = "off")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "MINISH_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
